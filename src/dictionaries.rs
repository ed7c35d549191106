use crate::cli::DictionaryChoice;
use crate::dictionary::Dictionary;

pub const JA_EN_VERSION: u32 = 1;
pub const JA_KO_VERSION: u32 = 2;

pub const JA_EN: &[(&str, &str)] = &[
    ("全体デザイン設定", "Overall Design Config"),
    ("トーン", "Tone"),
    ("ビジュアル・アイデンティティ", "Visual Identity"),
    ("背景色", "Background Color"),
    ("文字色", "Text Color"),
    ("アクセントカラー", "Accent Color"),
    ("画像スタイル", "Image Style"),
    ("特徴", "Features"),
    ("イメージャリ", "Imagery"),
    ("構成", "Composition"),
    ("タイポグラフィ", "Typography"),
    ("見出し", "Headers"),
    ("スタイル", "Style"),
    ("質感", "Texture"),
    ("エフェクト", "Effects"),
    ("形状", "Shapes"),
    ("色数", "Color Count"),
    ("構造", "Structure"),
    ("雰囲気", "Atmosphere"),
    ("照明", "Lighting"),
    ("線画", "Line Work"),
    ("本文", "Body Text"),
    ("数字", "Numerals"),
    ("モチーフ", "Motifs"),
    ("フォント", "Fonts"),
    ("タイトル", "Title"),
    ("写真", "Photography"),
    ("効果", "Effects"),
    ("要素", "Elements"),
    ("視点", "Perspective"),
    ("色の見え方", "Color Appearance"),
    ("色使い", "Color Usage"),
    ("色調", "Color Tone"),
    ("エージェンティック要素", "Agentic Elements"),
    ("구성", "Composition"),
    ("글자색", "Text Color"),
    ("배경색", "Background Color"),
    ("스타일", "Style"),
    ("제목", "Title"),
    ("질감", "Texture"),
    ("타이포그래피", "Typography"),
    ("특징", "Features"),
    ("형상", "Shapes"),
    ("なし", "None"),
    ("あり", "Yes"),
    ("白", "White"),
    ("黒", "Black"),
    ("青", "Blue"),
    ("赤", "Red"),
    ("黄", "Yellow"),
    ("緑", "Green"),
    ("金", "Gold"),
    ("銀", "Silver"),
    ("和紙", "Washi Paper"),
    ("モダン", "Modern"),
    ("シンプル", "Simple"),
    ("レトロ", "Retro"),
    ("未来", "Future"),
    ("伝統", "Traditional"),
    ("高級", "Luxury"),
    ("洗練", "Sophisticated"),
    ("静寂", "Quiet/Serene"),
    ("可愛い", "Cute/Kawaii"),
];

pub const JA_KO: &[(&str, &str)] = &[
    ("全体デザイン設定", "전체 디자인 설정"),
    ("トーン", "톤"),
    ("ビジュアル・アイデンティティ", "비주얼 아이덴티티"),
    ("背景色", "배경색"),
    ("文字色", "글자색"),
    ("アクセントカラー", "강조색"),
    ("画像スタイル", "이미지 스타일"),
    ("特徴", "특징"),
    ("イメージャリ", "이미지"),
    ("構成", "구성"),
    ("タイポグラフィ", "타이포그래피"),
    ("見出し", "헤드라인"),
    ("スタイル", "스타일"),
    ("質感", "질감"),
    ("エフェクト", "효과"),
    ("形状", "모양/형태"),
    ("色数", "색상 수"),
    ("構造", "구조"),
    ("雰囲気", "분위기"),
    ("照明", "조명"),
    ("線画", "선화"),
    ("本文", "본문"),
    ("数字", "숫자"),
    ("モチーフ", "모티브"),
    ("フォント", "폰트"),
    ("タイトル", "제목"),
    ("写真", "사진"),
    ("効果", "효과"),
    ("要素", "요소"),
    ("視点", "시점"),
    ("色の見え方", "색상의 보임"),
    ("色使い", "색상 사용"),
    ("色調", "색조"),
    ("エージェンティック要素", "에이전틱 요소"),
    ("瞳", "눈동자"),
    ("または", "또는"),
    ("の", "의"),
    ("を用いた", "를 사용한"),
    ("に描かれた", "에 그려진"),
    ("への", "에 대한"),
    ("と", "와"),
    ("風", "풍"),
    ("な", "한"),
    ("非常に", "매우"),
    ("薄い", "옅은"),
    ("散る", "흩날리는"),
    ("入った", "들어간"),
    ("大きな", "큰"),
    ("で", "이고"),
    ("丸みを帯びた", "둥근"),
    ("明確な", "명확한"),
    ("階層", "계층"),
    ("装飾的", "장식적"),
    ("不揃いな", "고르지 않은"),
    ("黒板", "칠판"),
    ("粉", "가루"),
    ("かすれ", "갈라짐"),
    ("消し跡", "지운 자국"),
    ("飾り枠", "장식 테두리"),
    ("フリーハンド", "프리핸드"),
    ("指紋のついた", "지문이 묻은"),
    ("わずかな", "약간의"),
    ("丸っこい", "동글동글한"),
    ("粘土で作ったような", "점토로 만든 듯한"),
    ("立体文字", "입체 문자"),
    ("線", "선"),
    ("のみで構成された", "만으로 구성된"),
    ("均一な", "균일한"),
    ("太さ", "굵기"),
    ("圧倒的な", "압도적인"),
    ("大きく使っても", "크게 사용해도"),
    ("圧迫感のない", "압박감이 없는"),
    ("細さ", "가늘기"),
    ("彩度を上げた", "채도를 높인"),
    ("原色", "원색"),
    ("おもちゃ", "장난감"),
    ("プラスチック", "플라스틱"),
    ("光沢", "광택"),
    ("浅い被写界深度", "얕은 피사계 심도"),
    ("ボケ足", "보케(배경 흐림)"),
    ("俯瞰", "조감(위에서 내려다봄)"),
    ("鉄道模型", "철도 모형"),
    ("太い", "굵은"),
    ("丸い", "둥근"),
    ("子供っぽい", "아이 같은"),
    ("遊び心", "장난기"),
    ("情報的", "정보적"),
    ("Japaneseは", "일본어는"),
    ("Japaneseに", "일본어에"),
    ("をUsing", "를 사용하여"),
    ("手足の大きな", "손발이 큰"),
    ("微細な", "미세한"),
    ("浮遊する", "부유하는"),
    ("相互接続された", "상호 연결된"),
    ("バラの花", "장미 꽃"),
    ("スクリーントーン", "스크린톤"),
    ("ライトグレー", "라이트 그레이"),
    ("罫線入りの紙", "줄이 그어진 종이"),
    ("背景に", "배경에"),
    ("目", "눈"),
    ("スClean", "클린"),
];

pub const EN_KO_KEYWORDS: &[(&str, &str)] = &[
    ("Creative", "창의적"),
    ("Rough", "러프한"),
    ("Personal", "개인적"),
    ("Brainstorming", "브레인스토밍"),
    ("Authentic", "진정성 있는"),
    ("Authentic.", "진정성 있는"),
    ("Friendly", "친근한"),
    ("Professional", "전문적"),
    ("Trustworthy", "신뢰할 수 있는"),
    ("Modern", "모던한"),
    ("Modern.", "모던한"),
    ("Inclusive", "포용적"),
    ("Clear", "명확한"),
    ("Playful", "유쾌한"),
    ("Information", "정보 중심"),
    ("Girly", "에너제틱 소녀감성"),
    ("Love", "사랑스러운"),
    ("Dream", "몽환적"),
    ("Sparkle", "반짝이는"),
    ("Sparkle.", "반짝이는"),
    ("Shojo Manga", "순정만화 스타일"),
    ("Isometric", "아이소메트릭"),
    ("Colorful", "다채로운"),
    ("Colorful.", "다채로운"),
    ("High Impact", "강렬한 임팩트"),
    ("Structure", "구조적"),
    ("Context", "맥락 중심"),
    ("Data", "데이터 중심"),
    ("Focus", "집중"),
    ("Minimal", "미니멀"),
    ("Tech", "테크놀로지"),
    ("Future", "미래지향적"),
    ("Nature", "자연주의"),
    ("Brand", "브랜드 아이덴티티"),
    ("Opening", "오프닝"),
    ("Emotional", "감성적"),
    ("Spark", "영감"),
    ("Agenda", "목차/아젠다"),
    ("Evidence", "증거/팩트"),
    ("Conclusion", "결론"),
    ("Ethos", "신뢰/권위"),
    ("Action", "행동유도"),
    ("Memphis", "멤피스 스타일"),
    ("Flat illustration", "플랫 일러스트레이션"),
    ("Geometric", "기하학적"),
    ("Bauhaus", "바우하우스"),
];

pub fn builtin(choice: DictionaryChoice) -> Dictionary {
    match choice {
        DictionaryChoice::JaEn => Dictionary::from_pairs(choice.as_str(), JA_EN_VERSION, JA_EN),
        DictionaryChoice::JaKo => Dictionary::from_pairs(choice.as_str(), JA_KO_VERSION, JA_KO),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{EN_KO_KEYWORDS, JA_EN, JA_KO, builtin};
    use crate::cli::DictionaryChoice;
    use crate::script::contains_cjk;

    #[test]
    fn builtin_dictionaries_have_unique_keys() {
        for table in [JA_EN, JA_KO, EN_KO_KEYWORDS] {
            let keys = table.iter().map(|(key, _)| *key).collect::<HashSet<&str>>();
            assert_eq!(keys.len(), table.len());
        }
    }

    #[test]
    fn japanese_targets_never_reintroduce_cjk() {
        for (_, target) in JA_EN.iter().chain(JA_KO.iter()) {
            assert!(!contains_cjk(target), "target {target} still holds CJK");
        }
    }

    #[test]
    fn ja_ko_translates_compound_phrase_before_particles() {
        let dictionary = builtin(DictionaryChoice::JaKo);
        assert_eq!(dictionary.substitute("罫線入りの紙"), "줄이 그어진 종이");
        assert_eq!(dictionary.substitute("色の見え方"), "색상의 보임");
    }

    #[test]
    fn ja_en_translates_report_keys() {
        let dictionary = builtin(DictionaryChoice::JaEn);
        assert_eq!(dictionary.substitute("背景色: 白"), "Background Color: White");
        assert_eq!(dictionary.name(), "ja-en");
    }
}
