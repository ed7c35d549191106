#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Script {
    Latin,
    Hangul,
    Cjk,
    Other,
}

pub const CJK_RANGES: &[(char, char)] = &[
    ('\u{3000}', '\u{303F}'),
    ('\u{3040}', '\u{309F}'),
    ('\u{30A0}', '\u{30FF}'),
    ('\u{FF00}', '\u{FFEF}'),
    ('\u{4E00}', '\u{9FFF}'),
    ('\u{3400}', '\u{4DBF}'),
];

pub const HANGUL_RANGES: &[(char, char)] = &[
    ('\u{AC00}', '\u{D7A3}'),
    ('\u{1100}', '\u{11FF}'),
    ('\u{3130}', '\u{318F}'),
];

const LATIN_RANGES: &[(char, char)] = &[
    ('A', 'Z'),
    ('a', 'z'),
    ('\u{00C0}', '\u{00D6}'),
    ('\u{00D8}', '\u{00F6}'),
    ('\u{00F8}', '\u{024F}'),
];

pub fn classify(character: char) -> Script {
    if in_ranges(character, CJK_RANGES) {
        Script::Cjk
    } else if in_ranges(character, HANGUL_RANGES) {
        Script::Hangul
    } else if in_ranges(character, LATIN_RANGES) {
        Script::Latin
    } else {
        Script::Other
    }
}

pub fn is_cjk(character: char) -> bool {
    classify(character) == Script::Cjk
}

pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

pub fn cjk_chars(text: &str) -> Vec<char> {
    text.chars().filter(|character| is_cjk(*character)).collect()
}

fn in_ranges(character: char, ranges: &[(char, char)]) -> bool {
    ranges
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&character))
}

#[cfg(test)]
mod tests {
    use super::{Script, classify, cjk_chars, contains_cjk};

    #[test]
    fn classify_covers_kana_kanji_and_fullwidth_forms() {
        assert_eq!(classify('ト'), Script::Cjk);
        assert_eq!(classify('の'), Script::Cjk);
        assert_eq!(classify('構'), Script::Cjk);
        assert_eq!(classify('㐀'), Script::Cjk);
        assert_eq!(classify('、'), Script::Cjk);
        assert_eq!(classify('：'), Script::Cjk);
        assert_eq!(classify('\u{3000}'), Script::Cjk);
    }

    #[test]
    fn classify_keeps_hangul_out_of_cjk() {
        assert_eq!(classify('구'), Script::Hangul);
        assert_eq!(classify('힣'), Script::Hangul);
        assert_eq!(classify('ㄱ'), Script::Hangul);
        assert!(!contains_cjk("타이포그래피 구성"));
    }

    #[test]
    fn classify_separates_latin_from_other() {
        assert_eq!(classify('a'), Script::Latin);
        assert_eq!(classify('É'), Script::Latin);
        assert_eq!(classify('×'), Script::Other);
        assert_eq!(classify('7'), Script::Other);
        assert_eq!(classify('#'), Script::Other);
        assert_eq!(classify('🎨'), Script::Other);
    }

    #[test]
    fn cjk_chars_lists_only_cjk_in_order() {
        assert_eq!(cjk_chars("Bold 見出し and 구성"), vec!['見', '出', 'し']);
        assert!(cjk_chars("plain text").is_empty());
    }
}
