use serde_json::Value;

pub fn for_each_string<F>(value: &Value, visit: &mut F)
where
    F: FnMut(&str),
{
    match value {
        Value::Object(map) => {
            for child in map.values() {
                for_each_string(child, visit);
            }
        }
        Value::Array(items) => {
            for child in items {
                for_each_string(child, visit);
            }
        }
        Value::String(text) => visit(text),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

pub fn rewrite_strings<F>(value: &mut Value, rewrite: &mut F) -> usize
where
    F: FnMut(&str) -> Option<String>,
{
    match value {
        Value::Object(map) => map
            .values_mut()
            .map(|child| rewrite_strings(child, rewrite))
            .sum(),
        Value::Array(items) => items
            .iter_mut()
            .map(|child| rewrite_strings(child, rewrite))
            .sum(),
        Value::String(text) => match rewrite(text) {
            Some(updated) if updated != *text => {
                *text = updated;
                1
            }
            _ => 0,
        },
        Value::Null | Value::Bool(_) | Value::Number(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{for_each_string, rewrite_strings};

    #[test]
    fn rewrite_strings_reaches_nested_leaves_and_skips_scalars() {
        let mut doc = json!({
            "a": "x",
            "b": [1, true, null, {"c": "x", "d": ["x", 2.5]}],
            "x": 7
        });

        let changed = rewrite_strings(&mut doc, &mut |text| {
            (text == "x").then(|| "y".to_string())
        });

        assert_eq!(changed, 3);
        assert_eq!(
            doc,
            json!({
                "a": "y",
                "b": [1, true, null, {"c": "y", "d": ["y", 2.5]}],
                "x": 7
            })
        );
    }

    #[test]
    fn rewrite_strings_leaves_object_keys_alone() {
        let mut doc = json!({"x": "x"});
        rewrite_strings(&mut doc, &mut |_| Some("y".to_string()));
        assert_eq!(doc, json!({"x": "y"}));
    }

    #[test]
    fn for_each_string_visits_in_document_order() {
        let doc = json!(["a", {"k": "b", "n": 1}, ["c"]]);
        let mut seen = Vec::new();
        for_each_string(&doc, &mut |text| seen.push(text.to_string()));
        assert_eq!(seen, vec!["a", "b", "c"]);
    }
}
