use serde_json::Value;

/// Pretty-print `input` with two-space indentation. Parse errors carry the
/// parser's message for user display.
pub fn format(input: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(input)?;
    serde_json::to_string_pretty(&value)
}

/// Strip insignificant whitespace from `input`.
pub fn minify(input: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(input)?;
    serde_json::to_string(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_two_space_indent() {
        let pretty = format(r#"{"b":1,"a":[1,2]}"#).unwrap();
        assert_eq!(pretty, "{\n  \"b\": 1,\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn keeps_member_order() {
        let pretty = format(r#"{"zebra":1,"apple":2}"#).unwrap();
        assert!(pretty.find("zebra").unwrap() < pretty.find("apple").unwrap());
    }

    #[test]
    fn minify_undoes_format() {
        let source = r#"{"b":1,"a":[1,2]}"#;
        assert_eq!(minify(&format(source).unwrap()).unwrap(), source);
    }

    #[test]
    fn invalid_json_is_an_error_value() {
        let err = format("{not json").unwrap_err();
        assert!(!err.to_string().is_empty());
        assert!(minify("[1,").is_err());
    }
}
