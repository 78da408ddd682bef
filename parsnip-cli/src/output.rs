//! Rendering parse results for the terminal

use parsnip::ParseResult;
use parsnip_config::OutputFormat;

/// Render `result` in `format`. Text output quotes `matched` and `remaining` so that
/// whitespace and control characters stay visible.
pub fn render(result: &ParseResult<'_>, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "ok: {}\nmatched: {:?}\nremaining: {:?}\n",
            result.is_ok(),
            result.matched(),
            result.remaining()
        )),
        OutputFormat::Json => serde_json::to_string_pretty(result)
            .map(|json| json + "\n")
            .map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(result).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let result = ParseResult::success("foo", "\t1");
        assert_eq!(
            render(&result, OutputFormat::Text).unwrap(),
            "ok: true\nmatched: \"foo\"\nremaining: \"\\t1\"\n"
        );
    }

    #[test]
    fn test_json_output() {
        let result = ParseResult::failure("x");
        assert_eq!(
            render(&result, OutputFormat::Json).unwrap(),
            "{\n  \"ok\": false,\n  \"matched\": \"\",\n  \"remaining\": \"x\"\n}\n"
        );
    }

    #[test]
    fn test_yaml_output() {
        let result = ParseResult::success("a", "b");
        assert_eq!(
            render(&result, OutputFormat::Yaml).unwrap(),
            "ok: true\nmatched: a\nremaining: b\n"
        );
    }
}
