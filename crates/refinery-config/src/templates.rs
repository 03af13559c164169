//! Configuration template for `refinery init`.
//!
//! The template is stored as a valid TOML file and returned as a commented-out
//! example configuration.

/// Default configuration template (valid TOML).
const TEMPLATE: &str = include_str!("../templates/config.toml");

/// Returns the configuration template as a commented-out example.
pub fn config_template() -> String {
    comment_template(TEMPLATE)
}

/// Converts a valid TOML template into a commented-out example config.
///
/// Lines that are already comments are preserved as-is. Non-comment, non-empty
/// lines get a "# " prefix. Empty lines are preserved.
fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{
        merge::{ParsedConfig, merge_configs},
        parse::parse_config_str,
    };

    #[test]
    fn template_parses_as_valid_toml() {
        let raw = parse_config_str(TEMPLATE, Path::new("template.toml"));
        assert!(raw.is_ok(), "template failed to parse: {raw:?}");
    }

    #[test]
    fn template_matches_defaults() {
        let raw = parse_config_str(TEMPLATE, Path::new("template.toml")).unwrap();
        let merged = merge_configs(&[ParsedConfig {
            path: "template.toml".into(),
            config: raw,
        }])
        .unwrap();
        assert_eq!(merged.ingest, crate::IngestionConfig::default());
        assert_eq!(merged.csv, crate::CsvSettings::default());
    }

    #[test]
    fn commented_template_is_inert() {
        let commented = config_template();
        let raw = parse_config_str(&commented, Path::new("c.toml")).unwrap();
        assert!(raw.ingest.is_none());
        assert!(raw.csv.is_none());
    }

    #[test]
    fn comment_template_preserves_existing_comments() {
        let input = "# This is a comment\nkey = \"value\"\n\n";
        let output = comment_template(input);
        assert_eq!(output, "# This is a comment\n# key = \"value\"\n\n");
    }
}
