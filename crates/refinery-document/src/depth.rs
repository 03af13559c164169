//! Header depth inference.
//!
//! Parsers rarely know how deeply a header is nested. When an element carries no explicit
//! `section_depth`, the depth is read off the header text itself, trying in order:
//!
//! 1. Markdown hashes: `## Foo` is depth 2.
//! 2. Labeled numbering: `Section 1.2`, `Appendix A.1` count dots plus one.
//! 3. Plain numbering: `1.2.3 Deep` counts dots plus one.
//! 4. Anything else is depth 1.
//!
//! Numeric-looking text that is not an outline number still matches rule 3, so a header
//! such as `2023.01.01 Review` lands at depth 3.

use std::sync::LazyLock;

use regex::Regex;

use crate::Element;

/// Leading markdown heading marker.
static MARKDOWN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(#+)").expect("valid markdown regex"));

/// Section, Chapter, Part or Appendix followed by a dotted alphanumeric token.
static LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:section|chapter|part|appendix)\s+([a-z0-9]+(?:\.[a-z0-9]+)*)")
        .expect("valid labeled regex")
});

/// A dotted numeric token at the start of the text.
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+(?:\.\d+)*)").expect("valid numbered regex"));

/// Infers the outline depth of a header from its text. Always returns at least 1.
pub fn infer_depth(text: &str) -> u32 {
    if let Some(caps) = MARKDOWN.captures(text) {
        return count_u32(caps[1].len());
    }

    if let Some(caps) = LABELED.captures(text) {
        return dotted_depth(&caps[1]);
    }

    if let Some(caps) = NUMBERED.captures(text) {
        return dotted_depth(&caps[1]);
    }

    1
}

/// Resolves the depth of a header element: explicit metadata first, then inference.
pub fn resolve_depth(element: &Element) -> u32 {
    element
        .section_depth()
        .unwrap_or_else(|| infer_depth(&element.text))
}

/// Depth of a dotted token: one level per segment.
fn dotted_depth(token: &str) -> u32 {
    count_u32(token.matches('.').count() + 1)
}

/// Saturating conversion for counts.
fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::SECTION_DEPTH_KEY;

    #[test]
    fn test_markdown_depth() {
        assert_eq!(infer_depth("# Heading 1"), 1);
        assert_eq!(infer_depth("## Heading 2"), 2);
        assert_eq!(infer_depth("###### Foo"), 6);
        assert_eq!(infer_depth("   #   Messy Header   "), 1);
        assert_eq!(infer_depth("## Clean Header ##"), 2);
        assert_eq!(infer_depth("##########"), 10);
    }

    #[test]
    fn test_markdown_beats_numbering() {
        assert_eq!(infer_depth("### 1. Overview"), 3);
        assert_eq!(infer_depth("# Section 2.3.4"), 1);
    }

    #[test]
    fn test_labeled_depth() {
        assert_eq!(infer_depth("Section 1"), 1);
        assert_eq!(infer_depth("Section 1.2"), 2);
        assert_eq!(infer_depth("Chapter 2.1"), 2);
        assert_eq!(infer_depth("Chapter 3.1.1"), 3);
        assert_eq!(infer_depth("Part 3.1.1"), 3);
        assert_eq!(infer_depth("Appendix A.1"), 2);
        assert_eq!(infer_depth("  SECTION 4.5.6.7 Results"), 4);
        assert_eq!(infer_depth("appendix b.2 Tables"), 2);
    }

    #[test]
    fn test_labeled_without_dots() {
        assert_eq!(infer_depth("Appendix A"), 1);
        assert_eq!(infer_depth("chapter 10"), 1);
        assert_eq!(infer_depth("PART III"), 1);
    }

    #[test]
    fn test_labeled_trailing_dot_is_not_a_segment() {
        assert_eq!(infer_depth("Section 2."), 1);
        assert_eq!(infer_depth("Chapter 1.2. Methods"), 2);
    }

    #[test]
    fn test_plain_numbering() {
        assert_eq!(infer_depth("1. Top"), 1);
        assert_eq!(infer_depth("1. Introduction"), 1);
        assert_eq!(infer_depth("1.2 Sub"), 2);
        assert_eq!(infer_depth("1.2.3 Deep"), 3);
        assert_eq!(infer_depth("1.2.3.4 Deep"), 4);
        assert_eq!(infer_depth(" 1.2 Title"), 2);
    }

    #[test]
    fn test_numeric_quirks_preserved() {
        assert_eq!(infer_depth("2023.01.01 Review"), 3);
        assert_eq!(infer_depth("10.5 kg limit"), 2);
        assert_eq!(infer_depth("1) Item"), 1);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(infer_depth("Introduction"), 1);
        assert_eq!(infer_depth("B."), 1);
        assert_eq!(infer_depth("A. Introduction"), 1);
        assert_eq!(infer_depth("A.1 Subsection"), 1);
        assert_eq!(infer_depth(""), 1);
        assert_eq!(infer_depth("   "), 1);
        assert_eq!(infer_depth("Résumé des données"), 1);
    }

    #[test]
    fn test_inference_is_pure() {
        let samples = ["## A", "Section 1.2", "2023.01.01", "B.", "Intro"];
        let first: Vec<u32> = samples.iter().map(|s| infer_depth(s)).collect();
        let reversed: Vec<u32> = samples.iter().rev().map(|s| infer_depth(s)).collect();
        let second: Vec<u32> = samples.iter().map(|s| infer_depth(s)).collect();

        assert_eq!(first, second);
        assert_eq!(first, reversed.into_iter().rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_resolve_prefers_metadata() {
        let explicit = Element::header("### Deep Looking").with_depth(1);
        assert_eq!(resolve_depth(&explicit), 1);

        let zero = Element::header("Intro").with_depth(0);
        assert_eq!(resolve_depth(&zero), 0);

        let inferred = Element::header("1.2.3 Deep");
        assert_eq!(resolve_depth(&inferred), 3);
    }

    #[test]
    fn test_resolve_ignores_malformed_metadata() {
        let element = Element::header("## Two").with_meta(SECTION_DEPTH_KEY, "five");
        assert_eq!(resolve_depth(&element), 2);
    }
}
