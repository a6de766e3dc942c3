//! Label annotation scanning.
//!
//! Star names are encoded in Inkscape labels whose value ends in a dash and a
//! capitalized word, e.g. `inkscape:label="path1024 Ori- Betelgeuse"`. The
//! prefix before the dash (element id, constellation code) is ignored.

use crate::config::ExtractionConfig;
use log::debug;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// Pattern used by the extractor: any label value ending in `- Name`
pub const LABEL_PATTERN: &str = r#"inkscape:label="[^"]*-\s+([A-Z][a-z]{3,})""#;

/// Alternative label patterns, tightest first. Only used for diagnostics.
pub const ALTERNATIVE_LABEL_PATTERNS: [&str; 4] = [
    r#"inkscape:label="path\d+\s+[A-Z]{3}-\s+([A-Z][a-z]{3,})""#,
    r#"inkscape:label="path\d+\s+[A-Z]{3}-([A-Z][a-z]{3,})""#,
    r#"inkscape:label="[A-Z]{3}-([A-Z][a-z]{3,})""#,
    r#"inkscape:label="[^"]*([A-Z][a-z]{4,})""#,
];

/// Label prefix shapes (`path<N> <CON>-`) with a description of each.
pub const LABEL_PREFIX_SHAPES: [(&str, &str); 3] = [
    (r"^path\d+\s+[A-Z]{3}\s*-\s+", "Basic pattern"),
    (r"^path\d+\s+[A-Z]{3}\s+-\s+", "No space after dash"),
    (r"^path\d+\s+[A-Z]{3}-\s+", "No spaces around dash"),
];

/// Trailing `- Name` pattern applied to a bare label value
pub const LABEL_NAME_PATTERN: &str = r"-\s+([A-Z][a-z]{3,})$";

/// Names keyed to the sorted set of line indices they were labeled on
pub type LabelIndex = BTreeMap<String, BTreeSet<usize>>;

/// Whether a captured name qualifies as a proper star name.
///
/// Catalog designations such as "15 LMi" carry digits and are not names.
pub fn is_candidate_name(name: &str, config: &ExtractionConfig) -> bool {
    !config.is_excluded(name) && !name.chars().any(|c| c.is_ascii_digit())
}

/// Scans chart lines for star name labels.
#[derive(Debug, Clone)]
pub struct LabelScanner {
    pattern: Regex,
}

impl LabelScanner {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(LABEL_PATTERN).expect("label pattern is valid"),
        }
    }

    /// All names captured on a single line, in order of appearance
    pub fn names_in_line<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pattern
            .captures_iter(line)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
    }

    /// Collect every qualifying name and the lines it appears on.
    pub fn scan<S: AsRef<str>>(&self, lines: &[S], config: &ExtractionConfig) -> LabelIndex {
        let mut index = LabelIndex::new();
        for (i, line) in lines.iter().enumerate() {
            for name in self.names_in_line(line.as_ref()) {
                if !is_candidate_name(name, config) {
                    debug!("Skipping non-star label {name:?} on line {}", i + 1);
                    continue;
                }
                index.entry(name.to_string()).or_default().insert(i);
            }
        }
        index
    }
}

impl Default for LabelScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper around [`LabelScanner::scan`]
pub fn scan_labels<S: AsRef<str>>(lines: &[S], config: &ExtractionConfig) -> LabelIndex {
    LabelScanner::new().scan(lines, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"inkscape:label="path1024 Ori- Betelgeuse""#, Some("Betelgeuse"))]
    #[case(r#"inkscape:label="Lyr- Vega""#, Some("Vega"))]
    #[case(r#"inkscape:label="path7 CMa-   Sirius""#, Some("Sirius"))]
    #[case(r#"inkscape:label="path7 CMa-Sirius""#, None)]
    #[case(r#"inkscape:label="path7 UMa- Dubhe extra""#, None)]
    #[case(r#"inkscape:label="path9 Aql- Alt""#, None)]
    #[case(r#"inkscape:label="path9 Aql- altair""#, None)]
    #[case(r#"id="path9 Aql- Altair""#, None)]
    fn test_label_pattern(#[case] line: &str, #[case] expected: Option<&str>) {
        let scanner = LabelScanner::new();
        let names: Vec<_> = scanner.names_in_line(line).collect();
        assert_eq!(names.first().copied(), expected);
    }

    #[test]
    fn test_multiple_labels_on_one_line() {
        let scanner = LabelScanner::new();
        let line = r#"<g inkscape:label="a- Rigel"><path inkscape:label="b- Deneb"/>"#;
        let names: Vec<_> = scanner.names_in_line(line).collect();
        assert_eq!(names, vec!["Rigel", "Deneb"]);
    }

    #[rstest]
    #[case("Vega", true)]
    #[case("Legend", false)]
    #[case("Equator", false)]
    #[case("Lmi15", false)]
    fn test_candidate_names(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(
            is_candidate_name(name, &ExtractionConfig::default()),
            expected
        );
    }

    #[test]
    fn test_scan_collects_all_occurrences() {
        let lines = vec![
            r#"inkscape:label="p1 Lyr- Vega""#,
            r#"inkscape:label="Legend- Legend""#,
            "nothing here",
            r#"inkscape:label="p2 Lyr- Vega""#,
            r#"inkscape:label="p3 Ori- Rigel""#,
        ];
        let index = scan_labels(&lines, &ExtractionConfig::default());

        assert_eq!(index.len(), 2);
        assert_eq!(
            index["Vega"].iter().copied().collect::<Vec<_>>(),
            vec![0, 3]
        );
        assert_eq!(index["Rigel"].iter().next(), Some(&4));
        assert!(!index.contains_key("Legend"));

        let names: Vec<_> = index.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Rigel", "Vega"]);
    }

    #[test]
    fn test_alternative_patterns_compile() {
        for pattern in ALTERNATIVE_LABEL_PATTERNS {
            assert!(Regex::new(pattern).is_ok(), "{pattern}");
        }
        for (pattern, _) in LABEL_PREFIX_SHAPES {
            assert!(Regex::new(pattern).is_ok(), "{pattern}");
        }
        assert!(Regex::new(LABEL_NAME_PATTERN).is_ok());
    }
}
