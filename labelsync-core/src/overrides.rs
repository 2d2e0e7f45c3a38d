//! Command line label overrides
//!
//! Each override has the shape `CATEGORY=LABEL1,LABEL2,...` and reassigns the
//! listed labels to the category after the definitions file was applied.

use crate::constants::{LABEL_SEPARATOR, OVERRIDE_SEPARATOR};

/// A parsed `CATEGORY=LABEL,...` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub category: String,
    pub labels: Vec<String>,
}

impl Override {
    /// Parse a raw override argument
    ///
    /// Returns `None` when the argument names no labels: no `=`, or nothing
    /// after it. The category is everything before the first `=`, the label
    /// list runs up to the next `=` if there is one. Labels are not trimmed,
    /// so `"bug=a, b"` names `"a"` and `" b"`. Empty trailing entries are
    /// dropped, empty entries in the middle are kept.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(OVERRIDE_SEPARATOR);
        let category = parts.next()?;
        let list = parts.next()?;

        let mut labels: Vec<String> = list.split(LABEL_SEPARATOR).map(str::to_string).collect();
        while labels.last().is_some_and(|label| label.is_empty()) {
            labels.pop();
        }

        if labels.is_empty() {
            return None;
        }

        Some(Self {
            category: category.to_string(),
            labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &str) -> Vec<String> {
        Override::parse(raw).map(|o| o.labels).unwrap_or_default()
    }

    #[test]
    fn test_parse_category_and_labels() {
        let parsed = Override::parse("bug=a,b,c").unwrap();
        assert_eq!(parsed.category, "bug");
        assert_eq!(parsed.labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_without_separator_is_ignored() {
        assert_eq!(Override::parse("bug"), None);
        assert_eq!(Override::parse(""), None);
    }

    #[test]
    fn test_empty_right_hand_side_is_ignored() {
        assert_eq!(Override::parse("bug="), None);
        assert_eq!(Override::parse("="), None);
        assert_eq!(Override::parse("bug=,,"), None);
    }

    #[test]
    fn test_whitespace_is_preserved() {
        assert_eq!(labels("bug=a, b"), vec!["a", " b"]);
        assert_eq!(labels(" bug =x").len(), 1);
        assert_eq!(Override::parse(" bug =x").unwrap().category, " bug ");
    }

    #[test]
    fn test_trailing_empty_labels_dropped() {
        assert_eq!(labels("bug=a,b,"), vec!["a", "b"]);
        assert_eq!(labels("bug=a,,b"), vec!["a", "", "b"]);
        assert_eq!(labels("bug=,a"), vec!["", "a"]);
    }

    #[test]
    fn test_second_separator_ends_label_list() {
        assert_eq!(labels("bug=a,b=c"), vec!["a", "b"]);
        assert_eq!(Override::parse("bug==a"), None);
    }

    #[test]
    fn test_empty_category_is_kept() {
        let parsed = Override::parse("=crash").unwrap();
        assert_eq!(parsed.category, "");
        assert_eq!(parsed.labels, vec!["crash"]);
    }
}
