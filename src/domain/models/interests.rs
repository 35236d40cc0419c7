use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered list of trip interests parsed from comma-separated user input.
///
/// Pieces are trimmed and blank pieces are dropped, so `""` parses to an empty
/// list rather than a list holding one empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interests(Vec<String>);

impl Interests {
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interests joined the way the prompt template expects them.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// Renders as a bracketed list of quoted items, e.g. `["museums", "food"]`.
impl fmt::Display for Interests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_keeps_order() {
        let interests = Interests::parse(" museums,food ,  street art ");
        assert_eq!(interests.as_slice(), ["museums", "food", "street art"]);
    }

    #[test]
    fn test_parse_empty_input_yields_no_interests() {
        assert!(Interests::parse("").is_empty());
        assert!(Interests::parse(" , ,").is_empty());
    }

    #[test]
    fn test_parse_drops_blank_pieces() {
        let interests = Interests::parse("a,,b,");
        assert_eq!(interests.as_slice(), ["a", "b"]);
    }

    #[test]
    fn test_joined_and_display() {
        let interests = Interests::parse("museums, food");
        assert_eq!(interests.joined(), "museums, food");
        assert_eq!(interests.to_string(), r#"["museums", "food"]"#);
    }
}
