//! Digest - the plain-text recommendation body handed to the notifier

use std::fmt;

use serde::Serialize;

use super::errors::FetchError;

/// Horizontal rule framing the SOURCES header
pub const CITATION_RULE: &str = "==================================================";

/// Non-empty plain-text recommendation content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// Build a digest from message content and optional citations.
    ///
    /// The content is kept verbatim. A non-empty citation list is appended as a
    /// SOURCES section, one citation per line in the order given.
    pub fn compose(content: &str, citations: &[String]) -> Result<Self, FetchError> {
        if content.trim().is_empty() {
            return Err(FetchError::EmptyContent);
        }

        let mut text = content.to_string();
        if !citations.is_empty() {
            text.push_str("\n\n");
            text.push_str(CITATION_RULE);
            text.push_str("\nSOURCES:\n");
            text.push_str(CITATION_RULE);
            text.push('\n');
            text.push_str(&citations.join("\n"));
        }

        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_content_without_citations_is_verbatim() {
        let digest = Digest::compose("PICK UP PLAYER X", &[]).unwrap();
        assert_eq!(digest.as_str(), "PICK UP PLAYER X");
    }

    #[test]
    fn test_citations_appended_in_order() {
        let citations = vec!["http://a".to_string(), "http://b".to_string()];
        let digest = Digest::compose("PICK UP PLAYER X", &citations).unwrap();

        let expected = format!(
            "PICK UP PLAYER X\n\n{rule}\nSOURCES:\n{rule}\nhttp://a\nhttp://b",
            rule = CITATION_RULE
        );
        assert_eq!(digest.as_str(), expected);
    }

    #[test]
    fn test_rule_is_fifty_equals_signs() {
        assert_eq!(CITATION_RULE.len(), 50);
        assert!(CITATION_RULE.chars().all(|c| c == '='));
    }

    #[test]
    fn test_blank_content_rejected() {
        let err = Digest::compose("  \n ", &["http://a".to_string()]).unwrap_err();
        assert!(matches!(err, FetchError::EmptyContent));
    }

    #[test]
    fn test_surrounding_whitespace_preserved() {
        let digest = Digest::compose("\nQB: PLAYER Y\n", &[]).unwrap();
        assert_eq!(digest.to_string(), "\nQB: PLAYER Y\n");
    }
}
