use crate::error::ValidationError;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// A validated entry identifier.
///
/// Tags address entries within a container and double as output file
/// stems, so they must be non-empty and free of whitespace and line
/// terminators. Constructing a `Tag` is the only way to get one, which
/// keeps the format constraint enforced at the boundary instead of
/// being re-checked at every use site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::InvalidTag {
                value,
                reason: "tag must not be empty",
            });
        }
        if value.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidTag {
                value,
                reason: "tag must not contain whitespace or line terminators",
            });
        }
        Ok(Tag(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Tag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::new(s)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets a HashMap<Tag, _> be probed with a plain &str.
impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        let tag = Tag::new("design_0001_dldesign_0_cycle1").unwrap();
        assert_eq!(tag.as_str(), "design_0001_dldesign_0_cycle1");
    }

    #[test]
    fn rejects_empty_tags() {
        assert!(matches!(
            Tag::new(""),
            Err(ValidationError::InvalidTag { .. })
        ));
    }

    #[test]
    fn rejects_whitespace_and_line_breaks() {
        for bad in ["a b", "a\tb", "a\nb", "a\rb", " a"] {
            assert!(
                matches!(Tag::new(bad), Err(ValidationError::InvalidTag { .. })),
                "expected rejection of {:?}",
                bad
            );
        }
    }

    #[test]
    fn parses_via_from_str() {
        let tag: Tag = "t0".parse().unwrap();
        assert_eq!(tag, "t0");
    }
}
