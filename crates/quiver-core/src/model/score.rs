use std::fmt;
use std::str::FromStr;

/// A single score value: a decimal number or an opaque text token.
///
/// A token becomes [`ScoreValue::Number`] only when Rust's shortest
/// round-trip rendering of the parsed `f64` reproduces the token
/// byte-for-byte. Anything else (`1.50`, `1e10`, `NaN`, `passing`) is
/// kept verbatim as [`ScoreValue::Text`], so every value's textual form
/// reproduces deterministically and no coercion ever happens silently.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreValue {
    Number(f64),
    Text(String),
}

impl ScoreValue {
    pub fn parse(token: &str) -> Self {
        if let Ok(value) = token.parse::<f64>() {
            if value.is_finite() && format!("{}", value) == token {
                return ScoreValue::Number(value);
            }
        }
        ScoreValue::Text(token.to_string())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScoreValue::Number(value) => Some(*value),
            ScoreValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreValue::Number(value) => write!(f, "{}", value),
            ScoreValue::Text(text) => f.write_str(text),
        }
    }
}

/// The ordered key/value side-channel of an entry.
///
/// Insertion order is preserved and is the order keys appear on the
/// `QV_SCORE` wire line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Score {
    pairs: Vec<(String, ScoreValue)>,
}

impl Score {
    pub fn new() -> Self {
        Score::default()
    }

    /// Inserts a key, replacing the value in place if the key is
    /// already present (position is kept).
    pub fn insert(&mut self, key: impl Into<String>, value: ScoreValue) {
        let key = key.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ScoreValue> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScoreValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Parses the pipe-delimited `key=value[|key=value]*` pair list of
    /// a `QV_SCORE` line. The error is the human-readable reason,
    /// wrapped by the reader into a line-numbered parse error.
    pub fn parse_pairs(raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err("no key=value pairs".to_string());
        }
        let mut score = Score::new();
        for pair in raw.split('|') {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("pair '{}' has no '='", pair))?;
            if key.is_empty() {
                return Err(format!("pair '{}' has an empty key", pair));
            }
            score.insert(key, ScoreValue::parse(value));
        }
        Ok(score)
    }
}

impl FromStr for Score {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Score::parse_pairs(s)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_text() {
        let score = Score::parse_pairs("rms=1.5|score=0.8|state=pass").unwrap();
        assert_eq!(score.get("rms"), Some(&ScoreValue::Number(1.5)));
        assert_eq!(score.get("score"), Some(&ScoreValue::Number(0.8)));
        assert_eq!(
            score.get("state"),
            Some(&ScoreValue::Text("pass".to_string()))
        );
    }

    #[test]
    fn preserves_insertion_order() {
        let score = Score::parse_pairs("b=1|a=2|c=3").unwrap();
        let keys: Vec<_> = score.keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn non_canonical_numerals_stay_textual() {
        for token in ["1.50", "1e10", "NaN", "inf", "+3"] {
            assert_eq!(
                ScoreValue::parse(token),
                ScoreValue::Text(token.to_string()),
                "token {:?} must stay text",
                token
            );
        }
    }

    #[test]
    fn rendering_reproduces_the_wire_form() {
        for raw in ["rms=1.5|score=0.8", "a=x y|b=-0.25", "only=1.50"] {
            let score = Score::parse_pairs(raw).unwrap();
            assert_eq!(score.to_string(), raw);
        }
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(Score::parse_pairs("").is_err());
        assert!(Score::parse_pairs("novalue").is_err());
        assert!(Score::parse_pairs("=1.5").is_err());
        assert!(Score::parse_pairs("a=1|b").is_err());
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut score = Score::parse_pairs("a=1|b=2").unwrap();
        score.insert("a", ScoreValue::Number(9.0));
        assert_eq!(score.to_string(), "a=9|b=2");
    }
}
