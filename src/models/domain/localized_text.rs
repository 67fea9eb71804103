use serde::{Deserialize, Deserializer, Serialize};

/// Bilingual text value. The question bank historically stored these either
/// as a plain string or as an `{en, hi}` object; deserialization normalizes
/// both shapes so the rest of the crate only ever sees this one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hi: Option<String>,
}

impl LocalizedText {
    pub fn new(en: Option<String>, hi: Option<String>) -> Self {
        Self {
            en: normalize(en),
            hi: normalize(hi),
        }
    }

    pub fn english(text: impl Into<String>) -> Self {
        Self::new(Some(text.into()), None)
    }

    pub fn bilingual(en: impl Into<String>, hi: impl Into<String>) -> Self {
        Self::new(Some(en.into()), Some(hi.into()))
    }

    /// Preferred rendering: English when present, Hindi otherwise.
    pub fn primary(&self) -> Option<&str> {
        self.en.as_deref().or(self.hi.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.en.is_none() && self.hi.is_none()
    }

    /// A raw selection matches when it equals either language rendering.
    pub fn matches_str(&self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        self.en.as_deref() == Some(value) || self.hi.as_deref() == Some(value)
    }

    /// Two values match when either language rendering agrees.
    pub fn matches(&self, other: &LocalizedText) -> bool {
        (self.en.is_some() && self.en == other.en) || (self.hi.is_some() && self.hi == other.hi)
    }
}

fn normalize(text: Option<String>) -> Option<String> {
    text.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Plain(String),
            Bilingual {
                #[serde(default)]
                en: Option<String>,
                #[serde(default)]
                hi: Option<String>,
            },
        }

        match Raw::deserialize(deserializer)? {
            Raw::Plain(text) => Ok(LocalizedText::new(Some(text), None)),
            Raw::Bilingual { en, hi } => Ok(LocalizedText::new(en, hi)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_plain_string_as_english() {
        let text: LocalizedText = serde_json::from_str("\"What is 2 + 2?\"").unwrap();
        assert_eq!(text.en.as_deref(), Some("What is 2 + 2?"));
        assert_eq!(text.hi, None);
    }

    #[test]
    fn deserializes_bilingual_object() {
        let text: LocalizedText =
            serde_json::from_str(r#"{"en": "Four", "hi": "चार"}"#).unwrap();
        assert_eq!(text.en.as_deref(), Some("Four"));
        assert_eq!(text.hi.as_deref(), Some("चार"));
    }

    #[test]
    fn normalizes_blank_renderings_to_none() {
        let text: LocalizedText = serde_json::from_str(r#"{"en": "  ", "hi": "चार"}"#).unwrap();
        assert_eq!(text.en, None);
        assert_eq!(text.hi.as_deref(), Some("चार"));
        assert!(!text.is_empty());

        let empty: LocalizedText = serde_json::from_str("\"\"").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn matches_str_accepts_either_language() {
        let text = LocalizedText::bilingual("Four", "चार");
        assert!(text.matches_str("Four"));
        assert!(text.matches_str("चार"));
        assert!(text.matches_str(" Four "));
        assert!(!text.matches_str("Five"));
        assert!(!text.matches_str(""));
    }

    #[test]
    fn matches_requires_agreement_in_some_language() {
        let correct = LocalizedText::bilingual("Four", "चार");
        assert!(correct.matches(&LocalizedText::english("Four")));
        assert!(correct.matches(&LocalizedText::new(None, Some("चार".into()))));
        assert!(!correct.matches(&LocalizedText::english("Five")));
        assert!(!correct.matches(&LocalizedText::default()));
    }

    #[test]
    fn serializes_to_normalized_object_shape() {
        let text = LocalizedText::english("Four");
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, r#"{"en":"Four"}"#);

        let round_trip: LocalizedText = serde_json::from_str(&json).unwrap();
        assert_eq!(round_trip, text);
    }
}
