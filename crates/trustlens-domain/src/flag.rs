//! Advisory flags surfaced alongside a trust score

use serde::{Deserialize, Serialize};

/// Severity of a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagType {
    /// Pattern that lowers credibility
    Warning,
    /// Neutral or positive observation
    Info,
}

impl FlagType {
    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagType::Warning => "warning",
            FlagType::Info => "info",
        }
    }
}

/// A credibility-relevant pattern detected in the content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    /// Severity
    #[serde(rename = "type")]
    pub flag_type: FlagType,

    /// Short category name, e.g. "Emotional Language"
    pub category: String,

    /// One-line description
    pub description: String,

    /// Advice for the reader
    pub details: String,
}

impl Flag {
    /// Create a new flag
    pub fn new(
        flag_type: FlagType,
        category: impl Into<String>,
        description: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            flag_type,
            category: category.into(),
            description: description.into(),
            details: details.into(),
        }
    }

    /// Whether this flag is a warning
    pub fn is_warning(&self) -> bool {
        self.flag_type == FlagType::Warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_serializes_type_field() {
        let flag = Flag::new(FlagType::Info, "Reputable Source", "d", "x");
        let json = serde_json::to_value(&flag).unwrap();
        assert_eq!(json["type"], "info");
        assert_eq!(json["category"], "Reputable Source");
        assert!(!flag.is_warning());
    }
}
