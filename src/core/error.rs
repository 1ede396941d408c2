//! Domain error types

use thiserror::Error;

/// Profile fields that accept a fixed set of labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Status,
    Income,
    Savings,
    Debt,
    Goal,
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProfileField::Status => "status",
            ProfileField::Income => "income",
            ProfileField::Savings => "savings",
            ProfileField::Debt => "debt",
            ProfileField::Goal => "goal",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum FlexError {
    /// A label that is not one of the allowed values for its field
    #[error("Unknown {field} label: {label:?}")]
    UnknownLabel { field: ProfileField, label: String },

    #[error("Age {0} is outside the supported range 16-100")]
    AgeOutOfRange(u32),

    #[error("Invalid return distribution: {0}")]
    InvalidDistribution(String),

    /// Glossary asset could not be parsed
    #[error("Glossary error: {0}")]
    Glossary(#[from] serde_yaml::Error),
}

impl FlexError {
    pub fn unknown_label(field: ProfileField, label: &str) -> Self {
        FlexError::UnknownLabel {
            field,
            label: label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_display() {
        let err = FlexError::unknown_label(ProfileField::Debt, "$1M");
        assert_eq!(err.to_string(), "Unknown debt label: \"$1M\"");
    }

    #[test]
    fn test_glossary_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<u32>>("not: [a list").unwrap_err();
        let err: FlexError = yaml_err.into();
        assert!(matches!(err, FlexError::Glossary(_)));
    }
}
