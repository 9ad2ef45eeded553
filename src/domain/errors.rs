use thiserror::Error;

/// Errors raised when a caller names a checklist entry that does not exist.
///
/// These are contract violations between the presentation layer and the
/// manager, so they are returned to the caller instead of being ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecklistError {
    #[error("Invalid checklist key: '{key}' is not a flag of {scope}")]
    InvalidKey { scope: String, key: String },

    #[error("Invalid daily group: '{group}'")]
    InvalidGroup { group: String },
}

/// Reasons a persisted envelope could not be decoded at all.
///
/// Always recovered by falling back to default checklists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeserializationFailure {
    #[error("No persisted checklist state found")]
    Absent,

    #[error("Malformed checklist state: {reason}")]
    Malformed { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_formatting() {
        let error = ChecklistError::InvalidKey {
            scope: "preMarket".to_string(),
            key: "sweep".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("sweep"));
        assert!(msg.contains("preMarket"));
    }

    #[test]
    fn test_malformed_formatting() {
        let failure = DeserializationFailure::Malformed {
            reason: "expected value at line 1 column 1".to_string(),
        };

        assert!(failure.to_string().contains("line 1 column 1"));
    }
}
