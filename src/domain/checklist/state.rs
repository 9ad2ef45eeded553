//! Persisted envelope for both checklists.
//!
//! The two records are independent; they share one blob only so that a
//! single key holds everything. Decoding recovers each record on its own,
//! so a corrupt daily record never costs the setup record and vice versa.

use crate::domain::checklist::daily::DailyChecklist;
use crate::domain::checklist::setup::SetupChecklist;
use crate::domain::errors::DeserializationFailure;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Storage key used when none is configured.
pub const DEFAULT_STATE_KEY: &str = "lfpm-system-state";

const SETUP_FIELD: &str = "setupChecklist";
const DAILY_FIELD: &str = "dailyChecklist";
const TIMESTAMP_FIELD: &str = "timestamp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub daily_checklist: DailyChecklist,
    pub setup_checklist: SetupChecklist,
    /// Epoch milliseconds of the save.
    pub timestamp: i64,
}

/// Outcome of decoding an envelope, including which records fell back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedState {
    pub state: PersistedState,
    pub setup_defaulted: bool,
    pub daily_defaulted: bool,
}

impl PersistedState {
    pub fn new(setup: SetupChecklist, daily: DailyChecklist, timestamp: i64) -> Self {
        Self {
            daily_checklist: daily,
            setup_checklist: setup,
            timestamp,
        }
    }

    /// Snapshot stamped with the current wall-clock time.
    pub fn capture(setup: SetupChecklist, daily: DailyChecklist) -> Self {
        Self::new(setup, daily, Utc::now().timestamp_millis())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses stored text.
    ///
    /// Fails only when there is nothing usable at all: empty input, invalid
    /// JSON, or a top-level value that is not an object. Inside a valid
    /// envelope each record independently falls back to its default.
    pub fn decode(raw: &str) -> Result<DecodedState, DeserializationFailure> {
        if raw.trim().is_empty() {
            return Err(DeserializationFailure::Absent);
        }

        let value: Value =
            serde_json::from_str(raw).map_err(|e| DeserializationFailure::Malformed {
                reason: e.to_string(),
            })?;

        let Value::Object(mut envelope) = value else {
            return Err(DeserializationFailure::Malformed {
                reason: "envelope is not a JSON object".to_string(),
            });
        };

        let (setup_checklist, setup_defaulted) =
            decode_record::<SetupChecklist>(envelope.remove(SETUP_FIELD), SETUP_FIELD);
        let (daily_checklist, daily_defaulted) =
            decode_record::<DailyChecklist>(envelope.remove(DAILY_FIELD), DAILY_FIELD);
        let timestamp = envelope
            .get(TIMESTAMP_FIELD)
            .and_then(Value::as_i64)
            .unwrap_or(0);

        Ok(DecodedState {
            state: PersistedState::new(setup_checklist, daily_checklist, timestamp),
            setup_defaulted,
            daily_defaulted,
        })
    }
}

fn decode_record<T>(value: Option<Value>, field: &str) -> (T, bool)
where
    T: DeserializeOwned + Default,
{
    match value {
        None | Some(Value::Null) => (T::default(), true),
        Some(value) if !value.is_object() => {
            warn!("Persisted {} is not an object, using defaults", field);
            (T::default(), true)
        }
        Some(value) => match serde_json::from_value::<T>(value) {
            Ok(record) => (record, false),
            Err(e) => {
                warn!("Persisted {} is malformed ({}), using defaults", field, e);
                (T::default(), true)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checklist::daily::DailyFlag;
    use crate::domain::checklist::setup::SetupFlag;

    #[test]
    fn test_envelope_field_names() {
        let state = PersistedState::new(
            SetupChecklist::default().toggled(SetupFlag::BiasCleared),
            DailyChecklist::default(),
            1_700_000_000_000,
        );
        let json: Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();

        assert_eq!(json["setupChecklist"]["biasCleared"], Value::Bool(true));
        assert_eq!(json["dailyChecklist"]["preMarket"]["bias"], Value::Bool(false));
        assert_eq!(json["timestamp"], Value::from(1_700_000_000_000_i64));
    }

    #[test]
    fn test_decode_empty_is_absent() {
        assert_eq!(
            PersistedState::decode("   ").unwrap_err(),
            DeserializationFailure::Absent
        );
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let err = PersistedState::decode("{not json").unwrap_err();
        assert!(matches!(err, DeserializationFailure::Malformed { .. }));

        let err = PersistedState::decode("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DeserializationFailure::Malformed { .. }));
    }

    #[test]
    fn test_decode_recovers_records_independently() {
        let raw = r#"{
            "setupChecklist": { "biasCleared": true, "entryZone": true },
            "dailyChecklist": { "preMarket": 42 },
            "timestamp": 123
        }"#;

        let decoded = PersistedState::decode(raw).unwrap();
        assert!(!decoded.setup_defaulted);
        assert!(decoded.daily_defaulted);
        assert!(decoded.state.setup_checklist.bias_cleared);
        assert!(decoded.state.setup_checklist.entry_zone);
        assert_eq!(decoded.state.daily_checklist, DailyChecklist::default());
        assert_eq!(decoded.state.timestamp, 123);
    }

    #[test]
    fn test_decode_missing_flags_default_to_false() {
        let raw = r#"{ "dailyChecklist": { "entry": { "timingRight": true } } }"#;

        let decoded = PersistedState::decode(raw).unwrap();
        assert!(!decoded.daily_defaulted);
        assert!(decoded.setup_defaulted);
        assert!(decoded.state.daily_checklist.get(DailyFlag::TimingRight));
        assert_eq!(decoded.state.daily_checklist.completed_count(), 1);
        assert_eq!(decoded.state.timestamp, 0);
    }

    #[test]
    fn test_decode_rejects_positional_records() {
        let raw = r#"{ "setupChecklist": [true, true, true, true, true, true] }"#;

        let decoded = PersistedState::decode(raw).unwrap();
        assert!(decoded.setup_defaulted);
        assert!(!decoded.state.setup_checklist.is_valid());
    }

    #[test]
    fn test_decode_null_record() {
        let raw = r#"{ "setupChecklist": null, "dailyChecklist": null, "timestamp": 9 }"#;

        let decoded = PersistedState::decode(raw).unwrap();
        assert!(decoded.setup_defaulted && decoded.daily_defaulted);
        assert_eq!(decoded.state.timestamp, 9);
    }
}
