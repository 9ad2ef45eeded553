use crate::domain::checklist::{
    DailyChecklist, DailyFlag, PersistedState, SETUP_FLAG_COUNT, SetupChecklist, SetupFlag,
};
use crate::domain::errors::{ChecklistError, DeserializationFailure};
use tracing::{debug, info, warn};

/// Owns the current setup and daily checklists.
///
/// Every operation is a synchronous, total transformation of the in-memory
/// records: the new record replaces the old one and is returned to the
/// caller. Persistence is not triggered here; see `ChecklistSession`.
#[derive(Debug, Clone, Default)]
pub struct ChecklistStateManager {
    setup: SetupChecklist,
    daily: DailyChecklist,
    loaded: bool,
}

impl ChecklistStateManager {
    /// Manager with both checklists at their all-false defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager restored from a persisted envelope.
    pub fn from_persisted(state: PersistedState) -> Self {
        Self {
            setup: state.setup_checklist,
            daily: state.daily_checklist,
            loaded: true,
        }
    }

    pub fn setup(&self) -> SetupChecklist {
        self.setup
    }

    pub fn daily(&self) -> DailyChecklist {
        self.daily
    }

    /// True when the records came from storage rather than defaults.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    // --- Setup checklist ---

    pub fn toggle_setup_flag(&mut self, flag: SetupFlag) -> SetupChecklist {
        self.setup = self.setup.toggled(flag);
        debug!("Setup flag {} -> {}", flag, self.setup.get(flag));
        self.setup
    }

    /// Name-based toggle for callers that hold wire names.
    pub fn toggle_setup_flag_by_name(
        &mut self,
        key: &str,
    ) -> Result<SetupChecklist, ChecklistError> {
        let flag: SetupFlag = key.parse()?;
        Ok(self.toggle_setup_flag(flag))
    }

    pub fn reset_setup(&mut self) -> SetupChecklist {
        self.setup = SetupChecklist::default();
        info!("Setup checklist reset");
        self.setup
    }

    // --- Daily checklist ---

    pub fn toggle_daily_flag(&mut self, flag: DailyFlag) -> DailyChecklist {
        self.daily = self.daily.toggled(flag);
        debug!("Daily flag {} -> {}", flag, self.daily.get(flag));
        self.daily
    }

    pub fn toggle_daily_flag_by_name(
        &mut self,
        group: &str,
        key: &str,
    ) -> Result<DailyChecklist, ChecklistError> {
        let flag = DailyFlag::parse(group, key)?;
        Ok(self.toggle_daily_flag(flag))
    }

    pub fn reset_daily(&mut self) -> DailyChecklist {
        self.daily = DailyChecklist::default();
        info!("Daily checklist reset");
        self.daily
    }

    // --- Derived metrics ---

    /// Count of satisfied setup conditions, in `0..=6`.
    pub fn compute_setup_progress(checklist: &SetupChecklist) -> usize {
        checklist.progress()
    }

    pub fn is_setup_valid(checklist: &SetupChecklist) -> bool {
        Self::compute_setup_progress(checklist) == SETUP_FLAG_COUNT
    }

    pub fn is_daily_routine_complete(checklist: &DailyChecklist) -> bool {
        checklist.is_complete()
    }

    // --- Persistence round-trip ---

    /// Builds the envelope stamped with the current wall-clock time.
    pub fn serialize(setup: SetupChecklist, daily: DailyChecklist) -> PersistedState {
        PersistedState::capture(setup, daily)
    }

    /// Envelope for the manager's current records.
    pub fn snapshot(&self) -> PersistedState {
        Self::serialize(self.setup, self.daily)
    }

    /// Parses stored text into an envelope.
    ///
    /// Records that were missing or malformed inside an otherwise readable
    /// envelope come back as defaults; only a wholly unreadable blob fails.
    pub fn deserialize(raw: &str) -> Result<PersistedState, DeserializationFailure> {
        let decoded = PersistedState::decode(raw)?;
        if decoded.setup_defaulted {
            warn!("Setup checklist not recovered from storage, using defaults");
        }
        if decoded.daily_defaulted {
            warn!("Daily checklist not recovered from storage, using defaults");
        }
        Ok(decoded.state)
    }

    /// Replaces both records with a loaded envelope.
    pub fn restore(&mut self, state: PersistedState) {
        self.setup = state.setup_checklist;
        self.daily = state.daily_checklist;
        self.loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checklist::DailyGroup;

    #[test]
    fn test_new_manager_is_default() {
        let manager = ChecklistStateManager::new();
        assert_eq!(manager.setup(), SetupChecklist::default());
        assert_eq!(manager.daily(), DailyChecklist::default());
        assert!(!manager.is_loaded());
    }

    #[test]
    fn test_toggle_returns_current_record() {
        let mut manager = ChecklistStateManager::new();
        let returned = manager.toggle_setup_flag(SetupFlag::LiquidityVisible);

        assert_eq!(returned, manager.setup());
        assert!(returned.liquidity_visible);
    }

    #[test]
    fn test_toggle_by_name_rejects_unknown() {
        let mut manager = ChecklistStateManager::new();
        let before = manager.setup();

        let err = manager.toggle_setup_flag_by_name("gutFeeling").unwrap_err();
        assert!(matches!(err, ChecklistError::InvalidKey { .. }));
        assert_eq!(manager.setup(), before);
    }

    #[test]
    fn test_daily_toggle_by_name() {
        let mut manager = ChecklistStateManager::new();
        let daily = manager.toggle_daily_flag_by_name("postMarket", "noRevenge").unwrap();

        assert!(daily.post_market.no_revenge);
        assert_eq!(daily.group_progress(DailyGroup::PostMarket), (1, 3));

        let err = manager.toggle_daily_flag_by_name("weekend", "bias").unwrap_err();
        assert!(matches!(err, ChecklistError::InvalidGroup { .. }));
        assert_eq!(manager.daily(), daily);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut manager = ChecklistStateManager::new();
        manager.toggle_daily_flag(DailyFlag::Sweep);

        let first = manager.reset_daily();
        let second = manager.reset_daily();
        assert_eq!(first, DailyChecklist::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_restore_marks_loaded() {
        let mut manager = ChecklistStateManager::new();
        let state = PersistedState::new(
            SetupChecklist::default().toggled(SetupFlag::EntryZone),
            DailyChecklist::default(),
            42,
        );

        manager.restore(state);
        assert!(manager.is_loaded());
        assert!(manager.setup().entry_zone);
    }
}
