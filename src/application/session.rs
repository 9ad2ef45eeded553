use crate::application::autosave::{AutosaveHandle, AutosaveStats};
use crate::application::checklist_manager::ChecklistStateManager;
use crate::domain::checklist::{DailyChecklist, DailyFlag, SetupChecklist, SetupFlag};
use crate::domain::errors::ChecklistError;
use anyhow::Result;
use std::sync::Arc;

/// Entry point used by the presentation layer.
///
/// Applies each operation to the manager, then schedules a snapshot of the
/// combined state on the autosave task. The new record is returned before
/// the write settles.
pub struct ChecklistSession {
    manager: ChecklistStateManager,
    autosave: AutosaveHandle,
}

impl ChecklistSession {
    pub fn new(manager: ChecklistStateManager, autosave: AutosaveHandle) -> Self {
        Self { manager, autosave }
    }

    pub fn setup(&self) -> SetupChecklist {
        self.manager.setup()
    }

    pub fn daily(&self) -> DailyChecklist {
        self.manager.daily()
    }

    pub fn toggle_setup(&mut self, flag: SetupFlag) -> SetupChecklist {
        let setup = self.manager.toggle_setup_flag(flag);
        self.persist();
        setup
    }

    pub fn toggle_setup_by_name(&mut self, key: &str) -> Result<SetupChecklist, ChecklistError> {
        let setup = self.manager.toggle_setup_flag_by_name(key)?;
        self.persist();
        Ok(setup)
    }

    pub fn reset_setup(&mut self) -> SetupChecklist {
        let setup = self.manager.reset_setup();
        self.persist();
        setup
    }

    pub fn toggle_daily(&mut self, flag: DailyFlag) -> DailyChecklist {
        let daily = self.manager.toggle_daily_flag(flag);
        self.persist();
        daily
    }

    pub fn toggle_daily_by_name(
        &mut self,
        group: &str,
        key: &str,
    ) -> Result<DailyChecklist, ChecklistError> {
        let daily = self.manager.toggle_daily_flag_by_name(group, key)?;
        self.persist();
        Ok(daily)
    }

    pub fn reset_daily(&mut self) -> DailyChecklist {
        let daily = self.manager.reset_daily();
        self.persist();
        daily
    }

    /// Waits for every scheduled snapshot to settle. Used on exit.
    pub async fn flush(&self) -> Result<()> {
        self.autosave.flush().await
    }

    pub fn autosave_stats(&self) -> Arc<AutosaveStats> {
        self.autosave.stats()
    }

    /// Cloned handle so the snapshot queue can be flushed after the UI is gone.
    pub fn autosave_handle(&self) -> AutosaveHandle {
        self.autosave.clone()
    }

    fn persist(&self) {
        self.autosave.schedule(self.manager.snapshot());
    }
}
