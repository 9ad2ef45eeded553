use lfpm::application::checklist_manager::ChecklistStateManager;
use lfpm::domain::checklist::{
    DAILY_FLAG_COUNT, DailyChecklist, DailyFlag, DailyGroup, SETUP_FLAG_COUNT, SetupChecklist,
    SetupFlag,
};
use lfpm::domain::errors::ChecklistError;

/// Small xorshift so the toggle sequences are varied but reproducible.
struct Xorshift(u64);

impl Xorshift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

#[test]
fn test_setup_flag_count_matches_odd_toggles() {
    let mut rng = Xorshift(0x9E37_79B9_7F4A_7C15);

    for round in 0..200 {
        let mut manager = ChecklistStateManager::new();
        let mut toggles = [0usize; SETUP_FLAG_COUNT];
        let steps = (rng.next() % 40) as usize;

        for _ in 0..steps {
            let idx = (rng.next() % SETUP_FLAG_COUNT as u64) as usize;
            manager.toggle_setup_flag(SetupFlag::ALL[idx]);
            toggles[idx] += 1;
        }

        let expected = toggles.iter().filter(|count| *count % 2 == 1).count();
        assert_eq!(
            ChecklistStateManager::compute_setup_progress(&manager.setup()),
            expected,
            "round {round}"
        );
        for (idx, flag) in SetupFlag::ALL.iter().enumerate() {
            assert_eq!(manager.setup().get(*flag), toggles[idx] % 2 == 1);
        }
    }
}

#[test]
fn test_setup_valid_only_when_all_flags_set() {
    let all = SetupFlag::ALL
        .iter()
        .fold(SetupChecklist::default(), |acc, flag| acc.toggled(*flag));
    assert!(ChecklistStateManager::is_setup_valid(&all));
    assert_eq!(ChecklistStateManager::compute_setup_progress(&all), 6);

    // Clearing any single flag invalidates the setup
    for flag in SetupFlag::ALL {
        let missing_one = all.toggled(flag);
        assert!(!ChecklistStateManager::is_setup_valid(&missing_one));
        assert_eq!(ChecklistStateManager::compute_setup_progress(&missing_one), 5);
    }
}

#[test]
fn test_reset_setup_always_returns_default() {
    let mut manager = ChecklistStateManager::new();
    manager.toggle_setup_flag(SetupFlag::LiquidityTaken);
    manager.toggle_setup_flag(SetupFlag::EntryZone);

    let reset = manager.reset_setup();
    assert_eq!(reset, SetupChecklist::default());
    assert_eq!(manager.setup(), SetupChecklist::default());

    // Idempotent on an already clean record
    assert_eq!(manager.reset_setup(), SetupChecklist::default());
}

#[test]
fn test_daily_incomplete_if_any_flag_missing() {
    let all = DailyGroup::ALL
        .iter()
        .flat_map(|group| group.flags().iter())
        .fold(DailyChecklist::default(), |acc, flag| acc.toggled(*flag));
    assert!(ChecklistStateManager::is_daily_routine_complete(&all));
    assert_eq!(all.completed_count(), DAILY_FLAG_COUNT);

    for group in DailyGroup::ALL {
        for flag in group.flags() {
            let missing_one = all.toggled(*flag);
            assert!(
                !ChecklistStateManager::is_daily_routine_complete(&missing_one),
                "{flag} cleared but routine still complete"
            );
        }
    }
}

#[test]
fn test_setup_walkthrough() {
    let mut manager = ChecklistStateManager::new();

    manager.toggle_setup_flag_by_name("biasCleared").unwrap();
    manager.toggle_setup_flag_by_name("riskControlled").unwrap();
    assert_eq!(ChecklistStateManager::compute_setup_progress(&manager.setup()), 2);
    assert!(!ChecklistStateManager::is_setup_valid(&manager.setup()));

    for key in [
        "liquidityVisible",
        "liquidityTaken",
        "structureConfirmed",
        "entryZone",
    ] {
        manager.toggle_setup_flag_by_name(key).unwrap();
    }
    assert_eq!(ChecklistStateManager::compute_setup_progress(&manager.setup()), 6);
    assert!(ChecklistStateManager::is_setup_valid(&manager.setup()));

    manager.reset_setup();
    assert_eq!(ChecklistStateManager::compute_setup_progress(&manager.setup()), 0);
    assert!(!ChecklistStateManager::is_setup_valid(&manager.setup()));
}

#[test]
fn test_pre_market_alone_does_not_complete_routine() {
    let mut manager = ChecklistStateManager::new();

    for key in ["bias", "liquidity", "zones", "decision"] {
        manager.toggle_daily_flag_by_name("preMarket", key).unwrap();
    }

    let daily = manager.daily();
    assert!(daily.is_group_complete(DailyGroup::PreMarket));
    assert!(!daily.get(DailyFlag::Sweep));
    assert!(!ChecklistStateManager::is_daily_routine_complete(&daily));
}

#[test]
fn test_unknown_names_fail_loudly() {
    let mut manager = ChecklistStateManager::new();

    let err = manager.toggle_setup_flag_by_name("gutFeeling").unwrap_err();
    assert!(matches!(err, ChecklistError::InvalidKey { .. }));

    let err = manager
        .toggle_daily_flag_by_name("weekend", "bias")
        .unwrap_err();
    assert!(matches!(err, ChecklistError::InvalidGroup { .. }));

    // Valid group, key from another group
    let err = manager
        .toggle_daily_flag_by_name("preMarket", "sweep")
        .unwrap_err();
    assert!(matches!(err, ChecklistError::InvalidKey { .. }));

    // Nothing changed
    assert_eq!(manager.setup(), SetupChecklist::default());
    assert_eq!(manager.daily(), DailyChecklist::default());
}
