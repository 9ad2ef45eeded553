//! Daily routine checklist.
//!
//! Four steps of the trading day, each a small set of named checks. The
//! routine is complete only when every check of every step is ticked.

use crate::domain::errors::ChecklistError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Total number of checks across all four groups.
pub const DAILY_FLAG_COUNT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyGroup {
    PreMarket,
    DuringSession,
    Entry,
    PostMarket,
}

impl DailyGroup {
    pub const ALL: [DailyGroup; 4] = [
        DailyGroup::PreMarket,
        DailyGroup::DuringSession,
        DailyGroup::Entry,
        DailyGroup::PostMarket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DailyGroup::PreMarket => "preMarket",
            DailyGroup::DuringSession => "duringSession",
            DailyGroup::Entry => "entry",
            DailyGroup::PostMarket => "postMarket",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DailyGroup::PreMarket => "STEP 1: Pre-Market (10-15 min)",
            DailyGroup::DuringSession => "STEP 2: During Session (London/NY)",
            DailyGroup::Entry => "STEP 3: Entry Decision",
            DailyGroup::PostMarket => "STEP 4: Post-Market Review (5 min)",
        }
    }

    /// Flags belonging to this group, in display order.
    pub fn flags(&self) -> &'static [DailyFlag] {
        match self {
            DailyGroup::PreMarket => &[
                DailyFlag::Bias,
                DailyFlag::Liquidity,
                DailyFlag::Zones,
                DailyFlag::Decision,
            ],
            DailyGroup::DuringSession => &[DailyFlag::Sweep, DailyFlag::NoChase],
            DailyGroup::Entry => &[
                DailyFlag::BiasCheck,
                DailyFlag::LiquidityTaken,
                DailyFlag::TimingRight,
            ],
            DailyGroup::PostMarket => &[
                DailyFlag::Screenshot,
                DailyFlag::Emotions,
                DailyFlag::NoRevenge,
            ],
        }
    }
}

impl fmt::Display for DailyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DailyGroup {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DailyGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| ChecklistError::InvalidGroup {
                group: s.to_string(),
            })
    }
}

/// A single check of the daily routine. Each flag belongs to exactly one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyFlag {
    // preMarket
    Bias,
    Liquidity,
    Zones,
    Decision,
    // duringSession
    Sweep,
    NoChase,
    // entry
    BiasCheck,
    LiquidityTaken,
    TimingRight,
    // postMarket
    Screenshot,
    Emotions,
    NoRevenge,
}

impl DailyFlag {
    pub fn group(&self) -> DailyGroup {
        match self {
            DailyFlag::Bias | DailyFlag::Liquidity | DailyFlag::Zones | DailyFlag::Decision => {
                DailyGroup::PreMarket
            }
            DailyFlag::Sweep | DailyFlag::NoChase => DailyGroup::DuringSession,
            DailyFlag::BiasCheck | DailyFlag::LiquidityTaken | DailyFlag::TimingRight => {
                DailyGroup::Entry
            }
            DailyFlag::Screenshot | DailyFlag::Emotions | DailyFlag::NoRevenge => {
                DailyGroup::PostMarket
            }
        }
    }

    /// Key of the flag inside its group.
    pub fn as_str(&self) -> &'static str {
        match self {
            DailyFlag::Bias => "bias",
            DailyFlag::Liquidity => "liquidity",
            DailyFlag::Zones => "zones",
            DailyFlag::Decision => "decision",
            DailyFlag::Sweep => "sweep",
            DailyFlag::NoChase => "noChase",
            DailyFlag::BiasCheck => "biasCheck",
            DailyFlag::LiquidityTaken => "liquidityTaken",
            DailyFlag::TimingRight => "timingRight",
            DailyFlag::Screenshot => "screenshot",
            DailyFlag::Emotions => "emotions",
            DailyFlag::NoRevenge => "noRevenge",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DailyFlag::Bias => "Check higher timeframe bias",
            DailyFlag::Liquidity => "Mark key liquidity zones",
            DailyFlag::Zones => "Identify obvious SL zones",
            DailyFlag::Decision => "Decide: Buy or Sell ONLY",
            DailyFlag::Sweep => "Wait for liquidity sweep",
            DailyFlag::NoChase => "No entry before sweep + No chase",
            DailyFlag::BiasCheck => "Ask: Bias clear?",
            DailyFlag::LiquidityTaken => "Ask: Liquidity taken?",
            DailyFlag::TimingRight => "Ask: Timing right?",
            DailyFlag::Screenshot => "Screenshot chart",
            DailyFlag::Emotions => "Note emotions & thoughts",
            DailyFlag::NoRevenge => "No revenge trading tomorrow",
        }
    }

    /// Resolves a `(group, key)` pair as sent by the presentation layer.
    ///
    /// The key must belong to the named group: `("entry", "sweep")` is an
    /// `InvalidKey` even though `sweep` exists elsewhere.
    pub fn parse(group: &str, key: &str) -> Result<Self, ChecklistError> {
        let group = DailyGroup::from_str(group)?;
        group
            .flags()
            .iter()
            .copied()
            .find(|flag| flag.as_str() == key)
            .ok_or_else(|| ChecklistError::InvalidKey {
                scope: group.as_str().to_string(),
                key: key.to_string(),
            })
    }
}

impl fmt::Display for DailyFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group(), self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreMarketChecks {
    pub bias: bool,
    pub liquidity: bool,
    pub zones: bool,
    pub decision: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DuringSessionChecks {
    pub sweep: bool,
    pub no_chase: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryChecks {
    pub bias_check: bool,
    pub liquidity_taken: bool,
    pub timing_right: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostMarketChecks {
    pub screenshot: bool,
    pub emotions: bool,
    pub no_revenge: bool,
}

/// State of the daily routine, grouped by step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyChecklist {
    pub pre_market: PreMarketChecks,
    pub during_session: DuringSessionChecks,
    pub entry: EntryChecks,
    pub post_market: PostMarketChecks,
}

impl DailyChecklist {
    pub fn get(&self, flag: DailyFlag) -> bool {
        match flag {
            DailyFlag::Bias => self.pre_market.bias,
            DailyFlag::Liquidity => self.pre_market.liquidity,
            DailyFlag::Zones => self.pre_market.zones,
            DailyFlag::Decision => self.pre_market.decision,
            DailyFlag::Sweep => self.during_session.sweep,
            DailyFlag::NoChase => self.during_session.no_chase,
            DailyFlag::BiasCheck => self.entry.bias_check,
            DailyFlag::LiquidityTaken => self.entry.liquidity_taken,
            DailyFlag::TimingRight => self.entry.timing_right,
            DailyFlag::Screenshot => self.post_market.screenshot,
            DailyFlag::Emotions => self.post_market.emotions,
            DailyFlag::NoRevenge => self.post_market.no_revenge,
        }
    }

    fn slot(&mut self, flag: DailyFlag) -> &mut bool {
        match flag {
            DailyFlag::Bias => &mut self.pre_market.bias,
            DailyFlag::Liquidity => &mut self.pre_market.liquidity,
            DailyFlag::Zones => &mut self.pre_market.zones,
            DailyFlag::Decision => &mut self.pre_market.decision,
            DailyFlag::Sweep => &mut self.during_session.sweep,
            DailyFlag::NoChase => &mut self.during_session.no_chase,
            DailyFlag::BiasCheck => &mut self.entry.bias_check,
            DailyFlag::LiquidityTaken => &mut self.entry.liquidity_taken,
            DailyFlag::TimingRight => &mut self.entry.timing_right,
            DailyFlag::Screenshot => &mut self.post_market.screenshot,
            DailyFlag::Emotions => &mut self.post_market.emotions,
            DailyFlag::NoRevenge => &mut self.post_market.no_revenge,
        }
    }

    /// Returns a copy with `flag` flipped; other flags and groups unchanged.
    pub fn toggled(self, flag: DailyFlag) -> Self {
        let mut next = self;
        let slot = next.slot(flag);
        *slot = !*slot;
        next
    }

    /// `(done, total)` for one step.
    pub fn group_progress(&self, group: DailyGroup) -> (usize, usize) {
        let flags = group.flags();
        let done = flags.iter().filter(|flag| self.get(**flag)).count();
        (done, flags.len())
    }

    pub fn is_group_complete(&self, group: DailyGroup) -> bool {
        let (done, total) = self.group_progress(group);
        done == total
    }

    pub fn completed_count(&self) -> usize {
        DailyGroup::ALL
            .iter()
            .map(|group| self.group_progress(*group).0)
            .sum()
    }

    pub fn is_complete(&self) -> bool {
        DailyGroup::ALL
            .iter()
            .all(|group| self.is_group_complete(*group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_flags() -> Vec<DailyFlag> {
        DailyGroup::ALL
            .iter()
            .flat_map(|g| g.flags().iter().copied())
            .collect()
    }

    #[test]
    fn test_flag_count_matches_groups() {
        assert_eq!(all_flags().len(), DAILY_FLAG_COUNT);
        for flag in all_flags() {
            assert!(flag.group().flags().contains(&flag));
        }
    }

    #[test]
    fn test_toggle_is_scoped_to_one_flag() {
        let before = DailyChecklist::default();
        let after = before.toggled(DailyFlag::NoChase);

        assert!(after.during_session.no_chase);
        assert!(!after.during_session.sweep);
        assert_eq!(after.completed_count(), 1);
        assert_eq!(before.completed_count(), 0);
    }

    #[test]
    fn test_complete_requires_every_group() {
        let mut checklist = DailyChecklist::default();
        for flag in all_flags() {
            assert!(!checklist.is_complete());
            checklist = checklist.toggled(flag);
        }
        assert!(checklist.is_complete());

        // Any single unchecked flag breaks completeness
        for flag in all_flags() {
            assert!(!checklist.toggled(flag).is_complete(), "{flag}");
        }
    }

    #[test]
    fn test_group_progress() {
        let checklist = DailyChecklist::default()
            .toggled(DailyFlag::Bias)
            .toggled(DailyFlag::Zones);

        assert_eq!(checklist.group_progress(DailyGroup::PreMarket), (2, 4));
        assert_eq!(checklist.group_progress(DailyGroup::Entry), (0, 3));
        assert!(!checklist.is_group_complete(DailyGroup::PreMarket));
    }

    #[test]
    fn test_parse_pairs() {
        assert_eq!(
            DailyFlag::parse("entry", "liquidityTaken").unwrap(),
            DailyFlag::LiquidityTaken
        );
        assert_eq!(
            DailyFlag::parse("entry", "sweep").unwrap_err(),
            ChecklistError::InvalidKey {
                scope: "entry".to_string(),
                key: "sweep".to_string(),
            }
        );
        assert_eq!(
            DailyFlag::parse("lunch", "bias").unwrap_err(),
            ChecklistError::InvalidGroup {
                group: "lunch".to_string(),
            }
        );
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(DailyChecklist::default()).unwrap();
        assert_eq!(json["duringSession"]["noChase"], serde_json::Value::Bool(false));
        assert_eq!(json["postMarket"]["noRevenge"], serde_json::Value::Bool(false));
        assert_eq!(json["entry"]["biasCheck"], serde_json::Value::Bool(false));
    }
}
