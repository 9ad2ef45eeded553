//! A+ setup checklist.
//!
//! Six independent preconditions for a trade entry. A setup is only valid
//! when every one of them holds; there is no partial credit.

use crate::domain::errors::ChecklistError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of conditions in an A+ setup.
pub const SETUP_FLAG_COUNT: usize = 6;

/// One named precondition of the A+ setup checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetupFlag {
    BiasCleared,
    LiquidityVisible,
    LiquidityTaken,
    StructureConfirmed,
    EntryZone,
    RiskControlled,
}

impl SetupFlag {
    /// All flags in display order.
    pub const ALL: [SetupFlag; SETUP_FLAG_COUNT] = [
        SetupFlag::BiasCleared,
        SetupFlag::LiquidityVisible,
        SetupFlag::LiquidityTaken,
        SetupFlag::StructureConfirmed,
        SetupFlag::EntryZone,
        SetupFlag::RiskControlled,
    ];

    /// Wire name used in the persisted envelope.
    pub fn as_str(&self) -> &'static str {
        match self {
            SetupFlag::BiasCleared => "biasCleared",
            SetupFlag::LiquidityVisible => "liquidityVisible",
            SetupFlag::LiquidityTaken => "liquidityTaken",
            SetupFlag::StructureConfirmed => "structureConfirmed",
            SetupFlag::EntryZone => "entryZone",
            SetupFlag::RiskControlled => "riskControlled",
        }
    }

    /// 1-based position shown next to the item.
    pub fn number(&self) -> usize {
        match self {
            SetupFlag::BiasCleared => 1,
            SetupFlag::LiquidityVisible => 2,
            SetupFlag::LiquidityTaken => 3,
            SetupFlag::StructureConfirmed => 4,
            SetupFlag::EntryZone => 5,
            SetupFlag::RiskControlled => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SetupFlag::BiasCleared => "Bias is Clear",
            SetupFlag::LiquidityVisible => "Liquidity is Visible",
            SetupFlag::LiquidityTaken => "Liquidity is Taken/Engineered",
            SetupFlag::StructureConfirmed => "Structure Confirms After Sweep",
            SetupFlag::EntryZone => "Entry at Discount/Premium",
            SetupFlag::RiskControlled => "Risk is Controlled",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SetupFlag::BiasCleared => "Direction confirmed on higher timeframe",
            SetupFlag::LiquidityVisible => "Clear equal highs/lows or session extremes",
            SetupFlag::LiquidityTaken => "Sweep occurred, stops triggered",
            SetupFlag::StructureConfirmed => "MSB or displacement visible",
            SetupFlag::EntryZone => "Positioned correctly vs equilibrium",
            SetupFlag::RiskControlled => "1% max risk, proper position sizing",
        }
    }
}

impl fmt::Display for SetupFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SetupFlag {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SetupFlag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| ChecklistError::InvalidKey {
                scope: "setupChecklist".to_string(),
                key: s.to_string(),
            })
    }
}

/// State of the six A+ setup conditions.
///
/// Records are values: every transition returns a new record and leaves
/// the old one untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SetupChecklist {
    pub bias_cleared: bool,
    pub liquidity_visible: bool,
    pub liquidity_taken: bool,
    pub structure_confirmed: bool,
    pub entry_zone: bool,
    pub risk_controlled: bool,
}

impl SetupChecklist {
    pub fn get(&self, flag: SetupFlag) -> bool {
        match flag {
            SetupFlag::BiasCleared => self.bias_cleared,
            SetupFlag::LiquidityVisible => self.liquidity_visible,
            SetupFlag::LiquidityTaken => self.liquidity_taken,
            SetupFlag::StructureConfirmed => self.structure_confirmed,
            SetupFlag::EntryZone => self.entry_zone,
            SetupFlag::RiskControlled => self.risk_controlled,
        }
    }

    fn slot(&mut self, flag: SetupFlag) -> &mut bool {
        match flag {
            SetupFlag::BiasCleared => &mut self.bias_cleared,
            SetupFlag::LiquidityVisible => &mut self.liquidity_visible,
            SetupFlag::LiquidityTaken => &mut self.liquidity_taken,
            SetupFlag::StructureConfirmed => &mut self.structure_confirmed,
            SetupFlag::EntryZone => &mut self.entry_zone,
            SetupFlag::RiskControlled => &mut self.risk_controlled,
        }
    }

    /// Returns a copy with `flag` flipped and every other flag unchanged.
    pub fn toggled(self, flag: SetupFlag) -> Self {
        let mut next = self;
        let slot = next.slot(flag);
        *slot = !*slot;
        next
    }

    /// Number of satisfied conditions, in `0..=6`.
    pub fn progress(&self) -> usize {
        SetupFlag::ALL
            .iter()
            .filter(|flag| self.get(**flag))
            .count()
    }

    pub fn missing_count(&self) -> usize {
        SETUP_FLAG_COUNT - self.progress()
    }

    /// A+ only when all six conditions hold simultaneously.
    pub fn is_valid(&self) -> bool {
        self.progress() == SETUP_FLAG_COUNT
    }
}
