//! Static reference content for the LFPM methodology.
//!
//! Pure data consumed by the presentation layer. Nothing here carries state.

/// Accent used when rendering a card. Mapped to concrete colors by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Orange,
    Red,
    Amber,
}

/// One step of the Bias → Liquidity → Timing → Entry formula.
#[derive(Debug, Clone, Copy)]
pub struct Pillar {
    pub number: u8,
    pub title: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct InfoCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    pub items: &'static [&'static str],
}

/// A numbered rule with a one-line explanation.
#[derive(Debug, Clone, Copy)]
pub struct NumberedRule {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// Highlighted box with a heading and a short message.
#[derive(Debug, Clone, Copy)]
pub struct Callout {
    pub title: &'static str,
    pub message: &'static str,
    pub accent: Accent,
}

pub const SYSTEM_NAME: &str = "LFPM Trading System";
pub const SYSTEM_TAGLINE: &str = "Direction → Liquidity → Timing → Entry";
pub const FORMULA_TITLE: &str = "The LFPM Formula";
pub const FORMULA_MOTTO: &str = "More Rules ≠ More Profit | Clear Rules = Consistency";

pub const PILLARS: [Pillar; 4] = [
    Pillar {
        number: 1,
        title: "BIAS",
        tagline: "Direction First",
    },
    Pillar {
        number: 2,
        title: "LIQUIDITY",
        tagline: "Where They Hunt",
    },
    Pillar {
        number: 3,
        title: "TIMING",
        tagline: "Killzone Sessions",
    },
    Pillar {
        number: 4,
        title: "ENTRY",
        tagline: "Execute Last",
    },
];

pub const INFO_CARDS: [InfoCard; 3] = [
    InfoCard {
        title: "DIRECTION (Bias)",
        icon: "📈",
        accent: Accent::Blue,
        items: &[
            "Market structure (HH-HL or LL-LH)",
            "Strong vs weak trend",
            "No guessing, only confirmation",
        ],
    },
    InfoCard {
        title: "LIQUIDITY",
        icon: "🎯",
        accent: Accent::Purple,
        items: &[
            "Equal highs/lows",
            "Session highs/lows",
            "Asian range",
            "Obvious SL zones",
        ],
    },
    InfoCard {
        title: "TIMING",
        icon: "⏰",
        accent: Accent::Green,
        items: &[
            "Prefer London/NY killzones",
            "Avoid dead hours",
            "Wait for sweep + confirmation",
        ],
    },
];

pub const NO_TRADE_TITLE: &str = "No Trade Conditions";
pub const NO_TRADE_CONDITIONS: [&str; 3] = [
    "No Bias = No Trade",
    "No Liquidity = No Trade",
    "No Timing = No Trade",
];

pub const SETUP_TITLE: &str = "A+ Setup Checklist";
pub const SETUP_SUBTITLE: &str = "A trade is valid ONLY if all conditions are met";
pub const SETUP_CRITICAL_RULE: Callout = Callout {
    title: "📌 Critical Rule",
    message: "If ANY ONE condition is missing → SKIP THE TRADE",
    accent: Accent::Amber,
};

pub const DAILY_TITLE: &str = "Simple Daily Trading Routine";
pub const DAILY_SUBTITLE: &str = "Follow these steps every trading day";
pub const DAILY_REMINDER: Callout = Callout {
    title: "📌 Remember",
    message: "Plan First → Wait Second → Execute Last",
    accent: Accent::Blue,
};

pub const OVERTRADE_TITLE: &str = "LFPM Anti-Overtrading Rules";
pub const OVERTRADE_SUBTITLE: &str = "How to avoid confusion and protect your capital";
pub const OVERTRADE_CAUSES: [&str; 5] = [
    "Watching too many pairs",
    "Watching too many timeframes",
    "Trading every move",
    "Wanting to recover losses",
    "Boredom & FOMO",
];

pub const OVERTRADE_SOLUTIONS: [NumberedRule; 5] = [
    NumberedRule {
        number: 1,
        title: "Maximum 1-2 Pairs",
        description: "Focus breeds mastery",
    },
    NumberedRule {
        number: 2,
        title: "One Main Timeframe",
        description: "HTF for bias, LTF for entry",
    },
    NumberedRule {
        number: 3,
        title: "One Trade Per Session",
        description: "Quality over quantity",
    },
    NumberedRule {
        number: 4,
        title: "One System Only",
        description: "LFPM. No mixing strategies",
    },
    NumberedRule {
        number: 5,
        title: "One Good Trade is Enough",
        description: "Patience pays, greed costs",
    },
];

pub const GOLDEN_TITLE: &str = "The 5 Golden Rules";
pub const GOLDEN_SUBTITLE: &str = "Memorize these forever. They are your trading compass.";
pub const GOLDEN_RULES: [NumberedRule; 5] = [
    NumberedRule {
        number: 1,
        title: "Entry is the Last Step",
        description: "Never rush. Direction, liquidity, timing first.",
    },
    NumberedRule {
        number: 2,
        title: "Direction Controls Confidence",
        description: "With HTF bias, you trade with certainty.",
    },
    NumberedRule {
        number: 3,
        title: "Liquidity Controls Movement",
        description: "Price hunts stops before reversing.",
    },
    NumberedRule {
        number: 4,
        title: "Timing Controls Accuracy",
        description: "Right setup, wrong time = losing trade.",
    },
    NumberedRule {
        number: 5,
        title: "Discipline Controls Survival",
        description: "Your edge is useless without self-control.",
    },
];

pub const GOLDEN_FOOTER: [&str; 3] = [
    "📌 Write These Down",
    "Print them. Put them on your wall. Review them daily.",
    "These rules separate consistent traders from gamblers.",
];
