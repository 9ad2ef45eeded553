pub mod anti_overtrade;
pub mod daily;
pub mod golden_rules;
pub mod overview;
pub mod setup;
