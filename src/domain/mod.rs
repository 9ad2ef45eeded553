// Checklist records and the persisted envelope
pub mod checklist;

// Static methodology content (rules, cards, callouts)
pub mod content;

// Domain-specific error types
pub mod errors;

// Port interfaces
pub mod ports;
