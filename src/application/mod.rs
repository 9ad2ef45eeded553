// Checklist state and derived metrics
pub mod checklist_manager;

// Background persistence
pub mod autosave;

// Startup wiring (storage, initial load)
pub mod bootstrap;

// UI-facing entry point
pub mod session;
