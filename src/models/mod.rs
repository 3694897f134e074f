//! Data models shared across the client: the selected file, intake events,
//! upload handoff payloads, and settings.

pub mod file;
pub mod settings;
pub mod upload;
