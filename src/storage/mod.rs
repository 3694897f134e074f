//! Local persistence of client settings as a JSON file.

pub mod settings;
