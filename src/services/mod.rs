//! Business logic layer.
//!
//! Holds the file intake state machine and the upload coordinator. Called by the
//! `commands` layer; delegates HTTP interactions to the `api` layer.

pub mod file_intake;
pub mod upload_coordinator;

#[cfg(test)]
pub(crate) mod testing;
