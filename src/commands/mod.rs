//! Command implementations for the fx-deploy CLI

pub mod deploy;
pub mod local;
