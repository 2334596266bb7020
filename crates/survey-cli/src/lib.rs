//! Library surface of the reconciliation CLI, split out so commands can be
//! exercised directly in tests.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
