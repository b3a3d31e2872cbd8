//! Filesystem and logging helpers.
pub mod fsutil;
pub mod logger;
