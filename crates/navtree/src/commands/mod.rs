//! CLI command implementations.

pub mod check;
pub mod export;
pub mod flatten;
pub mod init;
pub mod resolve;
