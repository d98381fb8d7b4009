//! gridbio_client - CLI for previewing and exporting gridbio sites.

pub mod cli;

pub use cli::{Cli, Commands};
