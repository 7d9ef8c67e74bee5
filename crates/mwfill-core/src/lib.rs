#![forbid(unsafe_code)]
//! mwfill-core: data model, errors, and run configuration shared by the
//! measure-word filler crates.
//!
//! Nothing in here touches the filesystem; readers/writers live in `mwfill-io`
//! and the merge logic lives in `mwfill-merge`.

pub mod config;
pub mod error;
pub mod prelude;
pub mod types;

pub use error::{Error, Result};

/// Crate version, stamped into run reports.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
