//! Copies per-folder context descriptors into a flat output directory,
//! renaming each after the `context` field it carries.

pub mod config;
pub mod logging;

pub mod checksum;
pub mod descriptor;
pub mod error;
pub mod extract;
pub mod naming;
pub mod plan;
pub mod scan;
pub mod storage;
pub mod verify;

pub use error::ExtractError;
