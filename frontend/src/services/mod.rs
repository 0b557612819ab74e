//! Browser services used by the upload form.
//!
//! # Services
//!
//! - [`upload`] - Multipart upload with progress reporting
//! - [`download`] - Anchor-click download of the produced file
//! - [`validation`] - Pre-flight checks mirroring the server's rules

pub mod upload;
pub mod download;
pub mod validation;

pub use upload::*;
pub use download::*;
pub use validation::*;
