//! UI Components for the video cutter page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - The `videoForm` form and its submission handler
//! - [`ProgressBar`] - Upload progress indicator inside the form
//! - [`StatusMessage`] - The `message` element for success and error text

mod hero;
mod upload;
mod progress;
mod message;
mod footer;

pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use message::*;
pub use footer::*;
