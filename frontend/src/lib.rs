//! Video Cutter - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a video to the cutting server and
//! downloading the cut result.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadForm (#videoForm)                                │
//! │  │   └── ProgressBar                                        │
//! │  └── StatusMessage (#message)                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Notice, UploadProgress, UploadError, etc.)
//! - [`controller`] - The upload-and-download cycle, independent of the DOM
//! - [`components`] - UI components (Hero, UploadForm, ProgressBar, etc.)
//! - [`services`] - Browser communication (upload, download, validation)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod controller;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Form
    CutParameters, FormSnapshot,
    // Progress
    UploadProgress, SubmissionState,
    // API
    ServerResponse,
    // Notices
    Notice, NoticeKind,
    // Errors
    UploadError, UploadResult,
};

// Controller
pub use controller::{SubmitOutcome, UploadController, View};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application. Called from the trunk binary.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Video Cutter - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadForm/>
        </div>

        <Footer/>
    }
}
