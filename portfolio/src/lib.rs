//! # portfolio
//!
//! Content and scroll bookkeeping behind the single-page portfolio site.
//!
//! The crate has no UI framework dependency. The `landing` app renders the
//! records defined here with Leptos and feeds browser scroll events into the
//! tracker; everything in this crate can be exercised with plain unit tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio::{SectionBounds, SectionId, ScrollTracker};
//!
//! // Six stacked sections, 800px each
//! let layout = |id: SectionId| Some(SectionBounds::new(id.index() as f64 * 800.0, 800.0));
//!
//! let tracker = ScrollTracker::default();
//! assert_eq!(tracker.locate(2350.0, &layout), Some(SectionId::Experience));
//! ```
//!
//! ## Architecture
//!
//! - [`section`] - The six section identifiers, in document order
//! - [`content`] - Static profile, skills, experience and project records
//! - [`scroll`] - Active-section tracker, navigator, scroll progress
//! - [`motion`] - Declarative reveal transitions
//! - [`config`] - `site.toml` loading
//! - [`error`] - Error types

pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod scroll;
pub mod section;

pub use config::SiteConfig;
pub use error::{ConfigError, ParseSectionError};
pub use motion::{Reveal, Trigger};
pub use scroll::{
    Navigation, Navigator, ScrollBehavior, ScrollTracker, SectionBounds, SectionLayout, Viewport,
};
pub use section::SectionId;
