//! Presentation boundary for flag lookups.
//!
//! Turns a widget-style query (`code` or `currency`) into a [`FlagView`]
//! holding everything a renderer needs: image source, title and the
//! "unknown" state. [`FlagUpdater`] adds latest-request-wins scheduling on
//! top of the synchronous resolver for hosts that update on every keystroke.

pub mod config;
pub mod errors;
pub mod flag_view;
pub mod updater;

pub use config::FlagConfig;
pub use errors::ViewError;
pub use flag_view::{FlagKind, FlagQuery, FlagView};
pub use updater::FlagUpdater;
