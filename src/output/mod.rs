//! Output formatting for the `ipcalc` binary.
//!
//! - [`summary`] - Serializable network summary
//! - [`terminal`] - Coloured terminal text

mod summary;
mod terminal;

pub use summary::{NetworkSummary, SubnetRow};
pub use terminal::{format_field, render_summary};
