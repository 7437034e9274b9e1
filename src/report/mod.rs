//! Report construction
//!
//! Selects releases inside the lookback window and renders them into a
//! markdown document.

mod markdown;
mod select;

pub use markdown::{format_release, render_report, ReportHeader, EMPTY_WINDOW_LINE};
pub use select::{select_releases, SelectedRelease, SelectionPolicy};
