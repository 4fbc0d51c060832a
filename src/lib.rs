//! Column-aligned directory listing.
//!
//! A listing is two passes over one snapshot of a directory: [`layout::scan`] measures every
//! rendered field to size the columns, then [`render`] writes each entry against those widths.
//! [`listing::Listing`] drives both passes and the trailing summary.

pub mod cli;
pub mod entry;
pub mod error;
pub mod layout;
pub mod listing;
pub mod logging;
pub mod render;
pub mod size;
pub mod style;

pub use cli::{Args, ListingConfig, DEFAULT_DATE_FORMAT};
pub use entry::{DirSource, Entry, EntrySource};
pub use error::ListingError;
pub use layout::{compute_widths, scan, ColumnWidths, Scan, Totals};
pub use listing::Listing;
pub use render::EntryFilter;
pub use size::{format_size, group_thousands};
pub use style::{Painter, Style};
