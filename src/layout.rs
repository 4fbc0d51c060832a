//! First pass: measure every rendered field and tally the summary totals.

use log::debug;
use unicode_width::UnicodeWidthStr;

use crate::cli::ListingConfig;
use crate::entry::Entry;

pub const SIZE_HEADER: &str = "Size";
pub const MODIFIED_HEADER: &str = "Last Modified";
pub const PERMISSIONS_HEADER: &str = "Permissions";
pub const NAME_HEADER: &str = "Name";

/// Padding targets for the fixed columns, margin included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub size: usize,
    pub modified: usize,
    pub permissions: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub directory_count: u64,
    pub total_file_bytes: u64,
}

impl Totals {
    pub fn add(&mut self, entry: &Entry) {
        if entry.is_dir {
            self.directory_count += 1;
        } else {
            self.total_file_bytes = self.total_file_bytes.saturating_add(entry.size);
        }
    }
}

/// Result of the layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    pub widths: ColumnWidths,
    pub totals: Totals,
}

/// Visit each entry once, tracking the widest rendered value per column.
///
/// Widths start at the header label widths, so an empty directory still fits its headers, and
/// the configured margin is added at the end. The result does not depend on entry order.
pub fn scan(entries: &[Entry], config: &ListingConfig) -> Scan {
    let mut size = SIZE_HEADER.width();
    let mut modified = MODIFIED_HEADER.width();
    let mut permissions = PERMISSIONS_HEADER.width();
    let mut totals = Totals::default();

    for entry in entries {
        size = size.max(entry.display_size(config.human_readable).width());
        modified = modified.max(entry.display_modified(&config.date_format).width());
        permissions = permissions.max(entry.display_permissions().width());
        totals.add(entry);
    }

    let widths = ColumnWidths {
        size: size + config.section_margin,
        modified: modified + config.section_margin,
        permissions: permissions + config.section_margin,
    };
    debug!("scanned {} entries: {:?}, {:?}", entries.len(), widths, totals);

    Scan { widths, totals }
}

pub fn compute_widths(entries: &[Entry], config: &ListingConfig) -> ColumnWidths {
    scan(entries, config).widths
}
