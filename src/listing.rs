use std::io::Write;

use crate::cli::ListingConfig;
use crate::entry::EntrySource;
use crate::error::ListingError;
use crate::layout::{scan, Totals};
use crate::render::{render, render_header, render_summary, EntryFilter};
use crate::style::Painter;

/// Runs a full listing: layout pass, header, both entry groups, summary.
#[derive(Debug, Clone)]
pub struct Listing {
    config: ListingConfig,
    painter: Painter,
}

impl Listing {
    pub fn new(config: ListingConfig, painter: Painter) -> Self {
        Self { config, painter }
    }

    /// The source is read once, before anything is written; the snapshot feeds both passes.
    /// A failed read therefore leaves `out` untouched.
    pub fn run<S, W>(&self, source: &S, out: &mut W) -> Result<Totals, ListingError>
    where
        S: EntrySource + ?Sized,
        W: Write,
    {
        let entries = source.read_entries()?;
        let layout = scan(&entries, &self.config);

        if self.config.long_mode {
            render_header(out, &layout.widths, &self.config, &self.painter)?;
        }

        for filter in self.group_order() {
            render(out, &entries, &layout.widths, &self.config, filter, &self.painter)?;
        }

        if !self.config.long_mode {
            writeln!(out)?;
        }
        render_summary(out, &layout.totals, &self.config, &self.painter)?;
        out.flush()?;

        Ok(layout.totals)
    }

    fn group_order(&self) -> [EntryFilter; 2] {
        if self.config.directories_first {
            [EntryFilter::DirectoriesOnly, EntryFilter::FilesOnly]
        } else {
            [EntryFilter::FilesOnly, EntryFilter::DirectoriesOnly]
        }
    }
}
