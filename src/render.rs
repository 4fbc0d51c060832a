//! Second pass: write entries, the header row and the summary line.

use std::io::{self, Write};

use crate::cli::ListingConfig;
use crate::entry::Entry;
use crate::layout::{
    ColumnWidths, Totals, MODIFIED_HEADER, NAME_HEADER, PERMISSIONS_HEADER, SIZE_HEADER,
};
use crate::size::{format_size, group_thousands};
use crate::style::{Painter, Style};

/// Which half of the listing a render call writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFilter {
    DirectoriesOnly,
    FilesOnly,
}

impl EntryFilter {
    pub fn matches(self, entry: &Entry) -> bool {
        match self {
            EntryFilter::DirectoriesOnly => entry.is_dir,
            EntryFilter::FilesOnly => !entry.is_dir,
        }
    }
}

/// Write every entry selected by `filter`.
///
/// Long mode writes one row per entry; compact mode writes `name ` with no line break, leaving
/// the final newline to the caller.
pub fn render<W: Write>(
    out: &mut W,
    entries: &[Entry],
    widths: &ColumnWidths,
    config: &ListingConfig,
    filter: EntryFilter,
    painter: &Painter,
) -> io::Result<()> {
    for entry in entries.iter().filter(|entry| filter.matches(entry)) {
        if config.long_mode {
            write_row(out, entry, widths, config, painter)?;
        } else {
            write!(out, "{} ", name_field(entry, painter))?;
        }
    }
    Ok(())
}

fn write_row<W: Write>(
    out: &mut W,
    entry: &Entry,
    widths: &ColumnWidths,
    config: &ListingConfig,
    painter: &Painter,
) -> io::Result<()> {
    let size = entry.display_size(config.human_readable);
    write!(out, "{}", painter.paint_padded(&size, Style::Size, widths.size))?;

    if config.show_last_modified {
        let modified = entry.display_modified(&config.date_format);
        write!(
            out,
            "{}",
            painter.paint_padded(&modified, Style::Modified, widths.modified)
        )?;
    }

    if config.show_permissions {
        let permissions = entry.display_permissions();
        write!(
            out,
            "{}",
            painter.paint_padded(&permissions, Style::Permissions, widths.permissions)
        )?;
    }

    writeln!(out, "{}", name_field(entry, painter))
}

fn name_field(entry: &Entry, painter: &Painter) -> String {
    let style = if entry.is_dir {
        Style::DirectoryName
    } else {
        Style::FileName
    };
    painter.paint(&entry.name, style)
}

/// Column labels for long mode. The trailing `Name` label is not padded.
pub fn render_header<W: Write>(
    out: &mut W,
    widths: &ColumnWidths,
    config: &ListingConfig,
    painter: &Painter,
) -> io::Result<()> {
    write!(out, "{}", painter.paint_padded(SIZE_HEADER, Style::Header, widths.size))?;
    if config.show_last_modified {
        write!(
            out,
            "{}",
            painter.paint_padded(MODIFIED_HEADER, Style::Header, widths.modified)
        )?;
    }
    if config.show_permissions {
        write!(
            out,
            "{}",
            painter.paint_padded(PERMISSIONS_HEADER, Style::Header, widths.permissions)
        )?;
    }
    writeln!(out, "{}", painter.paint(NAME_HEADER, Style::Header))
}

/// `Fetched <bytes>B of Files and <count> Director(y|ies).`
///
/// Only the byte figure follows `human_readable`; the directory count is always exact.
pub fn render_summary<W: Write>(
    out: &mut W,
    totals: &Totals,
    config: &ListingConfig,
    painter: &Painter,
) -> io::Result<()> {
    let bytes = format!("{}B", format_size(totals.total_file_bytes, config.human_readable));
    let count = group_thousands(totals.directory_count);
    writeln!(
        out,
        "Fetched {} of Files and {} {}.",
        painter.paint(&bytes, Style::SummaryBytes),
        painter.paint(&count, Style::SummaryCount),
        directory_noun(totals.directory_count)
    )
}

pub fn directory_noun(count: u64) -> &'static str {
    if count == 1 {
        "Directory"
    } else {
        "Directories"
    }
}
