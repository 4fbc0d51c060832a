use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::warn;

use crate::error::ListingError;
use crate::size::format_size;

/// Size column text for directories.
pub const DIRECTORY_LABEL: &str = "Directory";

/// One directory entry as seen when the directory was read.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
    /// Length in bytes; not meaningful for directories.
    pub size: u64,
    pub modified: DateTime<Local>,
    /// Mode rendering such as `-rwxr-xr-x`.
    pub permissions: String,
}

impl Entry {
    pub fn from_metadata(name: String, metadata: &fs::Metadata) -> io::Result<Self> {
        Ok(Self {
            name,
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            modified: metadata.modified()?.into(),
            permissions: permission_string(metadata),
        })
    }

    pub fn display_size(&self, human_readable: bool) -> String {
        if self.is_dir {
            DIRECTORY_LABEL.to_string()
        } else {
            format!("{}B", format_size(self.size, human_readable))
        }
    }

    /// `date_format` must already be validated; see [`crate::cli::validate_date_format`].
    pub fn display_modified(&self, date_format: &str) -> String {
        self.modified.format(date_format).to_string()
    }

    pub fn display_permissions(&self) -> String {
        if self.is_dir {
            if let Some(rest) = self.permissions.strip_prefix('-') {
                return format!("d{}", rest);
            }
        }
        self.permissions.clone()
    }
}

#[cfg(unix)]
pub fn permission_string(metadata: &fs::Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode();
    let mut out = String::with_capacity(10);
    out.push('-');
    for shift in [6, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

#[cfg(not(unix))]
pub fn permission_string(metadata: &fs::Metadata) -> String {
    if metadata.permissions().readonly() {
        "-r--r--r--".to_string()
    } else {
        "-rw-rw-rw-".to_string()
    }
}

/// Anything that can produce the entries of one directory.
pub trait EntrySource {
    fn read_entries(&self) -> Result<Vec<Entry>, ListingError>;
}

/// Entries of a directory on disk, in the order the OS returns them.
///
/// Entries whose metadata cannot be read are skipped with a warning.
#[derive(Debug, Clone)]
pub struct DirSource {
    path: PathBuf,
}

impl DirSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl EntrySource for DirSource {
    fn read_entries(&self) -> Result<Vec<Entry>, ListingError> {
        let dir = fs::read_dir(&self.path).map_err(|source| ListingError::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;

        let mut entries = Vec::new();
        for item in dir {
            let item = match item {
                Ok(item) => item,
                Err(err) => {
                    warn!("skipping unreadable entry in {}: {}", self.path.display(), err);
                    continue;
                }
            };

            let name = item.file_name().to_string_lossy().into_owned();
            // follows symlinks, like stat(2)
            let entry = fs::metadata(item.path())
                .and_then(|metadata| Entry::from_metadata(name.clone(), &metadata));
            match entry {
                Ok(entry) => entries.push(entry),
                Err(err) => warn!("skipping {}: {}", name, err),
            }
        }

        Ok(entries)
    }
}

impl EntrySource for [Entry] {
    fn read_entries(&self) -> Result<Vec<Entry>, ListingError> {
        Ok(self.to_vec())
    }
}
