use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures that abort a listing before or while it is written.
#[derive(Debug)]
pub enum ListingError {
    /// The directory itself could not be opened or enumerated.
    SourceUnavailable { path: PathBuf, source: io::Error },
    /// The last-modified template is not a valid `strftime` string.
    InvalidDateFormat(String),
    /// Writing the listing failed.
    Output(io::Error),
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::SourceUnavailable { path, source } => {
                write!(f, "cannot read directory {}: {}", path.display(), source)
            }
            ListingError::InvalidDateFormat(template) => {
                write!(f, "invalid date format {:?}", template)
            }
            ListingError::Output(err) => write!(f, "cannot write listing: {}", err),
        }
    }
}

impl Error for ListingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ListingError::SourceUnavailable { source, .. } => Some(source),
            ListingError::InvalidDateFormat(_) => None,
            ListingError::Output(err) => Some(err),
        }
    }
}

impl ListingError {
    /// The reader of the listing went away, e.g. `filefetch | head -1`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ListingError::Output(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl From<io::Error> for ListingError {
    fn from(err: io::Error) -> Self {
        ListingError::Output(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_message() {
        let err = ListingError::SourceUnavailable {
            path: PathBuf::from("/nope"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "cannot read directory /nope: missing");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_errors_become_output_errors() {
        let err: ListingError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, ListingError::Output(_)));
    }

    #[test]
    fn test_broken_pipe_detection() {
        let closed = ListingError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(closed.is_broken_pipe());

        let full = ListingError::Output(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert!(!full.is_broken_pipe());

        let unreadable = ListingError::SourceUnavailable {
            path: PathBuf::from("."),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "odd"),
        };
        assert!(!unreadable.is_broken_pipe());
    }
}
