#[derive(thiserror::Error)]
pub enum Error {
    // std errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // crate errors
    #[error("found magic of \"{}\" instead of \"PACK\"", .0.escape_ascii())]
    Magic([u8; 4]),

    #[error("Attempted to write \"{0}\" which is outside of output directory")]
    UnsafePath(String),

    #[error("entry {index} (\"{name}\"): {source}")]
    Entry {
        index: usize,
        name: String,
        source: Box<Error>,
    },
}

/// Coarse classification of an [`Error`], used by callers that need to react
/// to a failure class rather than a particular error
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// The archive is not a PACK archive
    Format,
    /// Reading the archive or writing the output failed
    Io,
    /// An entry name was refused by the path policy
    Path,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::Magic(_) => ErrorKind::Format,
            Error::UnsafePath(_) => ErrorKind::Path,
            Error::Entry { source, .. } => source.kind(),
        }
    }

    /// Attach the index and name of the entry that failed
    pub fn in_entry(self, index: usize, entry: &super::Entry) -> Self {
        Error::Entry {
            index,
            name: entry.name.clone(),
            source: Box::new(self),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
