use super::pak::read_payload;
use super::{Entry, PathPolicy};
use std::fs;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

/// What a batch extraction does when one entry fails
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum FailurePolicy {
    /// Log the failure, record it in the summary and go on with the next entry
    #[default]
    Continue,
    /// Stop and return the first failure
    FailFast,
}

/// Settings for extracting entries to disk
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    output: PathBuf,
    verbose: bool,
    paths: PathPolicy,
    failure: FailurePolicy,
}

impl ExtractOptions {
    /// Extract into `output`. An empty path means the current directory.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }
    /// Log an `Extracting <name>` line for every entry
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
    pub fn paths(mut self, paths: PathPolicy) -> Self {
        self.paths = paths;
        self
    }
    pub fn failure(mut self, failure: FailurePolicy) -> Self {
        self.failure = failure;
        self
    }
    pub fn output(&self) -> &Path {
        &self.output
    }
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure
    }
}

/// An entry that could not be extracted
#[derive(Debug)]
pub struct Failure {
    pub index: usize,
    pub name: String,
    pub error: super::Error,
}

/// Outcome of [`extract_all`]
#[derive(Debug, Default)]
pub struct ExtractSummary {
    pub extracted: usize,
    pub failed: Vec<Failure>,
}

impl ExtractSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Log and keep a failed entry
    pub fn record(&mut self, index: usize, entry: &Entry, error: super::Error) {
        tracing::warn!("failed to extract entry {index} \"{}\": {error}", entry.name);
        self.failed.push(Failure {
            index,
            name: entry.name.clone(),
            error,
        });
    }
}

/// Write the payload of `entry` below the output directory of `options` and
/// return the path written to.
///
/// The payload is read completely before anything touches the file system, so
/// a truncated archive never leaves a partial file behind. Missing parent
/// directories are created and an existing file is overwritten.
pub fn extract<R: Read + Seek>(
    reader: &mut R,
    entry: &Entry,
    options: &ExtractOptions,
) -> Result<PathBuf, super::Error> {
    let path = options.paths.resolve(&options.output, &entry.name)?;
    let data = read_payload(entry, reader)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    if options.verbose {
        tracing::info!("Extracting {}", entry.name);
    }
    fs::write(&path, data)?;
    Ok(path)
}

/// Extract `entries` one after another in the order given.
///
/// With [`FailurePolicy::Continue`] every entry is attempted and failures are
/// collected in the returned summary. With [`FailurePolicy::FailFast`] the
/// first failure is returned as [`Error::Entry`](super::Error::Entry).
pub fn extract_all<R: Read + Seek>(
    reader: &mut R,
    entries: &[Entry],
    options: &ExtractOptions,
) -> Result<ExtractSummary, super::Error> {
    let mut summary = ExtractSummary::default();
    for (index, entry) in entries.iter().enumerate() {
        match extract(reader, entry, options) {
            Ok(_) => summary.extracted += 1,
            Err(err) => {
                if options.failure == FailurePolicy::FailFast {
                    return Err(err.in_entry(index, entry));
                }
                summary.record(index, entry, err);
            }
        }
    }
    Ok(summary)
}

