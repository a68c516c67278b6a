use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use pakextract::{Entry, ExtractOptions, ExtractSummary, FailurePolicy, PakReader, PathPolicy};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract the contents of a PACK .pak archive")]
struct Args {
    /// Input .pak path
    #[arg(index = 1)]
    input: PathBuf,

    /// Output directory. Defaults to the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a line for every extracted file
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    /// List files instead of extracting them
    #[arg(short, long, default_value = "false")]
    list: bool,

    /// Only extract files matching this glob, may be given more than once
    #[arg(short, long, value_parser = glob::Pattern::new)]
    include: Vec<glob::Pattern>,

    /// Stop at the first file that fails to extract
    #[arg(long, default_value = "false")]
    fail_fast: bool,

    /// Write entry names as stored, even if they point outside the output directory
    #[arg(long, default_value = "false")]
    unsafe_paths: bool,

    /// Extract files concurrently
    #[arg(short, long, default_value = "false")]
    parallel: bool,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("could not open \"{}\": {1}", .0.display())]
    Open(PathBuf, io::Error),

    #[error("could not read directory: {0}")]
    Archive(pakextract::Error),

    #[error("{0}")]
    FailFast(pakextract::Error),

    #[error("failed to extract {failed} of {total} files")]
    Entries { failed: usize, total: usize },
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        ExitCode::from(match self {
            CliError::Open(..) => 3,
            CliError::Archive(err) => match err.kind() {
                pakextract::ErrorKind::Format => 4,
                pakextract::ErrorKind::Io | pakextract::ErrorKind::Path => 5,
            },
            CliError::FailFast(_) | CliError::Entries { .. } => 6,
        })
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code()
        }
    }
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(match verbose {
            true => tracing::Level::INFO,
            false => tracing::Level::WARN,
        })
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let mut reader = BufReader::new(
        File::open(&args.input).map_err(|err| CliError::Open(args.input.clone(), err))?,
    );
    let pak = PakReader::new(&mut reader).map_err(CliError::Archive)?;
    tracing::info!("Found {} files", pak.entries().len());

    if args.list {
        list(&pak, args.verbose);
        return Ok(());
    }

    let entries = pak
        .into_entries()
        .into_iter()
        .filter(|e| args.include.is_empty() || args.include.iter().any(|p| p.matches(&e.name)))
        .collect::<Vec<_>>();

    let options = ExtractOptions::new(args.output.clone().unwrap_or_default())
        .verbose(args.verbose)
        .paths(match args.unsafe_paths {
            true => PathPolicy::Verbatim,
            false => PathPolicy::Sanitize,
        })
        .failure(match args.fail_fast {
            true => FailurePolicy::FailFast,
            false => FailurePolicy::Continue,
        });

    let summary = match args.parallel {
        true => extract_parallel(&args.input, &entries, &options),
        false => pakextract::extract_all(&mut reader, &entries, &options),
    }
    .map_err(CliError::FailFast)?;

    if !summary.is_success() {
        return Err(CliError::Entries {
            failed: summary.failed.len(),
            total: entries.len(),
        });
    }
    tracing::info!(
        "Extracted {} files to {}",
        summary.extracted,
        options.output().display()
    );
    Ok(())
}

fn list(pak: &PakReader, verbose: bool) {
    for entry in pak.entries() {
        match verbose {
            true => println!("{:>10} {:>10} {entry}", entry.offset, entry.length),
            false => println!("{entry}"),
        }
    }
}

/// Extract on the rayon pool, every worker reading through its own handle.
/// Failures are reported in directory order once all workers are done.
fn extract_parallel(
    input: &Path,
    entries: &[Entry],
    options: &ExtractOptions,
) -> Result<ExtractSummary, pakextract::Error> {
    let open = || File::open(input).map(BufReader::new);

    if options.failure_policy() == FailurePolicy::FailFast {
        entries
            .par_iter()
            .enumerate()
            .try_for_each_init(open, |file, (index, entry)| {
                extract_with(file, entry, options).map_err(|err| err.in_entry(index, entry))
            })?;
        return Ok(ExtractSummary {
            extracted: entries.len(),
            failed: vec![],
        });
    }

    let results = entries
        .par_iter()
        .map_init(open, |file, entry| extract_with(file, entry, options))
        .collect::<Vec<_>>();

    let mut summary = ExtractSummary::default();
    for (index, (entry, result)) in entries.iter().zip(results).enumerate() {
        match result {
            Ok(()) => summary.extracted += 1,
            Err(err) => summary.record(index, entry, err),
        }
    }
    Ok(summary)
}

fn extract_with(
    file: &mut io::Result<BufReader<File>>,
    entry: &Entry,
    options: &ExtractOptions,
) -> Result<(), pakextract::Error> {
    let file = file
        .as_mut()
        .map_err(|err| io::Error::new(err.kind(), err.to_string()))?;
    pakextract::extract(file, entry, options)?;
    Ok(())
}
