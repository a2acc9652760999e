//! Command-line interface for the broken-link validator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use brokenlinks::{
    AggregatePolicy, FsSourceConfig, ValidationConfig, WriterSink, output, validate_tree,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Banner-style summary for terminals.
    Human,
    /// Machine-readable report.
    Json,
}

/// Validate a documentation tree for broken links.
///
/// Checks image links (png, svg, gif), file links, and internal references
/// including header anchors. Web links are printed as `open <url>` lines
/// for manual checking rather than fetched.
#[derive(Debug, Parser)]
#[command(name = "brokenlinks", version)]
struct Args {
    /// Directory (or single file) to check.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// File extension to be filtered on, with leading dot.
    #[arg(long, default_value = ".md")]
    ext: String,

    /// Only print broken-link errors; suppress `open <url>` lines.
    #[arg(long)]
    only_errors: bool,

    /// Fail a document on any broken line instead of only the last one
    /// scanned.
    #[arg(long)]
    strict: bool,

    /// Exclude pattern (glob format); repeatable.
    #[arg(long)]
    exclude: Vec<String>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Log every file as it is validated.
    #[arg(long)]
    debug: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    init_tracing(args.debug);

    let mut fs_config = FsSourceConfig::default();
    fs_config.paths = vec![args.dir];
    fs_config.extension = args.ext;
    fs_config.exclude = args.exclude;

    let mut validation_config = ValidationConfig::default();
    validation_config.only_errors = args.only_errors;
    if args.strict {
        validation_config.aggregate = AggregatePolicy::AnyLine;
    }

    let mut sink = WriterSink::new(std::io::stdout());
    let report = validate_tree(&fs_config, &validation_config, &mut sink)?;

    let mut stdout = std::io::stdout();
    match args.format {
        OutputFormat::Human => output::write_human(&report, &mut stdout)?,
        OutputFormat::Json => output::write_json(&report, &mut stdout)?,
    }

    if !report.ok {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "brokenlinks=debug"
    } else {
        "brokenlinks=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
