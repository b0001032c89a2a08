use std::env;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use usagescope::analysis::{ClassAnalyzer, ContentAnalyzer};
use usagescope::export::{self, ExportFormat, Exporter, TextExporter};
use usagescope::patterns::{
    load_class_patterns, load_content_patterns, primevue_patterns, tailwind_patterns,
};
use usagescope::report::{self, PrimeVueReport, TailwindReport, UsageReport};
use usagescope::scan::ScanOptions;

#[derive(Parser)]
#[command(name = "usagescope")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Usage analyzer for PrimeVue components and Tailwind utility classes", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Count PrimeVue components, CSS variables and theme classes
    Primevue(AnalyzeArgs),
    /// Count Tailwind utility classes and color families
    Tailwind(AnalyzeArgs),
    /// Show version information
    Version,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Source directory to analyze
    #[arg(short, long, default_value = "src")]
    path: PathBuf,

    /// Report file (defaults to <kind>-usage-stats.<ext> in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report file format: json, csv, markdown
    #[arg(short, long, default_value = "json")]
    format: ExportFormat,

    /// Entries shown per category in the console summary
    #[arg(long, default_value_t = export::text::DEFAULT_TOP_N)]
    top: usize,

    /// JSON file replacing the built-in pattern tables
    #[arg(long)]
    patterns: Option<PathBuf>,
}

impl AnalyzeArgs {
    fn output_path(&self, kind: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.format.default_path(kind))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    debug!("usagescope v{} starting", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Some(Commands::Primevue(args)) => run_primevue(args),
        Some(Commands::Tailwind(args)) => run_tailwind(args),
        Some(Commands::Version) => {
            println!("usagescope v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("UsageScope - PrimeVue and Tailwind usage analyzer");
            println!("Run 'usagescope primevue' or 'usagescope tailwind' to analyze ./src");
            println!("Run 'usagescope --help' for more information");
            Ok(())
        }
    }
}

fn run_primevue(args: &AnalyzeArgs) -> Result<()> {
    let tables = match &args.patterns {
        Some(path) => load_content_patterns(path)
            .with_context(|| format!("Failed to load patterns from {}", path.display()))?,
        None => primevue_patterns().context("Failed to build PrimeVue patterns")?,
    };

    println!("Starting PrimeVue usage analysis...");
    println!("Analyzing {}", args.path.display());

    let analyzer = ContentAnalyzer::new(tables);
    let acc = analyzer.analyze_project(&args.path, &ScanOptions::for_content());
    let report = PrimeVueReport::from_accumulator(&acc, report::timestamp_now());

    write_report(&report, args, &args.output_path("primevue"))
}

fn run_tailwind(args: &AnalyzeArgs) -> Result<()> {
    let patterns = match &args.patterns {
        Some(path) => load_class_patterns(path)
            .with_context(|| format!("Failed to load patterns from {}", path.display()))?,
        None => tailwind_patterns().context("Failed to build Tailwind patterns")?,
    };

    println!("Starting Tailwind CSS usage analysis...");
    println!("Analyzing {}", args.path.display());

    let analyzer = ClassAnalyzer::new(patterns);
    let acc = analyzer.analyze_project(&args.path, &ScanOptions::for_classes());
    let report = TailwindReport::from_accumulator(&acc, report::timestamp_now());

    write_report(&report, args, &args.output_path("tailwind"))
}

/// Write the report file, then print the console summary.
fn write_report<R: UsageReport>(report: &R, args: &AnalyzeArgs, output: &Path) -> Result<()> {
    export::export_to_file(args.format, report, output)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    TextExporter::new(args.top)
        .export(report, &mut handle)
        .context("Failed to print summary")?;

    println!();
    println!("Analysis complete! Results saved to: {}", output.display());
    Ok(())
}

fn init_logging(cli: &Cli) {
    let level = if let Some(level_str) = &cli.log_level {
        parse_level(level_str)
    } else if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        let level_str = env::var("USAGESCOPE_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        parse_level(&level_str)
    };

    let filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(format!("usagescope={}", level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}
