//! pdfoutline CLI - heading outline inference tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfoutline::render::{to_json, to_json_value, to_text};
use pdfoutline::{
    aggregate_file, extract_outline_file_with_options, BatchProcessor, DocumentOutcome,
    JsonFormat, OutlineOptions,
};

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(version)]
#[command(about = "Infer title and H1/H2/H3 outlines from PDF glyph dumps", long_about = None)]
struct Cli {
    /// Input glyph dump or directory of dumps
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file or directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every extracting command.
#[derive(clap::Args, Clone, Copy)]
struct ExtractArgs {
    /// Vertical tolerance for grouping glyphs into lines
    #[arg(long, default_value_t = pdfoutline::parser::DEFAULT_LINE_TOLERANCE)]
    tolerance: u32,

    /// Font size assigned to OCR lines
    #[arg(long = "ocr-font", default_value_t = pdfoutline::parser::DEFAULT_OCR_FONT_SIZE)]
    ocr_font: f64,
}

impl ExtractArgs {
    fn options(self) -> OutlineOptions {
        OutlineOptions::new()
            .with_line_tolerance(self.tolerance)
            .with_ocr_font_size(self.ocr_font)
    }
}

impl Default for ExtractArgs {
    fn default() -> Self {
        Self {
            tolerance: pdfoutline::parser::DEFAULT_LINE_TOLERANCE,
            ocr_font: pdfoutline::parser::DEFAULT_OCR_FONT_SIZE,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of one glyph dump
    Extract {
        /// Input glyph dump
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: Format,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        args: ExtractArgs,
    },

    /// Extract outlines for every glyph dump in a directory
    Batch {
        /// Directory containing glyph dumps
        #[arg(short, long, value_name = "DIR")]
        input: PathBuf,

        /// Directory to write outlines to
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Process one document at a time
        #[arg(long)]
        sequential: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        args: ExtractArgs,
    },

    /// Dump the aggregated line stream of a glyph dump
    Lines {
        /// Input glyph dump
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        args: ExtractArgs,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Outline JSON
    Json,
    /// Indented text preview
    Text,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            format,
            compact,
            args,
        }) => cmd_extract(&input, output.as_deref(), format, compact, args),
        Some(Commands::Batch {
            input,
            output,
            sequential,
            compact,
            args,
        }) => cmd_batch(&input, &output, sequential, compact, args),
        Some(Commands::Lines {
            input,
            output,
            args,
        }) => cmd_lines(&input, output.as_deref(), args),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => match (cli.input, cli.output) {
            // Default behavior: a directory is a batch, a file is a single extraction
            (Some(input), Some(output)) if input.is_dir() => {
                cmd_batch(&input, &output, false, false, ExtractArgs::default())
            }
            (Some(input), output) => cmd_extract(
                &input,
                output.as_deref(),
                Format::Json,
                false,
                ExtractArgs::default(),
            ),
            (None, _) => {
                println!("{}", "Usage: pdfoutline <INPUT> [OUTPUT]".yellow());
                println!("       pdfoutline --help for more information");
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    format: Format,
    compact: bool,
    args: ExtractArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = extract_outline_file_with_options(input, args.options())?;

    let rendered = match format {
        Format::Json => to_json(&result, json_format(compact))?,
        Format::Text => to_text(&result),
    };

    write_output(output, &rendered)
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    sequential: bool,
    compact: bool,
    args: ExtractArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.is_dir() {
        return Err(format!("Not a directory: {}", input.display()).into());
    }

    let options = args.options().with_parallel(!sequential);
    let processor = BatchProcessor::new(options).with_format(json_format(compact));
    let inputs = processor.collect_inputs(input)?;

    if inputs.is_empty() {
        println!("{} {}", "No glyph dumps found in".yellow(), input.display());
        return Ok(());
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = processor.run(&inputs, output, |outcome| {
        if let Some(name) = outcome.input().file_name() {
            pb.set_message(name.to_string_lossy().into_owned());
        }
        pb.inc(1);
    })?;

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} of {} documents",
        "Processed".green().bold(),
        report.succeeded(),
        report.outcomes.len()
    );

    let failures = report.failures();
    if !failures.is_empty() {
        println!("{}", "Failed:".red().bold());
        for (i, failure) in failures.iter().enumerate() {
            let branch = if i + 1 == failures.len() { "└─" } else { "├─" };
            println!(
                "  {} {}: {}",
                branch.dimmed(),
                failure.input.display(),
                failure.error
            );
        }
    }

    for outcome in &report.outcomes {
        if let DocumentOutcome::Written {
            output, headings, ..
        } = outcome
        {
            log::debug!("{} ({} headings)", output.display(), headings);
        }
    }

    Ok(())
}

fn cmd_lines(
    input: &Path,
    output: Option<&Path>,
    args: ExtractArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let stream = aggregate_file(input, args.options())?;
    let json = to_json_value(&stream, JsonFormat::Pretty)?;
    write_output(output, &json)
}

fn cmd_version() {
    println!("{} {}", "pdfoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Heading outline inference tool");
    println!();
    println!("License: MIT");
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}
