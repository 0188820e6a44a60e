mod build;
mod check;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use tracing_subscriber::EnvFilter;

use spvbatch_core::{manifest, BatchReport, CompileJob, CompileJobBuilder, ShaderOutcome, DEFAULT_COMPILER};

use build::build;
use check::check;

/// Batch driver compiling GLSL shaders to SPIR-V through an external compiler.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    commands: Commands,

    /// Only log warnings and errors.
    #[clap(short, long, global = true, value_parser)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    Build(Build),
    Check(Check),
}

/// Compile every listed shader to a `<shader>.spv` artifact.
#[derive(Args)]
pub struct Build {
    #[clap(flatten)]
    batch: BatchArgs,
}

/// Parse and validate every listed shader without writing artifacts.
#[derive(Args)]
pub struct Check {
    #[clap(flatten)]
    batch: BatchArgs,
}

/// Arguments shared by the subcommands driving the compiler.
#[derive(Args)]
pub struct BatchArgs {
    /// The shader source files, compiled in this order.
    #[clap(value_parser)]
    shaders: Vec<PathBuf>,

    /// A manifest file listing shaders, one per line.
    /// Entries run after the shaders given on the command line.
    #[clap(short, long, value_parser)]
    list: Option<PathBuf>,

    /// The directory to compile in.
    /// Inputs are read and artifacts written relative to it.
    #[clap(short = 'C', long = "directory", value_parser)]
    directory: Option<PathBuf>,

    /// The compiler command to invoke.
    #[clap(long, value_parser, default_value = DEFAULT_COMPILER)]
    compiler: PathBuf,

    /// Let the compiler write to the terminal directly instead of
    /// capturing its output into the summary.
    #[clap(long, value_parser)]
    passthrough: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.commands {
        Commands::Build(args) => build(args)?,
        Commands::Check(args) => check(args)?,
    }

    Ok(())
}

/// Helper function to turn the shared CLI arguments into a compile job.
fn job_from_args(args: &BatchArgs) -> Result<CompileJob> {
    let mut shaders = args.shaders.clone();
    if let Some(list) = &args.list {
        shaders.extend(manifest::read_manifest(list)?);
    }

    let mut builder = CompileJobBuilder::new()
        .compiler(&args.compiler)
        .shaders(shaders)
        .inherit_output(args.passthrough);

    if let Some(dir) = &args.directory {
        builder = builder.working_dir(dir);
    }

    Ok(builder.build()?)
}

/// Helper function to print the per-shader summary of a finished batch.
fn print_report(report: &BatchReport) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Shader", "Status", "Exit code"]);

    for entry in &report.shaders {
        let status = match &entry.outcome {
            ShaderOutcome::Compiled => "ok".to_owned(),
            ShaderOutcome::Failed { .. } => "failed".to_owned(),
            ShaderOutcome::NotLaunched { reason } => format!("not launched: {reason}"),
        };
        let code = entry
            .outcome
            .code()
            .map(|code| code.to_string())
            .unwrap_or_default();

        table.add_row(vec![entry.shader.display().to_string(), status, code]);
    }

    println!("{table}");
}

/// Helper function to replay the captured compiler output of every failure.
fn print_failures(report: &BatchReport) {
    for entry in report.failures() {
        if let ShaderOutcome::Failed { stdout, stderr, .. } = &entry.outcome {
            // glslangValidator reports errors on stdout
            if !stdout.is_empty() {
                eprint!("{stdout}");
            }
            if !stderr.is_empty() {
                eprint!("{stderr}");
            }
        }
    }
}
