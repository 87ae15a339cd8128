use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;

use xdprog_core::{PatchReport, Program, UserUnitMappings, build_report, resolve_sequencer};

#[derive(Parser, Debug)]
#[command(name = "xdprog")]
#[command(version)]
#[command(
    about = "Decoder and report generator for minilogue xd program dumps.",
    long_about = None,
    after_help = "Examples:\n  xdprog decode Prog_000.prog_bin -o report.json\n  xdprog decode 'Library_*.prog_bin' -o reports/\n  xdprog decode Prog_000.prog_bin --stdout --pretty"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode extracted .prog_bin program dumps into JSON reports.
    #[command(
        after_help = "Examples:\n  xdprog decode Prog_000.prog_bin -o report.json\n  xdprog decode 'Library_*.prog_bin' -o reports/ --strict"
    )]
    Decode {
        /// Path or glob pattern of .prog_bin files
        input: PathBuf,

        /// Output report path (JSON); a directory when several files match
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write the JSON report to stdout (single input only)
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// JSON file naming the user oscillator/effect slots
        #[arg(long)]
        mappings: Option<PathBuf>,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if any record fails to decode
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            input,
            report,
            stdout,
            pretty,
            compact: _,
            mappings,
            quiet,
            strict,
        } => cmd_decode(input, report, stdout, pretty, mappings, quiet, strict),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_decode(
    input: PathBuf,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    mappings: Option<PathBuf>,
    quiet: bool,
    strict: bool,
) -> Result<(), CliError> {
    let inputs = resolve_input_paths(&input)?;
    if stdout && inputs.len() > 1 {
        return Err(CliError::new(
            format!("--stdout requires a single input, got {} matches", inputs.len()),
            Some("write reports to a directory with -o instead".to_string()),
        ));
    }

    let mappings = load_mappings(mappings.as_deref())?;

    let report_dir = if inputs.len() > 1 {
        let dir = report.clone().expect("clap requires -o without --stdout");
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        Some(dir)
    } else {
        None
    };

    let mut decoded = 0usize;
    let mut failures = 0usize;

    for path in &inputs {
        let name = record_name(path);
        let buf = match fs::read(path) {
            Ok(buf) => buf,
            Err(err) => {
                eprintln!("error: {name}: {err}");
                failures += 1;
                continue;
            }
        };

        let program = match Program::parse(&buf) {
            Ok(program) => program,
            Err(err) => {
                eprintln!("error: {name}: {err}");
                failures += 1;
                continue;
            }
        };

        // A broken sequencer region degrades to a warning; the program
        // report is still produced.
        let sequencer = match resolve_sequencer(&buf) {
            Ok(sequencer) => sequencer,
            Err(err) => {
                eprintln!("warning: {name}: sequencer: {err}");
                None
            }
        };

        let patch_report = match build_report(
            &name,
            buf.len() as u64,
            &program,
            sequencer.as_ref(),
            &mappings,
        ) {
            Ok(patch_report) => patch_report,
            Err(err) => {
                eprintln!("error: {name}: {err}");
                failures += 1;
                continue;
            }
        };

        let json = serialize_report(&patch_report, pretty)?;
        if stdout {
            print!("{json}");
        } else {
            let target = output_path(path, report.as_deref(), report_dir.as_deref());
            if let Some(parent) = target.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&target, json)
                .with_context(|| format!("Failed to write report: {}", target.display()))?;
            if !quiet {
                eprintln!("OK: {name} -> {}", target.display());
            }
        }
        decoded += 1;
    }

    if decoded == 0 {
        return Err(CliError::new(
            "no records decoded",
            Some("run with a valid .prog_bin file".to_string()),
        ));
    }
    if strict && failures > 0 {
        return Err(CliError::new(
            format!("{failures} record(s) failed to decode"),
            Some("inspect the per-record errors above".to_string()),
        ));
    }
    Ok(())
}

fn record_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn serialize_report(report: &PatchReport, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(report)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(report)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn load_mappings(path: Option<&Path>) -> Result<UserUnitMappings, CliError> {
    let Some(path) = path else {
        return Ok(UserUnitMappings::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mappings file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse mappings file: {}", path.display()))
        .map_err(Into::into)
}

fn output_path(input: &Path, report: Option<&Path>, report_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    let file_name = format!("{stem}.report.json");
    if let Some(dir) = report_dir {
        return dir.join(file_name);
    }
    match report {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(file_name),
    }
}

fn resolve_input_paths(input: &Path) -> Result<Vec<PathBuf>, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        if !input.exists() {
            return Err(CliError::new(
                format!("input file not found: {}", input.display()),
                Some("use a .prog_bin file extracted from a library".to_string()),
            ));
        }
        if !input.is_file() {
            return Err(CliError::new(
                format!("input is not a file: {}", input.display()),
                Some("use a .prog_bin file or a glob pattern".to_string()),
            ));
        }
        return Ok(vec![input.to_path_buf()]);
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }
    matches.sort();

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    Ok(matches)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
