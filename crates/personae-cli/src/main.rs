mod registry;
mod settings;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use personae_core::{DataGroups, Dataset};
use personae_generate::output::{OutputFormat, rows, write_dataset};
use personae_generate::{Assets, AssetsLoader, GenerateOptions, GenerationEngine, GenerationError};
use registry::{RunContext, init_logging, start_run, write_report};
use settings::{Overrides, ResolvedConfig, SettingsError, load_settings};

const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "personae", version, about = "Fake Russian person records")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dataset and write it in the selected formats.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of persons; clamped to 1..=max_total.
    #[arg(long, allow_negative_numbers = true)]
    total: Option<i64>,
    /// Column groups to produce.
    #[arg(long, value_enum)]
    data: Option<DataArg>,
    /// Output format, repeatable.
    #[arg(long = "format", value_enum)]
    formats: Vec<FormatArg>,
    /// Output file name without extension.
    #[arg(long)]
    output: Option<String>,
    /// Directory for the output files.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Seed for reproducible datasets.
    #[arg(long)]
    seed: Option<u64>,
    /// Fail when a cohort runs out of distinct birth dates.
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// TOML settings file (defaults to ./personae.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory with replacement frequency tables.
    #[arg(long)]
    assets_dir: Option<PathBuf>,
    /// Directory for run artifacts (config, logs, report).
    #[arg(long)]
    run_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DataArg {
    Base,
    Contacts,
    Locations,
    Full,
}

impl From<DataArg> for DataGroups {
    fn from(value: DataArg) -> Self {
        match value {
            DataArg::Base => DataGroups::Base,
            DataArg::Contacts => DataGroups::Contacts,
            DataArg::Locations => DataGroups::Locations,
            DataArg::Full => DataGroups::Full,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Csv,
    Sql,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Sql => OutputFormat::Sql,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl From<GenerateArgs> for Overrides {
    fn from(args: GenerateArgs) -> Self {
        Self {
            total: args.total,
            data: args.data.map(DataGroups::from),
            formats: args.formats.into_iter().map(OutputFormat::from).collect(),
            output: args.output,
            out_dir: args.out_dir,
            seed: args.seed,
            strict: args.strict,
            assets_dir: args.assets_dir,
            run_dir: args.run_dir,
        }
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let settings = load_settings(args.config.as_deref())?;
    let config = ResolvedConfig::resolve(settings, Overrides::from(args));
    if config.output.trim().is_empty() {
        return Err(CliError::InvalidConfig("output name is empty".to_string()));
    }
    if config.formats.is_empty() {
        return Err(CliError::InvalidConfig("no output format selected".to_string()));
    }

    let run_paths = match &config.run_dir {
        Some(run_dir) => {
            let ctx = RunContext {
                run_id: Uuid::new_v4().to_string(),
                started_at: chrono::Utc::now(),
                run_dir: run_dir.clone(),
                config: config.clone(),
            };
            let paths = start_run(&ctx)?;
            init_logging(Some(&paths.logs_path))?;
            info!(run_id = %ctx.run_id, run = %paths.root.display(), "run started");
            Some(paths)
        }
        None => {
            init_logging(None)?;
            None
        }
    };

    if config.was_clamped() {
        warn!(
            requested = config.requested_total,
            total = config.total,
            "total clamped to the allowed range"
        );
    }

    let loaded: Assets;
    let assets = match &config.assets_dir {
        Some(dir) => {
            loaded = AssetsLoader::from_dir(dir.clone()).load()?;
            &loaded
        }
        None => personae_generate::assets()?,
    };

    let engine = GenerationEngine::new(GenerateOptions {
        groups: config.data,
        seed: config.seed,
        strict: config.strict,
        ..GenerateOptions::default()
    });
    let result = engine.run(config.total, assets)?;

    print_preview(&result.dataset);

    for format in &config.formats {
        let path = write_dataset(&config.out_dir, &config.output, *format, &result.dataset)?;
        println!("written {} ({} rows)", path.display(), result.dataset.len());
    }

    if let Some(paths) = &run_paths {
        write_report(paths, &result.report)?;
        println!("run artifacts in {}", paths.root.display());
    }

    Ok(())
}

fn print_preview(dataset: &Dataset) {
    for row in rows(dataset).iter().take(PREVIEW_ROWS) {
        let mut line = format!(
            "{:>6}  {} {} {}  {}  {}",
            row.id, row.last_name, row.first_name, row.patronymic, row.sex, row.birth_date
        );
        if let (Some(phone), Some(email)) = (row.phone, row.email) {
            line.push_str(&format!("  {phone}  {email}"));
        }
        if let (Some(region), Some(locality)) = (row.region, row.locality) {
            line.push_str(&format!("  {locality} ({region})"));
        }
        println!("{line}");
    }
    if dataset.len() > PREVIEW_ROWS {
        println!("   ... {} more", dataset.len() - PREVIEW_ROWS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_flags_parse() {
        let cli = Cli::try_parse_from([
            "personae",
            "generate",
            "--total",
            "-3",
            "--data",
            "full",
            "--format",
            "csv",
            "--format",
            "sql",
            "--seed",
            "9",
            "--strict",
        ])
        .expect("parse");
        let Command::Generate(args) = cli.command;
        let overrides = Overrides::from(args);
        assert_eq!(overrides.total, Some(-3));
        assert_eq!(overrides.data, Some(DataGroups::Full));
        assert_eq!(overrides.formats, vec![OutputFormat::Csv, OutputFormat::Sql]);
        assert_eq!(overrides.seed, Some(9));
        assert!(overrides.strict);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let parsed = Cli::try_parse_from(["personae", "generate", "--format", "xlsx"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn defaults_leave_settings_untouched() {
        let cli = Cli::try_parse_from(["personae", "generate"]).expect("parse");
        let Command::Generate(args) = cli.command;
        let config = ResolvedConfig::resolve(settings::Settings::default(), Overrides::from(args));
        assert_eq!(config.total, 1000);
        assert_eq!(config.data, DataGroups::Base);
        assert_eq!(config.formats, vec![OutputFormat::Csv]);
        assert_eq!(config.output, "new_dataset");
    }
}
