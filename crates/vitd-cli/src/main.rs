use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use vitd_cli::commands;
use vitd_cli::config::{self, VitdConfig};
use vitd_core::models::patient::PatientInput;
use vitd_core::models::record::PatientRecord;
use vitd_scoring::SchemeId;

#[derive(Debug, Parser)]
#[command(name = "vitd", version, about = "Vitamin-D deficiency risk scoring")]
struct Cli {
    /// Path to config.json (defaults to the platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Scheme tag to score under, overriding the config.
    #[arg(long, global = true, env = "VITD_SCHEME")]
    scheme: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write a config file with the given scheme as the active one.
    Init {
        #[arg(long)]
        camp_name: Option<String>,
    },
    /// List the registered scoring schemes.
    Schemes,
    /// Score one patient input (JSON).
    Score { input: PathBuf },
    /// Replay stored patient rows under their recorded schemes.
    Rescore {
        records: PathBuf,
        /// Where to write the updated rows (stdout if omitted).
        #[arg(long)]
        out: Option<PathBuf>,
        /// Scheme to record on rows that carry none.
        #[arg(long)]
        assign_untagged: Option<String>,
    },
    /// Compare stored scores with a fresh replay.
    Audit { records: PathBuf },
    /// Count stored rows per risk level.
    Tally { records: PathBuf },
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };
    let config = config::load_config(&config_path)?;
    let scheme_id = config::active_scheme(&config, cli.scheme.as_deref())?;
    tracing::debug!(scheme = %scheme_id, config = %config_path.display(), "resolved scheme");

    match cli.command {
        Command::Init { camp_name } => {
            let fresh = VitdConfig {
                active_scheme: scheme_id,
                camp_name,
                ..VitdConfig::default()
            };
            config::save_config(&config_path, &fresh)?;
        }
        Command::Schemes => {
            commands::write_json(&commands::list_schemes(scheme_id), None)?;
        }
        Command::Score { input } => {
            let input: PatientInput = commands::read_json(&input)?;
            let result = commands::score_patient(&input, scheme_id)?;
            commands::write_json(&result, None)?;
        }
        Command::Rescore {
            records,
            out,
            assign_untagged,
        } => {
            let assign = assign_untagged
                .as_deref()
                .map(str::parse::<SchemeId>)
                .transpose()?;
            let report = commands::rescore_file(&records, out.as_deref(), assign)?;
            if !report.failures.is_empty() {
                return Err(eyre::eyre!(
                    "{} record(s) could not be rescored",
                    report.failures.len()
                ));
            }
        }
        Command::Audit { records } => {
            let rows: Vec<PatientRecord> = commands::read_json(&records)?;
            let report = commands::audit_records(&rows);
            commands::write_json(&report, None)?;
            if !report.is_clean() {
                return Err(eyre::eyre!(
                    "{} mismatch(es), {} failure(s) out of {} record(s)",
                    report.mismatches.len(),
                    report.failures.len(),
                    rows.len()
                ));
            }
        }
        Command::Tally { records } => {
            let rows: Vec<PatientRecord> = commands::read_json(&records)?;
            commands::write_json(&commands::tally(&rows, scheme_id), None)?;
        }
    }

    Ok(())
}
