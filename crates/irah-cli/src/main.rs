use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use jiff::tz::TimeZone;
use tracing_subscriber::EnvFilter;

use irah_analytics::dashboard::Dashboard;
use irah_analytics::table::filter_by_tiers;
use irah_cli::backend::Backend;
use irah_cli::config::{self, IrahConfig};
use irah_cli::evaluator::{EvaluationError, Evaluator};
use irah_core::models::observation::{AsgCategory, ClinicalObservation};
use irah_core::models::record::EvaluationRecord;
use irah_core::models::score::{RiskTier, ScoreResult};
use irah_core::store_keys;
use irah_export::csv::write_csv;
use irah_export::report::render_dashboard;

#[derive(Parser)]
#[command(name = "irah", version, about = "Hospital Assistential Risk Index (IRAH)")]
struct Cli {
    /// Path to the config file.
    #[arg(long, env = "IRAH_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score one patient, optionally saving the evaluation.
    Evaluate(EvaluateArgs),
    /// Print the analytics report over the saved history.
    Dashboard {
        /// Group evaluations by UTC date instead of the local time zone.
        #[arg(long)]
        utc: bool,
    },
    /// Write the saved history as CSV, newest first.
    Export {
        /// Only include these tiers. Repeatable; omit for all.
        #[arg(long = "tier")]
        tiers: Vec<RiskTier>,
        /// Output file, or a directory to write a dated export into.
        /// Defaults to stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Manage the config file.
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Args)]
struct EvaluateArgs {
    /// Case identifier ("Código do Atendimento"). Required to save.
    #[arg(long)]
    case_id: Option<String>,
    /// Fugulin score, 0–100.
    #[arg(long, allow_negative_numbers = true)]
    fugulin: i32,
    /// ASG category: A, B, C, a form label, or empty for unspecified.
    #[arg(long, default_value = "")]
    asg: AsgCategory,
    /// MRC sum score, 0–60.
    #[arg(long, allow_negative_numbers = true)]
    mrc: i32,
    /// Discharge triage score, 0–20.
    #[arg(long, allow_negative_numbers = true)]
    triagem: i32,
    /// Charlson comorbidity index, 0–50.
    #[arg(long, allow_negative_numbers = true)]
    charlson: i32,
    /// Persist the evaluation to the configured store.
    #[arg(long)]
    save: bool,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Print the active config.
    Show,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_result(result: &ScoreResult) {
    println!("IRAH score: {:.2}", result.index);
    println!("Classification: {}", result.tier);
}

async fn evaluate(config: IrahConfig, args: EvaluateArgs) -> Result<()> {
    let observation = ClinicalObservation {
        fugulin: args.fugulin,
        asg: args.asg,
        mrc: args.mrc,
        triagem: args.triagem,
        charlson: args.charlson,
    };

    if !args.save {
        let result = irah_scoring::scorer::score(&observation, &config.scoring)?;
        print_result(&result);
        return Ok(());
    }

    let actor = config.actor();
    let backend = Backend::from_config(&config.store).await;
    let evaluator = Evaluator::new(backend, config.scoring, actor);

    match evaluator
        .save(args.case_id.as_deref(), &observation, jiff::Timestamp::now())
        .await
    {
        Ok(record) => {
            print_result(&record.result());
            println!(
                "Saved evaluation {} to {} store.",
                record.case_id,
                evaluator.store().describe()
            );
            Ok(())
        }
        Err(EvaluationError::MissingRequiredField { field, result }) => {
            print_result(&result);
            Err(eyre::eyre!("evaluation not saved: {field} is required"))
        }
        Err(e) => Err(e.into()),
    }
}

async fn load_history(config: &IrahConfig) -> Result<Vec<EvaluationRecord>> {
    let backend = Backend::from_config(&config.store).await;
    let evaluator = Evaluator::new(backend, config.scoring.clone(), config.actor());
    let records = evaluator.history().await?;
    tracing::debug!(count = records.len(), "history loaded");
    Ok(records)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    match cli.command {
        Command::Evaluate(args) => {
            let config = config::load_or_default(&config_path)?;
            evaluate(config, args).await?;
        }
        Command::Dashboard { utc } => {
            let config = config::load_or_default(&config_path)?;
            let records = load_history(&config).await?;
            let tz = if utc { TimeZone::UTC } else { TimeZone::system() };
            print!("{}", render_dashboard(&Dashboard::build(&records, &tz))?);
        }
        Command::Export { tiers, output } => {
            let config = config::load_or_default(&config_path)?;
            let records = filter_by_tiers(&load_history(&config).await?, &tiers);
            match output {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(store_keys::export_csv(jiff::Zoned::now().date()))
                    } else {
                        path
                    };
                    write_csv(BufWriter::new(File::create(&path)?), &records)?;
                    tracing::info!(
                        path = %path.display(),
                        rows = records.len(),
                        "export written"
                    );
                }
                None => write_csv(io::stdout().lock(), &records)?,
            }
        }
        Command::Config { action } => match action {
            ConfigCommand::Init { force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                let config = IrahConfig::local(config::default_records_path()?);
                config::save_config(&config_path, &config)?;
                println!("Wrote {}", config_path.display());
            }
            ConfigCommand::Show => {
                let config = config::load_or_default(&config_path)?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        },
    }

    Ok(())
}
