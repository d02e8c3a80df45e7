use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::WrapErr;
use serde::Serialize;

use policoin_models::config::ProgressConfig;
use policoin_models::session::SessionContext;
use policoin_models::{MetaProgress, PointsSummary};
use policoin_progress::{aggregate, tier_info, tier_info_strict, Dashboard};

#[derive(Parser, Debug)]
#[command(name = "policoin-progress")]
#[command(about = "Policoin tier and mission progress from saved backend responses", long_about = None)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Print the tier for a cumulative point total")]
    Tier {
        #[arg(long, allow_hyphen_values = true, help = "Cumulative Policoin total")]
        points: f64,
    },
    #[command(about = "Print active ladders and completed missions per category")]
    Missions {
        #[arg(long, value_name = "FILE", help = "meta-progress JSON (default: $POLICOIN_DATA_DIR/meta_progress.json)")]
        file: Option<PathBuf>,
    },
    #[command(about = "Print the full home dashboard view")]
    Dashboard {
        #[arg(long, value_name = "FILE", help = "Points summary JSON")]
        points_file: Option<PathBuf>,
        #[arg(long, value_name = "FILE", help = "meta-progress JSON")]
        progress_file: Option<PathBuf>,
        #[arg(long, value_name = "FILE", help = "Stored user_data JSON")]
        session_file: Option<PathBuf>,
    },
}

fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "policoin_progress=info,policoin_models=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ProgressConfig::from_env().wrap_err("failed to load config from env vars")?;
    tracing::debug!("Config loaded: {:?}", config);

    match args.command {
        Command::Tier { points } => {
            let info = if config.strict_points {
                tier_info_strict(points)?
            } else {
                tier_info(points)
            };
            print_json(&info)?;
        }
        Command::Missions { file } => {
            let path = file.unwrap_or_else(|| config.meta_progress_path());
            let progress = MetaProgress::load_from_path(&path)?;
            tracing::info!("Loaded {} categories from {}", progress.categories.len(), path.display());
            print_json(&aggregate(&progress))?;
        }
        Command::Dashboard {
            points_file,
            progress_file,
            session_file,
        } => {
            let points = load_optional(points_file, config.points_path(), |p| {
                PointsSummary::load_from_path(p)
            })?;
            let progress_path = progress_file.unwrap_or_else(|| config.meta_progress_path());
            let progress = MetaProgress::load_from_path(&progress_path)?;
            let session = load_optional(session_file, config.session_path(), |p| {
                let json = std::fs::read_to_string(p)
                    .wrap_err_with(|| format!("read session: {}", p.display()))?;
                SessionContext::from_json_str(&json)
            })?;

            if let Some(session) = &session {
                if !session.is_authorized() {
                    tracing::warn!("Session user has no authorized role");
                }
            }

            let view = Dashboard::new(&config)
                .build(points.as_ref(), &progress, session.as_ref())
                .wrap_err("build dashboard")?;
            print_json(&view)?;
        }
    }

    Ok(())
}

/// Explicit paths must load; the default location may simply be absent.
fn load_optional<T>(
    explicit: Option<PathBuf>,
    default_path: PathBuf,
    load: impl Fn(&Path) -> eyre::Result<T>,
) -> eyre::Result<Option<T>> {
    match explicit {
        Some(path) => load(&path).map(Some),
        None if default_path.exists() => load(&default_path).map(Some),
        None => {
            tracing::info!("{} not found, skipping", default_path.display());
            Ok(None)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    let json = serde_json::to_string_pretty(value).wrap_err("serialize json")?;
    println!("{json}");
    Ok(())
}
