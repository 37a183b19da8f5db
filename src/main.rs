use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

use workshop_catalog::apis::{StoreClient, WorkshopClient};
use workshop_catalog::app::ports::{CatalogSink, DirectoryLister, PageFetcher};
use workshop_catalog::config::{Config, FailurePolicy};
use workshop_catalog::constants::DEFAULT_CONTENT_PATH;
use workshop_catalog::infra::{FsDirectoryLister, JsonFileSink, ReqwestFetcher};
use workshop_catalog::types::{Catalog, Lookup};
use workshop_catalog::{logging, metrics, CatalogBuilder};

#[derive(Parser)]
#[command(name = "workshop_catalog")]
#[command(about = "Catalog a Steam Workshop content folder into JSON")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./workshop_catalog.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// File to write the catalog JSON to
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Maximum parallel fetches per folder level
    #[arg(long, global = true)]
    concurrency: Option<usize>,

    /// What to do when a single page fails to fetch or parse: abort or skip
    #[arg(long, global = true)]
    on_error: Option<FailurePolicy>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Rewrite the output file after every resolved game
    #[arg(long, global = true)]
    incremental: bool,

    /// Write the end-of-run counters (Prometheus text format) to this file
    #[arg(long, global = true)]
    metrics_file: Option<PathBuf>,

    /// Directory for the rolling JSON log file
    #[arg(long, global = true, default_value = "logs")]
    log_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Catalog every game folder under a workshop content folder
    Catalog {
        /// Workshop content folder (defaults to the usual Steam install location)
        content_path: Option<PathBuf>,
    },
    /// Catalog a single game folder
    GameFolder { game_path: PathBuf },
    /// Look up the mod a single mod folder stands for
    ModFolder { mod_path: PathBuf },
    /// Look up a game name by ID
    Game { game_id: String },
    /// Look up mod details by ID
    Mod { mod_id: String },
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(concurrency) = self.concurrency {
            config.steam.concurrency = concurrency.max(1);
        }
        if let Some(policy) = self.on_error {
            config.steam.on_error = policy;
        }
        if let Some(path) = &self.metrics_file {
            config.output.metrics_path = Some(path.clone());
        }
        config.output.pretty |= self.pretty;
        config.output.incremental |= self.incremental;
    }
}

fn default_content_root() -> anyhow::Result<PathBuf> {
    let path = Path::new(DEFAULT_CONTENT_PATH);
    if !path.exists() {
        bail!(
            "no content path given and the default '{}' does not exist",
            DEFAULT_CONTENT_PATH
        );
    }
    Ok(path.to_path_buf())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let _log_guard = logging::init_logging(&cli.log_dir);
    let metrics_handle = metrics::init_metrics();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    info!(
        concurrency = config.steam.concurrency,
        on_error = %config.steam.on_error,
        output = %config.output.path.display(),
        "configuration loaded"
    );

    let result = run(cli.command, &config).await;

    // Counters are reported for aborted runs too
    if let Some(handle) = &metrics_handle {
        metrics::report(handle, config.output.metrics_path.as_deref())?;
    }
    result
}

async fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    let fetcher: Arc<dyn PageFetcher> = Arc::new(ReqwestFetcher::new(
        config.steam.timeout(),
        &config.steam.user_agent,
    )?);
    let lister: Arc<dyn DirectoryLister> = Arc::new(FsDirectoryLister);
    let builder = CatalogBuilder::from_config(&config.steam, fetcher.clone(), lister);
    let sink = JsonFileSink::new(
        config.output.path.clone(),
        config.output.pretty,
        config.output.incremental,
    );

    match command {
        Commands::Catalog { content_path } => {
            let root = match content_path {
                Some(path) => path,
                None => default_content_root()?,
            };
            let catalog = match builder
                .build_catalog_with(&root, Some(&sink as &dyn CatalogSink))
                .await
            {
                Ok(catalog) => catalog,
                Err(e) => {
                    error!(kind = ?e.kind(), "catalog run aborted: {}", e);
                    return Err(e).context(if config.output.incremental {
                        "catalog run aborted; output holds the games resolved so far"
                    } else {
                        "catalog run aborted; no output written"
                    });
                }
            };
            sink.finish(&catalog)?;
        }
        Commands::GameFolder { game_path } => {
            let games = builder
                .resolve_game_folder(&game_path)
                .await?
                .into_iter()
                .collect();
            sink.finish(&Catalog { games })?;
        }
        Commands::ModFolder { mod_path } => {
            match builder.mod_aggregator().resolve_mod_folder(&mod_path).await? {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => println!("Mod for folder '{}' not found", mod_path.display()),
            }
        }
        Commands::Game { game_id } => {
            let store = StoreClient::new(fetcher, config.steam.store_url.clone());
            match store.resolve_game(&game_id).await? {
                Lookup::Found(name) => println!("{}", name),
                Lookup::NotFound => println!("Game {} not found", game_id),
            }
        }
        Commands::Mod { mod_id } => {
            let workshop = WorkshopClient::new(fetcher, config.steam.workshop_url.clone());
            match workshop.resolve_mod(&mod_id).await? {
                Lookup::Found(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                Lookup::NotFound => println!("Mod {} not found", mod_id),
            }
        }
    }

    Ok(())
}
