//! staticpub - publish CMS content to static sites
//!
//! CLI binary driving the publication endpoint of a CMS.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use staticpub_admin::config::{ClientConfig, DEFAULT_LANGUAGE, DEFAULT_TIMEOUT_SECS};
use staticpub_admin::publication::{HttpPublicationService, PublicationService};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "staticpub")]
#[command(about = "Publish CMS content to static sites")]
#[command(version)]
struct Cli {
    /// Base URL of the CMS
    #[arg(long, env = "STATICPUB_URL", global = true)]
    url: Option<String>,

    /// Admin UI language
    #[arg(long, env = "STATICPUB_LANG", default_value = DEFAULT_LANGUAGE, global = true)]
    lang: String,

    /// Session cookie of an authenticated admin user
    #[arg(long, env = "STATICPUB_SESSION", hide_env_values = true, global = true)]
    session: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "STATICPUB_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    timeout: u64,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what a publication would do, without publishing
    Preview {
        #[command(flatten)]
        options: cli::OptionArgs,
    },

    /// Publish content to a destination
    Publish {
        #[command(flatten)]
        options: cli::OptionArgs,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,

        /// Follow the export until it completes
        #[arg(long)]
        watch: bool,
    },

    /// Show the state of an export
    State {
        /// Export id
        export_id: u64,

        /// Poll until the export completes
        #[arg(long)]
        watch: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "staticpub=debug,staticpub_admin=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let url = cli
        .url
        .context("no CMS URL given; pass --url or set STATICPUB_URL")?;

    let mut config = ClientConfig::new(&url)?
        .with_language(cli.lang)
        .with_timeout(Duration::from_secs(cli.timeout));
    if let Some(session) = cli.session {
        config = config.with_session(session);
    }

    let service: Arc<dyn PublicationService> = Arc::new(HttpPublicationService::new(config)?);

    match cli.command {
        Commands::Preview { options } => {
            cli::run_preview(service.as_ref(), &options).await?;
        }
        Commands::Publish {
            options,
            yes,
            watch,
        } => {
            cli::run_publish(service, &options, yes, watch).await?;
        }
        Commands::State { export_id, watch } => {
            cli::run_state(service.as_ref(), export_id, watch).await?;
        }
    }

    Ok(())
}
