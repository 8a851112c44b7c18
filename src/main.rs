use std::io::{self, IsTerminal, Write};
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tokio::net::TcpListener;
use tracing::{info, warn};

use userd::api;
use userd::i18n::GreetingCatalog;
use userd::settings::Settings;
use userd::user::{CreateUserRequest, UserStore};

fn main() {
    if let Err(err) = try_main() {
        let _ = writeln!(io::stderr(), "{err:?}");
        std::process::exit(1);
    }
}

#[tokio::main]
async fn async_main(common: CommonOpts, cmd: ServeCommand) -> Result<()> {
    handle_serve(&common, cmd).await
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(cmd) => {
            init_logging(&cli.common);
            async_main(cli.common, cmd)
        }
        Command::Completions { shell } => handle_completions(shell),
    }
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "userd - minimal in-memory User REST service.",
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    common: CommonOpts,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Args)]
struct CommonOpts {
    /// Override the config file path
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Reduce output to only errors
    #[arg(short, long, action = clap::ArgAction::SetTrue, global = true)]
    quiet: bool,
    /// Increase logging verbosity (stackable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Enable debug logging (equivalent to -v)
    #[arg(long, global = true)]
    debug: bool,
    /// Enable trace logging (overrides other levels)
    #[arg(long, global = true)]
    trace: bool,
    /// Emit logs as machine readable JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP API server
    Serve(ServeCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Args)]
struct ServeCommand {
    /// Override the configured listen host
    #[arg(long)]
    host: Option<String>,
    /// Override the configured listen port
    #[arg(long)]
    port: Option<u16>,
}

fn init_logging(common: &CommonOpts) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let level = if common.quiet {
        "error"
    } else if common.trace {
        "trace"
    } else if common.debug || common.verbose == 1 {
        "debug"
    } else if common.verbose >= 2 {
        "trace"
    } else {
        "info"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("userd={level},tower_http={level}")));

    if common.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_ansi(io::stderr().is_terminal()))
            .try_init()
            .ok();
    }
}

async fn handle_serve(common: &CommonOpts, cmd: ServeCommand) -> Result<()> {
    let settings = Settings::load(common.config.as_deref())?;

    let host = cmd.host.unwrap_or_else(|| settings.server.host.clone());
    let port = cmd.port.unwrap_or(settings.server.port);

    // Build the store and apply configured seed users
    let store = UserStore::new();
    for seed in &settings.seed_users {
        if seed.name.trim().is_empty() {
            warn!("Skipping seed user with empty name");
            continue;
        }
        let user = store.save(CreateUserRequest {
            name: seed.name.clone(),
            birth_date: seed.birth_date,
        });
        info!(user_id = %user.id, name = %user.name, "Seeded user");
    }

    let greetings = GreetingCatalog::new(
        settings.greeting.default.clone(),
        &settings.greeting.locales,
    );

    let state = api::AppState::new(store, greetings)
        .with_allowed_origins(settings.server.allowed_origins.clone());
    let app = api::create_router(state);

    let addr: SocketAddr = format!("{host}:{port}").parse().context("invalid address")?;

    info!("Listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await.context("binding to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("running server")?;

    Ok(())
}

/// Resolve on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

fn handle_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
