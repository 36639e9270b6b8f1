use anyhow::Result;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use fessctl::cli::commands::{
    CommandContext, handle_accesstoken, handle_badword, handle_boostdoc, handle_config,
    handle_crawlinginfo, handle_dataconfig, handle_duplicatehost, handle_elevateword,
    handle_fileauth, handle_fileconfig, handle_group, handle_joblog, handle_keymatch,
    handle_labeltype, handle_pathmap, handle_ping, handle_relatedcontent, handle_relatedquery,
    handle_reqheader, handle_role, handle_scheduler, handle_user, handle_webauth,
    handle_webconfig,
};
use fessctl::cli::output::print_failure;
use fessctl::cli::{Cli, Commands};
use fessctl::client::FessClient;
use fessctl::error::AppError;
use fessctl::models::{OutputFormat, Settings};

/// Exit code used when interrupted by a signal.
const INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let format = cli.output;

    let code = tokio::select! {
        result = run_command(cli.command, format) => match result {
            Ok(()) => 0,
            Err(err) => report(&err, format),
        },
        _ = shutdown_signal() => {
            eprintln!("\nInterrupted.");
            INTERRUPTED
        }
    };

    std::process::exit(code);
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("fessctl=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Print a failure and pick the process exit code for it.
fn report(err: &anyhow::Error, format: OutputFormat) -> i32 {
    match err.downcast_ref::<AppError>() {
        Some(app) => {
            // json/yaml already printed the full server response
            if !(format.is_structured() && app.is_server_reported()) {
                print_failure(&app.to_string());
            }
            app.exit_code()
        }
        None => {
            print_failure(&format!("{err:#}"));
            1
        }
    }
}

async fn run_command(command: Commands, format: OutputFormat) -> Result<()> {
    if let Commands::Config(cmd) = command {
        return handle_config(cmd, format);
    }

    let settings = Settings::load().map_err(AppError::from)?;

    let client = FessClient::new(&settings).map_err(AppError::from)?;
    let ctx = CommandContext::new(&client, format);

    match command {
        Commands::Ping => handle_ping(&ctx).await,
        Commands::Config(_) => Ok(()),
        Commands::Accesstoken(cmd) => handle_accesstoken(cmd, &ctx).await,
        Commands::Badword(cmd) => handle_badword(cmd, &ctx).await,
        Commands::Boostdoc(cmd) => handle_boostdoc(cmd, &ctx).await,
        Commands::Crawlinginfo(cmd) => handle_crawlinginfo(cmd, &ctx).await,
        Commands::Dataconfig(cmd) => handle_dataconfig(cmd, &ctx).await,
        Commands::Duplicatehost(cmd) => handle_duplicatehost(cmd, &ctx).await,
        Commands::Elevateword(cmd) => handle_elevateword(cmd, &ctx).await,
        Commands::Fileauth(cmd) => handle_fileauth(cmd, &ctx).await,
        Commands::Fileconfig(cmd) => handle_fileconfig(cmd, &ctx).await,
        Commands::Group(cmd) => handle_group(cmd, &ctx).await,
        Commands::Joblog(cmd) => handle_joblog(cmd, &ctx).await,
        Commands::Keymatch(cmd) => handle_keymatch(cmd, &ctx).await,
        Commands::Labeltype(cmd) => handle_labeltype(cmd, &ctx).await,
        Commands::Pathmap(cmd) => handle_pathmap(cmd, &ctx).await,
        Commands::Relatedcontent(cmd) => handle_relatedcontent(cmd, &ctx).await,
        Commands::Relatedquery(cmd) => handle_relatedquery(cmd, &ctx).await,
        Commands::Reqheader(cmd) => handle_reqheader(cmd, &ctx).await,
        Commands::Role(cmd) => handle_role(cmd, &ctx).await,
        Commands::Scheduler(cmd) => handle_scheduler(cmd, &ctx).await,
        Commands::User(cmd) => handle_user(cmd, &ctx).await,
        Commands::Webauth(cmd) => handle_webauth(cmd, &ctx).await,
        Commands::Webconfig(cmd) => handle_webconfig(cmd, &ctx).await,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
