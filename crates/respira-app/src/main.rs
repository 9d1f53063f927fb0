use clap::Parser;
use respira_app::cli::{Cli, Commands};
use respira_app::config::AppConfig;
use respira_app::server::run_server;
use respira_app::state::AppState;
use respira_model::load_predictor;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            address,
            model_url,
            model_path,
            cache_dir,
            verbose,
        } => {
            init_logging(verbose);

            let config = AppConfig {
                artifact_url: model_url,
                artifact_path: model_path,
                cache_dir,
            };

            let addr: SocketAddr = format!("{}:{}", address, port).parse()?;

            println!();
            println!("  ╔════════════════════════════════════════╗");
            println!("  ║   Respira - Asthma Risk Prediction     ║");
            println!("  ╚════════════════════════════════════════╝");
            println!();

            // First run fetches the artifact; nothing is served until the
            // model is ready.
            println!("  Preparing model (first run downloads the artifact)...");
            let predictor = load_predictor(&config.artifact_config()).await?;
            println!("  Model ready.");
            println!();
            println!("  Open http://{} in your browser", addr);
            println!();

            let state = AppState::new(predictor, config);
            run_server(state, addr).await?;
        }

        Commands::FetchModel {
            model_url,
            cache_dir,
            force,
            verbose,
        } => {
            init_logging(verbose);

            let config = AppConfig {
                artifact_url: model_url,
                artifact_path: None,
                cache_dir,
            };
            let artifact = config.artifact_config();

            if force {
                let cached = artifact.local_path();
                if cached.exists() {
                    println!("Removing cached artifact {}", cached.display());
                    tokio::fs::remove_file(&cached).await?;
                }
            }

            let path = artifact.ensure_local().await?;
            println!("Model artifact ready at {}", path.display());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "respira_app=debug,respira_model=debug,tower_http=debug"
    } else {
        "respira_app=info,respira_model=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
