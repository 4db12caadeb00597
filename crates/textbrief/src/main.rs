use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textbrief_common::{logger, AppConfig};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "textbrief")]
#[command(about = "Textbrief - AI-powered text summarization backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "8080")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root
    // Note: AppConfig::from_env() also loads .env, but we do it here early
    // to ensure any CLI argument overrides work correctly
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            // Override with CLI arguments
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());

            let config = AppConfig::from_env()?;
            config.validate()?;

            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("Textbrief starting...");
            tracing::info!("Configuration loaded:");
            tracing::info!("  Host: {}", host);
            tracing::info!("  Port: {}", port);
            tracing::info!("  Model: {}", config.openai_model);

            if config.openai_api_key.is_empty() {
                tracing::warn!("OPENAI_API_KEY is not set; provider calls will fail");
            }

            textbrief_server::start_server(config).await?;
        }
        None => {
            // Default: start server with env/default config
            let config = AppConfig::from_env()?;
            config.validate()?;

            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("Textbrief starting with default configuration...");
            tracing::info!("  Bind address: {}", config.server_bind_address());
            tracing::info!("  Model: {}", config.openai_model);

            if config.openai_api_key.is_empty() {
                tracing::warn!("OPENAI_API_KEY is not set; provider calls will fail");
            }

            textbrief_server::start_server(config).await?;
        }
    }

    Ok(())
}
