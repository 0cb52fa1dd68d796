use anyhow::Result;
use clap::{Parser, Subcommand};

/// lazykitchen - recipe recommendations from what is in your fridge
#[derive(Parser)]
#[command(name = "lazykitchen")]
#[command(about = "Ingredient input, recipe recommendations and a cooking assistant", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Validate configuration and built-in catalog, then exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = lazykitchen::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    lazykitchen::observability::init_observability(
        "lazykitchen",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => lazykitchen::server::serve(config, host, port).await,
        Commands::Check => lazykitchen::server::check(&config),
    }
}
