use clap::{Parser, Subcommand};

mod commands;
mod util;

const DEFAULT_UPSTREAM_BASE: &str =
    "https://yunus-freefire-api.onrender.com/get_player_personal_show";

#[derive(Parser)]
#[command(
    name = "scout",
    version,
    about = "Player profile lookup — query the upstream API and print a resolved summary"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a player and print the resolved summary
    Check {
        /// Player identifier (digits)
        uid: String,
        /// Two-letter server code
        #[arg(long, env = "DEFAULT_SERVER", default_value = "sg")]
        server: String,
        /// Upstream API base URL
        #[arg(long, env = "UPSTREAM_API_BASE", default_value = DEFAULT_UPSTREAM_BASE)]
        api_base: String,
    },
    /// Check a running bot service's health
    Health {
        /// Bot service base URL
        #[arg(long, env = "SCOUT_API_URL", default_value = "http://localhost:8000")]
        api_url: String,
    },
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check {
            uid,
            server,
            api_base,
        } => commands::check::run(&api_base, &uid, &server).await,
        Commands::Health { api_url } => commands::health::run(&api_url).await,
    };
    std::process::exit(exit_code);
}
