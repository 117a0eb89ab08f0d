use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "cb")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve,
    /// Print the OpenAPI document and exit.
    Openapi,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Serve => {
            init_tracing();
            cb_serve::openapi::ensure_initialized();
            let db_path = std::env::var("COLLARBOARD_DB_PATH")
                .unwrap_or_else(|_| ".collarboard/board.db".to_string());
            if let Some(parent) = Path::new(&db_path).parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let port = std::env::var("COLLARBOARD_PORT")
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(4820);
            let admin_token = std::env::var("COLLARBOARD_ADMIN_TOKEN")
                .unwrap_or_else(|_| "admin".to_string());
            let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port);
            let state = cb_serve::AppState {
                db_path,
                admin_token,
            };
            if let Err(err) = cb_serve::serve(state, addr).await {
                tracing::error!(%err, "serve error");
            }
        }
        Command::Openapi => {
            let spec = cb_serve::openapi::generate_spec();
            println!("{spec}");
        }
    }
}
