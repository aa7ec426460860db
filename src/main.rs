use std::sync::Arc;

use clap::Parser;

use moodmix::{
    config::Config,
    error,
    server::{self, AppState},
    spotify::SpotifyClient,
};

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
)]
struct Cli {
    /// Address to listen on (overrides SERVER_ADDRESS)
    #[clap(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration: {}", e),
    };
    if let Some(address) = cli.address {
        config.server_addr = address;
    }

    let spotify = match SpotifyClient::new(config.clone()) {
        Ok(client) => client,
        Err(e) => error!("Cannot build Spotify client: {}", e),
    };

    let state = Arc::new(AppState::new(config, spotify));
    server::start_server(state).await;
}
