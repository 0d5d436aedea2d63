mod bootstrap;
mod routes;
mod server;

use anyhow::Result;
use poddash_core::settings::Settings;
use poddash_data::loader::load_dataset;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("poddash v{} starting", env!("CARGO_PKG_VERSION"));

    // One-shot load; any data error here is fatal and the server never binds.
    let dataset = load_dataset(&settings.data_file)?;
    tracing::info!(
        "Loaded {} records across {} episodes from {}",
        dataset.len(),
        dataset.episode_titles.len(),
        settings.data_file.display()
    );

    let state = server::AppState::new(dataset);
    let addr = settings.bind_addr()?;

    server::run(addr, state).await
}
