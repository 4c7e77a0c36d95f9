use nearby::app_config::AppConfig;
use nearby::directory::Directory;
use nearby::domain::{GeoPoint, SupportOrg};
use nearby::location_input::watch_stdin;
use nearby::resource_loader::load_support_orgs_from;
use tokio::sync::watch;
use tokio::task;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let orgs = load_support_orgs_from(config.directory().path(), config.directory().extension()).await?;
    let mut directory = Directory::new(orgs, config.observer(), config.ranking().sort_key());
    info!("✅  Ranked {} support organization(s) from {}", directory.len(), directory.observer());
    log_ranking(&directory, config.core().log_top());

    let (tx, rx) = watch::channel::<GeoPoint>(directory.observer());
    task::spawn(async move {
        watch_stdin(tx).await;
    });
    info!("🔥 {} is up and running, enter a location as '<latitude>,<longitude>'", env!("CARGO_PKG_NAME"));

    directory.listen(rx).await;
    log_ranking(&directory, config.core().log_top());

    Ok(())
}

fn log_ranking(directory: &Directory<SupportOrg>, top: usize) {
    for ranked in directory.ranked().iter().take(top) {
        let org = ranked.resource();
        info!("  {:>6} km  {} ({})", ranked.distance_km(), org.name, org.org_type);
    }
}
