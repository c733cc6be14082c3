use alios_site::config::Config;
use alios_site::media;
use anyhow::Result;
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rename_media=info".parse()?),
        )
        .init();

    info!("Starting media file rename pass");

    // Load config from environment
    let config = Config::from_env()?;
    let base = Path::new(&config.media_base_path);

    let mut total = 0;
    for folder in media::MEDIA_FOLDERS {
        let path = base.join(folder);
        let plan = media::plan_renames(&path)?;
        if plan.is_empty() {
            info!(folder, "Nothing to rename");
            continue;
        }
        total += media::apply_renames(&plan)?;
    }

    info!("✓ Renamed {} media files under {}", total, base.display());
    Ok(())
}
