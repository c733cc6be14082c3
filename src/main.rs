use alios_site::carousel::{run_autoplay, CarouselBinding};
use alios_site::config::Config;
use alios_site::contact::ContactForm;
use alios_site::gallery::{Gallery, Lightbox};
use alios_site::i18n::{LanguageSwitcher, TranslationMetrics};
use alios_site::nav::NavMenu;
use alios_site::page::default_document;
use alios_site::social;
use alios_site::store::PreferenceStore;
use anyhow::Result;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("alios_site=info".parse()?),
        )
        .init();

    info!("Starting Alios site engine");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Build the page and restore the visitor's language preference
    let store = PreferenceStore::open(&config.preference_path);
    let mut doc = default_document();
    let switcher = LanguageSwitcher::initialize(&mut doc, &store);
    info!(lang = switcher.current().code(), "Language applied");

    // Page controllers
    let _gallery = Gallery::new();
    let _lightbox = Lightbox::new();
    let _nav = NavMenu::new();

    let _contact = match &config.form_endpoint {
        Some(endpoint) => Some(ContactForm::new(endpoint.clone())),
        None => {
            info!("No form endpoint configured, contact form disabled");
            None
        }
    };

    // Social feeds: fetch when an API is enabled, otherwise the page keeps
    // the embedded plugin or the fallback card
    if config.social.use_page_plugin {
        info!("Social feed using embedded page plugin");
    } else {
        let client = reqwest::Client::new();
        match social::fetch_facebook_posts(&client, &config.social.facebook).await {
            Ok(posts) => info!(count = posts.len(), "Fetched Facebook posts"),
            Err(social::SocialError::Disabled) => {
                info!("Facebook feed disabled, showing fallback card")
            }
            Err(err) => warn!(error = %err, "Facebook feed unavailable"),
        }
        match social::fetch_instagram_posts(&client, &config.social.instagram).await {
            Ok(posts) => info!(count = posts.len(), "Fetched Instagram posts"),
            Err(social::SocialError::Disabled) => {
                info!("Instagram feed disabled, showing fallback card")
            }
            Err(err) => warn!(error = %err, "Instagram feed unavailable"),
        }
    }

    // Hero carousel with autoplay
    match CarouselBinding::for_document(&mut doc, Instant::now()) {
        Some(binding) => {
            let shared = Arc::new(Mutex::new((doc, binding)));
            tokio::spawn(run_autoplay(Arc::clone(&shared)));
            info!("Autoplay running, press Ctrl+C to stop");
            tokio::signal::ctrl_c().await?;
        }
        None => {
            info!("Page has no carousel, nothing to drive");
        }
    }

    let report = TranslationMetrics::global().report();
    info!(
        applied = report.applied,
        missing_keys = report.missing_keys,
        invalid_languages = report.invalid_languages,
        hit_rate = format!("{:.1}%", report.hit_rate),
        "Translation metrics"
    );
    info!("Shutting down");
    Ok(())
}
