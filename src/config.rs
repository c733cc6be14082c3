use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // Contact form backend (Formspree-style endpoint); form submission is
    // skipped when unset
    pub form_endpoint: Option<String>,

    // Language preference storage
    pub preference_path: String,

    // Media assets root (rename utility)
    pub media_base_path: String,

    // Social feeds
    pub social: SocialConfig,
}

#[derive(Debug, Clone)]
pub struct SocialConfig {
    pub facebook: FacebookConfig,
    pub instagram: InstagramConfig,

    // When true (the default), the embedded page-plugin widget is used and
    // no API calls are made
    pub use_page_plugin: bool,
}

#[derive(Debug, Clone)]
pub struct FacebookConfig {
    pub enabled: bool,
    pub page_id: String,
    pub access_token: Option<String>,
    pub api_version: String,
    pub api_base: String,
    pub post_limit: u32,
}

#[derive(Debug, Clone)]
pub struct InstagramConfig {
    pub enabled: bool,
    pub access_token: Option<String>,
    pub api_base: String,
    pub post_limit: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            form_endpoint: std::env::var("FORM_ENDPOINT").ok().filter(|v| !v.is_empty()),

            preference_path: std::env::var("PREFERENCE_PATH")
                .unwrap_or_else(|_| "data/preferences.json".to_string()),

            media_base_path: std::env::var("MEDIA_BASE_PATH")
                .unwrap_or_else(|_| "./media".to_string()),

            social: SocialConfig {
                facebook: FacebookConfig {
                    enabled: env_flag("FACEBOOK_ENABLED", false),
                    page_id: std::env::var("FACEBOOK_PAGE_ID")
                        .unwrap_or_else(|_| "corfuallios".to_string()),
                    access_token: std::env::var("FACEBOOK_ACCESS_TOKEN")
                        .ok()
                        .filter(|v| !v.is_empty()),
                    api_version: std::env::var("FACEBOOK_API_VERSION")
                        .unwrap_or_else(|_| "v18.0".to_string()),
                    api_base: std::env::var("GRAPH_API_BASE")
                        .unwrap_or_else(|_| "https://graph.facebook.com".to_string()),
                    post_limit: env_u32("FACEBOOK_POST_LIMIT", 5),
                },
                instagram: InstagramConfig {
                    enabled: env_flag("INSTAGRAM_ENABLED", false),
                    access_token: std::env::var("INSTAGRAM_ACCESS_TOKEN")
                        .ok()
                        .filter(|v| !v.is_empty()),
                    api_base: std::env::var("INSTAGRAM_API_BASE")
                        .unwrap_or_else(|_| "https://graph.instagram.com".to_string()),
                    post_limit: env_u32("INSTAGRAM_POST_LIMIT", 5),
                },
                use_page_plugin: env_flag("USE_PAGE_PLUGIN", true),
            },
        })
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            "FORM_ENDPOINT",
            "PREFERENCE_PATH",
            "MEDIA_BASE_PATH",
            "FACEBOOK_ENABLED",
            "FACEBOOK_PAGE_ID",
            "FACEBOOK_ACCESS_TOKEN",
            "FACEBOOK_API_VERSION",
            "GRAPH_API_BASE",
            "FACEBOOK_POST_LIMIT",
            "INSTAGRAM_ENABLED",
            "INSTAGRAM_ACCESS_TOKEN",
            "INSTAGRAM_API_BASE",
            "INSTAGRAM_POST_LIMIT",
            "USE_PAGE_PLUGIN",
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_with_empty_env() {
        clear_env();
        let config = Config::from_env().expect("config");

        assert_eq!(config.form_endpoint, None);
        assert_eq!(config.preference_path, "data/preferences.json");
        assert_eq!(config.media_base_path, "./media");
        assert!(!config.social.facebook.enabled);
        assert!(!config.social.instagram.enabled);
        assert!(config.social.use_page_plugin);
        assert_eq!(config.social.facebook.api_version, "v18.0");
        assert_eq!(config.social.facebook.post_limit, 5);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var("FORM_ENDPOINT", "https://formspree.io/f/abc123");
        std::env::set_var("FACEBOOK_ENABLED", "true");
        std::env::set_var("FACEBOOK_ACCESS_TOKEN", "token-123");
        std::env::set_var("FACEBOOK_POST_LIMIT", "3");
        std::env::set_var("USE_PAGE_PLUGIN", "false");

        let config = Config::from_env().expect("config");

        assert_eq!(
            config.form_endpoint.as_deref(),
            Some("https://formspree.io/f/abc123")
        );
        assert!(config.social.facebook.enabled);
        assert_eq!(config.social.facebook.access_token.as_deref(), Some("token-123"));
        assert_eq!(config.social.facebook.post_limit, 3);
        assert!(!config.social.use_page_plugin);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_values_fall_back_to_defaults() {
        clear_env();
        std::env::set_var("FACEBOOK_ENABLED", "yes please");
        std::env::set_var("FACEBOOK_POST_LIMIT", "many");
        std::env::set_var("FORM_ENDPOINT", "");

        let config = Config::from_env().expect("config");

        assert!(!config.social.facebook.enabled);
        assert_eq!(config.social.facebook.post_limit, 5);
        assert_eq!(config.form_endpoint, None);

        clear_env();
    }
}
