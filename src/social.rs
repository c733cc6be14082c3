//! Social media feed integration.
//!
//! Fetches recent Facebook and Instagram posts through their REST APIs when
//! enabled via static configuration; both are disabled by default in favor
//! of the embedded page-plugin widget. Every failure here degrades to the
//! fallback card, never to a page error.

use crate::config::{FacebookConfig, InstagramConfig};
use crate::i18n::{table, Language};
use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Fields requested from the Facebook Graph posts edge.
const FACEBOOK_FIELDS: &str = "message,created_time,full_picture,permalink_url,story";
/// Fields requested from the Instagram media edge.
const INSTAGRAM_FIELDS: &str = "id,caption,media_type,media_url,permalink,timestamp";

/// Post text is truncated to this many characters for the feed card.
pub const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum SocialError {
    #[error("social feed disabled or missing access token")]
    Disabled,
    #[error("social API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("social API request failed")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacebookPost {
    pub message: Option<String>,
    pub story: Option<String>,
    pub created_time: String,
    pub full_picture: Option<String>,
    pub permalink_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FacebookFeed {
    #[serde(default)]
    data: Vec<FacebookPost>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstagramPost {
    pub id: String,
    pub caption: Option<String>,
    pub media_type: Option<String>,
    pub media_url: Option<String>,
    pub permalink: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
struct InstagramFeed {
    #[serde(default)]
    data: Vec<InstagramPost>,
}

impl FacebookPost {
    /// Card text: the message, the story line, or a generic fallback.
    pub fn excerpt(&self, lang: Language) -> String {
        let text = self
            .message
            .as_deref()
            .or(self.story.as_deref())
            .unwrap_or_else(|| match lang {
                Language::GREEK => "Δημοσίευση από Facebook",
                _ => "Post from Facebook",
            });
        truncate_chars(text, EXCERPT_CHARS)
    }
}

impl InstagramPost {
    pub fn excerpt(&self, lang: Language) -> String {
        let text = self.caption.as_deref().unwrap_or(match lang {
            Language::GREEK => "Δημοσίευση από Instagram",
            _ => "Post from Instagram",
        });
        truncate_chars(text, EXCERPT_CHARS)
    }
}

/// Fetch recent posts from the Facebook Graph API.
pub async fn fetch_facebook_posts(
    client: &reqwest::Client,
    config: &FacebookConfig,
) -> Result<Vec<FacebookPost>, SocialError> {
    if !config.enabled {
        return Err(SocialError::Disabled);
    }
    let token = config
        .access_token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or(SocialError::Disabled)?;

    let url = format!(
        "{}/{}/{}/posts",
        config.api_base, config.api_version, config.page_id
    );
    let limit = config.post_limit.to_string();
    let response = client
        .get(&url)
        .query(&[
            ("access_token", token),
            ("fields", FACEBOOK_FIELDS),
            ("limit", limit.as_str()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(SocialError::Api { status, body });
    }

    let feed: FacebookFeed = response.json().await?;
    Ok(feed.data)
}

/// Fetch recent media from the Instagram Basic Display API.
pub async fn fetch_instagram_posts(
    client: &reqwest::Client,
    config: &InstagramConfig,
) -> Result<Vec<InstagramPost>, SocialError> {
    if !config.enabled {
        return Err(SocialError::Disabled);
    }
    let token = config
        .access_token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or(SocialError::Disabled)?;

    let url = format!("{}/me/media", config.api_base);
    let limit = config.post_limit.to_string();
    let response = client
        .get(&url)
        .query(&[
            ("fields", INSTAGRAM_FIELDS),
            ("access_token", token),
            ("limit", limit.as_str()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(SocialError::Api { status, body });
    }

    let feed: InstagramFeed = response.json().await?;
    Ok(feed.data)
}

/// The fallback card's text, shown when both feeds are disabled or empty.
pub fn fallback_notice(lang: Language) -> &'static str {
    table::resolve(lang, "social.follow").unwrap_or("")
}

/// Parse a social API timestamp. Facebook emits `+0000`-style offsets which
/// RFC 3339 parsing rejects, so both forms are tried.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z"))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Greek genitive month names, for absolute dates.
const GREEK_MONTHS: [&str; 12] = [
    "Ιανουαρίου",
    "Φεβρουαρίου",
    "Μαρτίου",
    "Απριλίου",
    "Μαΐου",
    "Ιουνίου",
    "Ιουλίου",
    "Αυγούστου",
    "Σεπτεμβρίου",
    "Οκτωβρίου",
    "Νοεμβρίου",
    "Δεκεμβρίου",
];

/// Render a post timestamp relative to `now`, in Greek: "Τώρα", minutes,
/// hours, or days ago inside a week, otherwise an absolute el-GR date.
pub fn format_relative_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - date).num_seconds().max(0);

    if seconds < 60 {
        return "Τώρα".to_string();
    }
    if seconds < 3600 {
        return format!("{} λεπτά πριν", seconds / 60);
    }
    if seconds < 86_400 {
        return format!("{} ώρες πριν", seconds / 3600);
    }
    if seconds < 604_800 {
        return format!("{} ημέρες πριν", seconds / 86_400);
    }

    let month = GREEK_MONTHS[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{cut}...")
}
