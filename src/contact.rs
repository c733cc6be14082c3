//! Contact form controller.
//!
//! Submission delegates to an external form backend (Formspree-style): a
//! form-encoded POST expecting a JSON-capable response. Any network failure
//! or non-success status shows the localized error message and re-enables
//! the form for a manual retry; nothing is retried automatically.

use crate::i18n::{table, Language};
use reqwest::header::ACCEPT;
use tracing::{info, warn};

/// Known values of the `interest` pre-fill parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interest {
    Join,
    Collaborate,
}

impl Interest {
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "join" => Some(Self::Join),
            "collaborate" => Some(Self::Collaborate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::Collaborate => "collaborate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Success,
    Error,
}

#[derive(Debug)]
pub struct ContactForm {
    /// POST target, from the form element's own configuration
    action: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub interest: Option<Interest>,
    /// Whether `interest` came from a URL pre-fill (preserved across reset)
    prefilled: bool,
    /// True while a submission is in flight; the submit control is disabled
    submitting: bool,
    status: Option<FormStatus>,
}

impl ContactForm {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            name: String::new(),
            email: String::new(),
            message: String::new(),
            interest: None,
            prefilled: false,
            submitting: false,
            status: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<FormStatus> {
        self.status
    }

    /// The submit control's caption: the "sending" string while a
    /// submission is in flight, the ordinary submit label otherwise.
    pub fn submit_label(&self, lang: Language) -> &'static str {
        let key = if self.submitting {
            "contact.form.sending"
        } else {
            "contact.form.submit"
        };
        table::resolve(lang, key).unwrap_or("")
    }

    /// The localized status message to display, if a submission has settled.
    pub fn status_message(&self, lang: Language) -> Option<&'static str> {
        match self.status? {
            FormStatus::Success => table::resolve(lang, "contact.form.success"),
            FormStatus::Error => table::resolve(lang, "contact.form.error"),
        }
    }

    /// Pre-fill the interest selection from the page URL, if present.
    pub fn prefill_from_url(&mut self, url: &str) {
        if let Some(interest) = interest_from_url(url) {
            self.interest = Some(interest);
            self.prefilled = true;
        }
    }

    /// Submit the form. The submit control is disabled for exactly the
    /// duration of this call: `submitting` is cleared in the same tick the
    /// response settles, success or failure.
    pub async fn submit(&mut self, client: &reqwest::Client, lang: Language) -> FormStatus {
        self.submitting = true;
        self.status = None;

        let mut fields: Vec<(&str, String)> = vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("message", self.message.clone()),
        ];
        if let Some(interest) = self.interest {
            fields.push(("interest", interest.as_str().to_string()));
        }
        // Replies from the form backend go to the sender
        if !self.email.is_empty() {
            fields.push(("_replyto", self.email.clone()));
        }

        let result = client
            .post(&self.action)
            .header(ACCEPT, "application/json")
            .form(&fields)
            .send()
            .await;

        let status = match result {
            Ok(response) if response.status().is_success() => {
                info!("contact form submitted");
                FormStatus::Success
            }
            Ok(response) => {
                warn!(status = %response.status(), "contact form rejected by backend");
                FormStatus::Error
            }
            Err(e) => {
                warn!(error = %e, "contact form submission failed");
                FormStatus::Error
            }
        };

        if status == FormStatus::Success {
            self.reset();
        }
        self.status = Some(status);
        self.submitting = false;
        status
    }

    /// Clear the fields, preserving a URL-pre-filled interest selection.
    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        if !self.prefilled {
            self.interest = None;
        }
    }

}

/// Extract the `interest` pre-fill parameter from a page URL.
///
/// The parameter may sit in the ordinary query string, or in a query tucked
/// behind the hash fragment (`contact.html#form?interest=join`). The plain
/// query wins when both are present.
pub fn interest_from_url(url: &str) -> Option<Interest> {
    let (head, fragment) = match url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (url, None),
    };

    let from_query = head.split_once('?').and_then(|(_, q)| param(q, "interest"));
    let from_hash = fragment
        .and_then(|f| f.split_once('?'))
        .and_then(|(_, q)| param(q, "interest"));

    from_query
        .or(from_hash)
        .as_deref()
        .and_then(Interest::from_param)
}

fn param(query: &str, key: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then(|| v.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== URL Pre-fill Tests ====================

    #[test]
    fn test_interest_from_plain_query() {
        assert_eq!(
            interest_from_url("https://example.org/contact.html?interest=join"),
            Some(Interest::Join)
        );
    }

    #[test]
    fn test_interest_from_hash_query() {
        assert_eq!(
            interest_from_url("https://example.org/index.html#contact?interest=collaborate"),
            Some(Interest::Collaborate)
        );
    }

    #[test]
    fn test_plain_query_wins_over_hash_query() {
        assert_eq!(
            interest_from_url("https://example.org/c?interest=join#f?interest=collaborate"),
            Some(Interest::Join)
        );
    }

    #[test]
    fn test_unknown_interest_value_is_ignored() {
        assert_eq!(interest_from_url("https://example.org/?interest=spam"), None);
        assert_eq!(interest_from_url("https://example.org/#x?interest="), None);
    }

    #[test]
    fn test_url_without_interest() {
        assert_eq!(interest_from_url("https://example.org/contact.html"), None);
        assert_eq!(interest_from_url("https://example.org/#contact"), None);
    }

    #[test]
    fn test_prefill_marks_interest_preserved() {
        let mut form = ContactForm::new("https://example.org/f");
        form.prefill_from_url("https://example.org/?interest=join");

        assert_eq!(form.interest, Some(Interest::Join));

        form.name = "Μαρία".to_string();
        form.reset();
        assert!(form.name.is_empty());
        // Pre-filled interest survives the reset
        assert_eq!(form.interest, Some(Interest::Join));
    }

    #[test]
    fn test_reset_clears_manual_interest() {
        let mut form = ContactForm::new("https://example.org/f");
        form.interest = Some(Interest::Collaborate);
        form.reset();
        assert_eq!(form.interest, None);
    }

    // ==================== Message Tests ====================

    #[test]
    fn test_submit_label_swaps_while_in_flight() {
        let mut form = ContactForm::new("https://example.org/f");
        assert_eq!(form.submit_label(Language::GREEK), "Αποστολή");
        assert_eq!(form.submit_label(Language::ENGLISH), "Send");

        form.submitting = true;
        assert_eq!(form.submit_label(Language::GREEK), "Αποστολή...");
        assert_eq!(form.submit_label(Language::ENGLISH), "Sending...");
    }


    #[test]
    fn test_status_messages_resolve_for_both_languages() {
        for lang in [Language::GREEK, Language::ENGLISH] {
            assert!(table::resolve(lang, "contact.form.success").is_some());
            assert!(table::resolve(lang, "contact.form.error").is_some());
        }
    }

    #[test]
    fn test_no_status_message_before_submission() {
        let form = ContactForm::new("https://example.org/f");
        assert_eq!(form.status_message(Language::GREEK), None);
    }
}
