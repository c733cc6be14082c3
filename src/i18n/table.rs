//! Static translation tables and key-path resolution.
//!
//! Strings are organized as a nested mapping, one top-level entry per
//! supported language, addressed by dot-separated key paths ("nav.home",
//! "contact.form.submit"). Lookup is a left-to-right descent; a missing
//! intermediate key or a non-string terminal value resolves to `None`, never
//! an error.

use crate::i18n::Language;
use serde_json::{json, Value};
use std::sync::OnceLock;

/// Global translation tables (initialized lazily)
static TABLES: OnceLock<Value> = OnceLock::new();

fn tables() -> &'static Value {
    TABLES.get_or_init(|| {
        json!({
            "el": {
                "meta": {
                    "title": "Ο Άλιος – Πολιτιστικός Σύλλογος Κέρκυρας",
                    "description": "Ο Άλιος είναι ένας μη κερδοσκοπικός πολιτιστικός σύλλογος στην Κέρκυρα."
                },
                "nav": {
                    "home": "Αρχική",
                    "about": "Σχετικά με εμάς",
                    "gallery": "Φωτογραφίες",
                    "contact": "Επικοινωνία"
                },
                "hero": {
                    "title": "Καλώς ήρθατε στον Άλιο",
                    "subtitle": "Πολιτισμός, παράδοση και κοινότητα στην Κέρκυρα"
                },
                "gallery": {
                    "filter": {
                        "all": "Όλα",
                        "events": "Εκδηλώσεις",
                        "nature": "Φύση"
                    },
                    "video": {
                        "placeholder": "Η αναπαραγωγή βίντεο θα ανοίξει εδώ."
                    }
                },
                "contact": {
                    "form": {
                        "name": "Το όνομά σας",
                        "email": "Το email σας",
                        "message": "Το μήνυμά σας",
                        "submit": "Αποστολή",
                        "sending": "Αποστολή...",
                        "success": "Το μήνυμά σας στάλθηκε επιτυχώς! Θα επικοινωνήσουμε μαζί σας σύντομα.",
                        "error": "Υπήρξε ένα σφάλμα κατά την αποστολή. Παρακαλώ δοκιμάστε ξανά ή επικοινωνήστε μαζί μας απευθείας στο email."
                    },
                    "interest": {
                        "join": "Θέλω να γίνω μέλος",
                        "collaborate": "Θέλω να συνεργαστούμε"
                    }
                },
                "social": {
                    "follow": "Ακολουθήστε μας στα social media για να δείτε τις τελευταίες μας δραστηριότητες!"
                }
            },
            "en": {
                "meta": {
                    "title": "Alios – Cultural Association of Corfu",
                    "description": "Alios is a nonprofit cultural association in Corfu, Greece."
                },
                "nav": {
                    "home": "Home",
                    "about": "About us",
                    "gallery": "Gallery",
                    "contact": "Contact"
                },
                "hero": {
                    "title": "Welcome to Alios",
                    "subtitle": "Culture, tradition and community in Corfu"
                },
                "gallery": {
                    "filter": {
                        "all": "All",
                        "events": "Events",
                        "nature": "Nature"
                    },
                    "video": {
                        "placeholder": "Video playback would open here."
                    }
                },
                "contact": {
                    "form": {
                        "name": "Your name",
                        "email": "Your email",
                        "message": "Your message",
                        "submit": "Send",
                        "sending": "Sending...",
                        "success": "Your message was sent successfully! We will get back to you soon.",
                        "error": "Something went wrong while sending. Please try again or contact us directly by email."
                    },
                    "interest": {
                        "join": "I want to become a member",
                        "collaborate": "I want to collaborate"
                    }
                },
                "social": {
                    "follow": "Follow us on social media to see our latest activities!"
                }
            }
        })
    })
}

/// Resolve a dot-separated key path against the table for `lang`.
///
/// # Returns
/// The localized string, or `None` when any path segment is missing or the
/// terminal value is not a string.
pub fn resolve(lang: Language, key: &str) -> Option<&'static str> {
    let mut node = tables().get(lang.code())?;
    for segment in key.split('.') {
        node = node.as_object()?.get(segment)?;
    }
    node.as_str()
}

/// All leaf key paths defined for a language, in table order.
///
/// Used to check that the two tables stay in sync.
#[cfg(test)]
pub fn key_paths(lang: Language) -> Vec<String> {
    fn walk(prefix: &str, node: &Value, out: &mut Vec<String>) {
        match node {
            Value::Object(map) => {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&path, v, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    let mut out = Vec::new();
    if let Some(root) = tables().get(lang.code()) {
        walk("", root, &mut out);
    }
    out
}
