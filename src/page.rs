//! In-memory model of the brochure page.
//!
//! The document is a flat list of identified elements plus a handful of
//! page-level attributes. Controllers (carousel, switcher, gallery, nav)
//! mutate it; nothing here renders. Element ids mirror the markup the site
//! ships with, so `default_document` doubles as the page contract.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    TextInput,
    SubmitInput,
    SelectOption,
    Image,
    Video,
    Button,
}

/// One identified element of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    pub text: String,
    pub value: String,
    pub placeholder: String,
    /// Dot-path into the translation tables for the element's text (or
    /// value, for submit controls)
    pub translate_key: Option<String>,
    /// Dot-path for the placeholder of text-entry controls
    pub placeholder_key: Option<String>,
    /// Gallery item category
    pub category: Option<String>,
    /// Filter control target category
    pub filter_target: Option<String>,
    pub src: String,
    pub alt: String,
    /// CSS transform, kept as the literal string the markup would carry
    pub transform: String,
    pub visible: bool,
    pub active: bool,
}

impl Element {
    fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            text: String::new(),
            value: String::new(),
            placeholder: String::new(),
            translate_key: None,
            placeholder_key: None,
            category: None,
            filter_target: None,
            src: String::new(),
            alt: String::new(),
            transform: String::new(),
            visible: true,
            active: false,
        }
    }

    /// Translatable text element.
    pub fn text(id: impl Into<String>, key: impl Into<String>, text: impl Into<String>) -> Self {
        let mut el = Self::new(id, ElementKind::Text);
        el.translate_key = Some(key.into());
        el.text = text.into();
        el
    }

    /// Untranslated structural element (containers, status areas).
    pub fn block(id: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Text)
    }

    /// Text-entry control, translated only through its placeholder.
    pub fn text_input(
        id: impl Into<String>,
        placeholder_key: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        let mut el = Self::new(id, ElementKind::TextInput);
        el.placeholder_key = Some(placeholder_key.into());
        el.placeholder = placeholder.into();
        el
    }

    /// Submit control, translated through its value.
    pub fn submit_input(
        id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut el = Self::new(id, ElementKind::SubmitInput);
        el.translate_key = Some(key.into());
        el.value = value.into();
        el
    }

    pub fn select_option(
        id: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let mut el = Self::new(id, ElementKind::SelectOption);
        el.translate_key = Some(key.into());
        el.text = text.into();
        el
    }

    pub fn button(id: impl Into<String>, text: impl Into<String>) -> Self {
        let mut el = Self::new(id, ElementKind::Button);
        el.text = text.into();
        el
    }

    pub fn image(id: impl Into<String>, src: impl Into<String>, alt: impl Into<String>) -> Self {
        let mut el = Self::new(id, ElementKind::Image);
        el.src = src.into();
        el.alt = alt.into();
        el
    }

    /// Gallery image, tagged with its filter category.
    pub fn gallery_photo(
        id: impl Into<String>,
        category: impl Into<String>,
        src: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        let mut el = Self::image(id, src, alt);
        el.category = Some(category.into());
        el
    }

    /// Gallery video, tagged with its filter category.
    pub fn gallery_video(
        id: impl Into<String>,
        category: impl Into<String>,
        src: impl Into<String>,
    ) -> Self {
        let mut el = Self::new(id, ElementKind::Video);
        el.category = Some(category.into());
        el.src = src.into();
        el
    }

    /// Gallery filter control, targeting one category (or `"all"`).
    pub fn filter_button(
        id: impl Into<String>,
        target: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let mut el = Self::button(id, text);
        el.filter_target = Some(target.into());
        el.translate_key = Some(key.into());
        el
    }
}

/// The page: its elements and document-level attributes.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    /// Declared language attribute ("el" or "en")
    pub lang: String,
    pub title: String,
    pub title_key: Option<String>,
    pub meta_description: String,
    pub meta_description_key: Option<String>,
    /// Body scrolling is locked while the lightbox or mobile menu is open
    pub body_scroll_locked: bool,
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            lang: "el".to_string(),
            title: String::new(),
            title_key: None,
            meta_description: String::new(),
            meta_description_key: None,
            body_scroll_locked: false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let pos = self.elements.iter().position(|el| el.id == id)?;
        Some(self.elements.remove(pos))
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut()
    }

    /// Ids of all elements whose id starts with `prefix`, in document order.
    pub fn ids_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|el| el.id.starts_with(prefix))
            .map(|el| el.id.clone())
            .collect()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// The site's page as shipped: Greek text, three hero slides, the gallery
/// with its two categories, and the contact form.
pub fn default_document() -> Document {
    let mut doc = Document::new();
    doc.title = "Ο Άλιος – Πολιτιστικός Σύλλογος Κέρκυρας".to_string();
    doc.title_key = Some("meta.title".to_string());
    doc.meta_description =
        "Ο Άλιος είναι ένας μη κερδοσκοπικός πολιτιστικός σύλλογος στην Κέρκυρα.".to_string();
    doc.meta_description_key = Some("meta.description".to_string());

    // Header and navigation
    doc.push(Element::block("header"));
    doc.push(Element::block("nav-menu"));
    doc.push(Element::button("menu-toggle", ""));
    doc.push(Element::text("nav-home", "nav.home", "Αρχική"));
    doc.push(Element::text("nav-about", "nav.about", "Σχετικά με εμάς"));
    doc.push(Element::text("nav-gallery", "nav.gallery", "Φωτογραφίες"));
    doc.push(Element::text("nav-contact", "nav.contact", "Επικοινωνία"));
    doc.push(Element::button("language-switcher", "EN"));

    // Hero and carousel
    doc.push(Element::text("hero-title", "hero.title", "Καλώς ήρθατε στον Άλιο"));
    doc.push(Element::text(
        "hero-subtitle",
        "hero.subtitle",
        "Πολιτισμός, παράδοση και κοινότητα στην Κέρκυρα",
    ));
    doc.push(Element::block("carousel-track"));
    doc.push(Element::image("carousel-slide-0", "media/carousel/1.jpg", "Άλιος"));
    doc.push(Element::image("carousel-slide-1", "media/carousel/2.jpg", "Άλιος"));
    doc.push(Element::image("carousel-slide-2", "media/carousel/3.jpg", "Άλιος"));
    doc.push(Element::button("carousel-prev", "‹"));
    doc.push(Element::button("carousel-next", "›"));

    // Gallery filters and items
    let mut all = Element::filter_button("filter-all", "all", "gallery.filter.all", "Όλα");
    all.active = true;
    doc.push(all);
    doc.push(Element::filter_button(
        "filter-events",
        "events",
        "gallery.filter.events",
        "Εκδηλώσεις",
    ));
    doc.push(Element::filter_button(
        "filter-nature",
        "nature",
        "gallery.filter.nature",
        "Φύση",
    ));
    doc.push(Element::gallery_photo("photo-1", "events", "media/about/1.jpg", "Εκδήλωση"));
    doc.push(Element::gallery_photo("photo-2", "events", "media/about/2.jpg", "Εκδήλωση"));
    doc.push(Element::gallery_photo("photo-3", "nature", "media/about/3.jpg", "Φύση"));
    doc.push(Element::gallery_photo("photo-4", "nature", "media/about/4.jpg", "Φύση"));
    doc.push(Element::gallery_video("video-1", "events", "media/about/video-1.mp4"));

    // Contact form
    doc.push(Element::text_input("contact-name", "contact.form.name", "Το όνομά σας"));
    doc.push(Element::text_input("contact-email", "contact.form.email", "Το email σας"));
    doc.push(Element::text_input(
        "contact-message",
        "contact.form.message",
        "Το μήνυμά σας",
    ));
    doc.push(Element::select_option(
        "contact-interest-join",
        "contact.interest.join",
        "Θέλω να γίνω μέλος",
    ));
    doc.push(Element::select_option(
        "contact-interest-collaborate",
        "contact.interest.collaborate",
        "Θέλω να συνεργαστούμε",
    ));
    doc.push(Element::submit_input("contact-submit", "contact.form.submit", "Αποστολή"));
    doc.push(Element::block("form-message"));

    // Social section
    doc.push(Element::text(
        "social-follow",
        "social.follow",
        "Ακολουθήστε μας στα social media για να δείτε τις τελευταίες μας δραστηριότητες!",
    ));

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Document Tests ====================

    #[test]
    fn test_get_and_remove() {
        let mut doc = Document::new();
        doc.push(Element::button("b", "x"));

        assert!(doc.get("b").is_some());
        assert!(doc.get_mut("b").is_some());
        assert!(doc.remove("b").is_some());
        assert!(doc.get("b").is_none());
        assert!(doc.remove("b").is_none());
    }

    #[test]
    fn test_ids_with_prefix_preserves_order() {
        let mut doc = Document::new();
        doc.push(Element::button("dot-0", ""));
        doc.push(Element::button("other", ""));
        doc.push(Element::button("dot-1", ""));

        assert_eq!(doc.ids_with_prefix("dot-"), vec!["dot-0", "dot-1"]);
        assert!(doc.ids_with_prefix("nope-").is_empty());
    }

    // ==================== Default Page Tests ====================

    #[test]
    fn test_default_document_ids_are_unique() {
        let doc = default_document();
        let mut ids: Vec<_> = doc.elements().map(|el| el.id.clone()).collect();
        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_default_document_is_greek() {
        let doc = default_document();
        assert_eq!(doc.lang, "el");
        assert_eq!(doc.get("nav-home").unwrap().text, "Αρχική");
        assert_eq!(doc.get("language-switcher").unwrap().text, "EN");
        assert_eq!(doc.get("contact-submit").unwrap().value, "Αποστολή");
    }

    #[test]
    fn test_default_document_carousel_markup() {
        let doc = default_document();
        assert_eq!(doc.ids_with_prefix("carousel-slide-").len(), 3);
        assert!(doc.get("carousel-track").is_some());
        assert!(doc.get("carousel-prev").is_some());
        assert!(doc.get("carousel-next").is_some());
        // Dots are only created once a binding attaches
        assert!(doc.ids_with_prefix("carousel-dot-").is_empty());
    }

    #[test]
    fn test_default_document_gallery_tagging() {
        let doc = default_document();
        assert_eq!(doc.get("filter-all").unwrap().filter_target.as_deref(), Some("all"));
        assert!(doc.get("filter-all").unwrap().active);
        assert!(!doc.get("filter-events").unwrap().active);
        assert_eq!(doc.get("photo-1").unwrap().category.as_deref(), Some("events"));
        assert_eq!(doc.get("video-1").unwrap().kind, ElementKind::Video);
        assert!(doc.elements().filter(|el| el.category.is_some()).all(|el| el.visible));
    }

    #[test]
    fn test_default_document_every_key_resolves() {
        use crate::i18n::{table, Language};
        let doc = default_document();
        for el in doc.elements() {
            for key in [&el.translate_key, &el.placeholder_key].into_iter().flatten() {
                for lang in [Language::GREEK, Language::ENGLISH] {
                    assert!(
                        table::resolve(lang, key).is_some(),
                        "key {key} of {} missing for {}",
                        el.id,
                        lang.code()
                    );
                }
            }
        }
    }
}
