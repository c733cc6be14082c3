//! Photo/video gallery: category filtering and the image lightbox.
//!
//! Both are single-owner, synchronous controllers over the document's
//! gallery markup: items tagged with a category attribute, filter controls
//! tagged with a target category.

use crate::page::{Document, ElementKind};
use tracing::debug;

/// The filter target `"all"` shows every item.
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

#[derive(Debug)]
pub struct Gallery {
    active: Filter,
}

impl Gallery {
    pub fn new() -> Self {
        Self { active: Filter::All }
    }

    pub fn active_filter(&self) -> &Filter {
        &self.active
    }

    /// A filter control's click action: mark that control active (and only
    /// it), then show the items whose category matches.
    pub fn apply_filter(&mut self, doc: &mut Document, target: &str) {
        self.active = if target == FILTER_ALL {
            Filter::All
        } else {
            Filter::Category(target.to_string())
        };

        for element in doc.elements_mut() {
            if let Some(ft) = &element.filter_target {
                element.active = ft == target;
            } else if let Some(category) = &element.category {
                element.visible = match &self.active {
                    Filter::All => true,
                    Filter::Category(c) => category == c,
                };
            }
        }
        debug!(target, "gallery filter applied");
    }

    /// Video items have no playback integration; activation resolves to a
    /// placeholder notice key for the caller to display.
    pub fn activate_video(&self, doc: &Document, id: &str) -> Option<&'static str> {
        let element = doc.get(id)?;
        (element.kind == ElementKind::Video).then_some("gallery.video.placeholder")
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

/// The image the lightbox is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
}

/// Full-screen image viewer. Opening locks body scroll; any of the close
/// paths (close control, backdrop click, Escape) unlocks it again.
#[derive(Debug, Default)]
pub struct Lightbox {
    open: Option<LightboxImage>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn image(&self) -> Option<&LightboxImage> {
        self.open.as_ref()
    }

    /// A gallery image's click action. Non-image ids are ignored.
    pub fn open(&mut self, doc: &mut Document, image_id: &str) -> bool {
        let Some(element) = doc.get(image_id) else {
            return false;
        };
        if element.kind != ElementKind::Image {
            return false;
        }
        self.open = Some(LightboxImage {
            src: element.src.clone(),
            alt: element.alt.clone(),
        });
        doc.body_scroll_locked = true;
        true
    }

    pub fn close(&mut self, doc: &mut Document) {
        self.open = None;
        doc.body_scroll_locked = false;
    }

    /// Escape closes the lightbox when it is open; otherwise a no-op.
    pub fn handle_escape(&mut self, doc: &mut Document) -> bool {
        if self.is_open() {
            self.close(doc);
            true
        } else {
            false
        }
    }
}
