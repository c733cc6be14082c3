//! Navigation chrome: header scroll state, the mobile menu, and anchor-link
//! scrolling.

use crate::page::Document;

/// The header gains its `scrolled` state past this page offset.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;
/// Gap kept between the header's bottom edge and a scrolled-to anchor.
pub const ANCHOR_MARGIN_PX: f64 = 20.0;

#[derive(Debug, Default)]
pub struct NavMenu {
    open: bool,
    scrolled: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Scroll handler: toggles the header's condensed state.
    pub fn on_scroll(&mut self, doc: &mut Document, page_offset: f64) {
        self.scrolled = page_offset > SCROLL_THRESHOLD_PX;
        if let Some(header) = doc.get_mut("header") {
            header.active = self.scrolled;
        }
    }

    /// The hamburger control's click action. An open menu locks body scroll.
    pub fn toggle(&mut self, doc: &mut Document) {
        if self.open {
            self.close(doc);
        } else {
            self.open = true;
            doc.body_scroll_locked = true;
            self.sync(doc);
        }
    }

    /// Close the menu and release the scroll lock. Fired by a menu link
    /// click and by clicks outside the menu.
    pub fn close(&mut self, doc: &mut Document) {
        self.open = false;
        doc.body_scroll_locked = false;
        self.sync(doc);
    }

    fn sync(&self, doc: &mut Document) {
        if let Some(menu) = doc.get_mut("nav-menu") {
            menu.active = self.open;
        }
        if let Some(toggle) = doc.get_mut("menu-toggle") {
            toggle.active = self.open;
        }
    }
}

/// Extract the anchor id from an href containing a hash fragment, dropping
/// any query suffix tucked behind the hash (`about.html#join?interest=join`
/// yields `join`).
pub fn anchor_target(href: &str) -> Option<&str> {
    let (_, fragment) = href.split_once('#')?;
    let id = fragment.split('?').next().unwrap_or("");
    (!id.is_empty()).then_some(id)
}

/// Scroll destination for an anchor: the target's position minus the sticky
/// header and the fixed margin.
pub fn scroll_position(target_top: f64, page_offset: f64, header_height: f64) -> f64 {
    target_top + page_offset - header_height - ANCHOR_MARGIN_PX
}
