//! Interactive behavior engine for the Alios nonprofit site.
//!
//! Models the brochure page as an in-memory document and drives its
//! dynamic pieces: the hero carousel, the Greek/English language
//! switcher, the gallery filter and lightbox, the contact form, the
//! navigation chrome, and the optional social feeds.

pub mod carousel;
pub mod config;
pub mod contact;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod nav;
pub mod page;
pub mod social;
pub mod store;
