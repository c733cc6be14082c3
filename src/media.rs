//! Offline media-file renaming.
//!
//! Normalizes the filenames under the site's media folders to sequential
//! names so the gallery markup can reference them predictably. Images
//! become `1.jpg`, `2.png`, ... and videos `video-1.mp4`, ... in
//! name-sorted order, keeping each file's original extension.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{info, warn};

pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "mov", "avi"];

/// Folder names scanned under the media base path.
pub const MEDIA_FOLDERS: [&str; 3] = ["carousel", "events", "nature"];

/// A single planned rename inside a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

fn numeric_stem() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+$").unwrap())
}

fn video_stem() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^video-\d+$").unwrap())
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

fn is_image(path: &Path) -> bool {
    extension(path).is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.as_str()))
}

fn is_video(path: &Path) -> bool {
    extension(path).is_some_and(|e| VIDEO_EXTENSIONS.contains(&e.as_str()))
}

/// True if the file already carries its canonical sequential name shape.
fn already_sequential(path: &Path) -> bool {
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    if is_image(path) {
        numeric_stem().is_match(stem)
    } else if is_video(path) {
        video_stem().is_match(stem)
    } else {
        false
    }
}

/// Plan the renames for one folder without touching the filesystem beyond
/// reading it. Files already in canonical form are skipped, as is any
/// rename whose target already exists as a different file.
pub fn plan_renames(folder: &Path) -> Result<Vec<Rename>> {
    if !folder.is_dir() {
        warn!(folder = %folder.display(), "Media folder not found, skipping");
        return Ok(Vec::new());
    }

    let mut images = Vec::new();
    let mut videos = Vec::new();
    let entries = fs::read_dir(folder)
        .with_context(|| format!("Failed to read media folder {}", folder.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if is_image(&path) {
            images.push(path);
        } else if is_video(&path) {
            videos.push(path);
        }
    }
    images.sort();
    videos.sort();

    let mut renames = Vec::new();
    collect_renames(folder, &images, |n, ext| format!("{n}.{ext}"), &mut renames);
    collect_renames(
        folder,
        &videos,
        |n, ext| format!("video-{n}.{ext}"),
        &mut renames,
    );
    Ok(renames)
}

fn collect_renames(
    folder: &Path,
    files: &[PathBuf],
    target_name: impl Fn(usize, &str) -> String,
    out: &mut Vec<Rename>,
) {
    let mut next = 1;
    for path in files {
        if already_sequential(path) {
            next += 1;
            continue;
        }
        let Some(ext) = extension(path) else {
            continue;
        };
        let target = folder.join(target_name(next, &ext));
        next += 1;
        if target == *path {
            continue;
        }
        if target.exists() {
            warn!(
                from = %path.display(),
                to = %target.display(),
                "Rename target already exists, skipping"
            );
            continue;
        }
        out.push(Rename {
            from: path.clone(),
            to: target,
        });
    }
}

/// Apply a planned batch of renames, logging each one.
pub fn apply_renames(renames: &[Rename]) -> Result<usize> {
    for rename in renames {
        fs::rename(&rename.from, &rename.to).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                rename.from.display(),
                rename.to.display()
            )
        })?;
        info!(
            from = %rename.from.display(),
            to = %rename.to.display(),
            "Renamed media file"
        );
    }
    Ok(renames.len())
}
