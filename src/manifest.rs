use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Component, Path};

use crate::constants::manifest::ICON_MIME;
use crate::generator::IconFile;

/// One entry of a web app manifest `icons` array
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime: String,
}

#[derive(Serialize)]
struct ManifestFragment<'a> {
    icons: &'a [ManifestIcon],
}

/// Build manifest entries for a generated icon set. `src` is the URL path of each icon
/// relative to `public_root`, which is the directory served at `/`.
pub fn manifest_icons(icons: &[IconFile], public_root: &Path) -> Vec<ManifestIcon> {
    icons
        .iter()
        .map(|icon| ManifestIcon {
            src: url_path(&icon.path, public_root),
            sizes: format!("{}x{}", icon.size, icon.size),
            mime: ICON_MIME.to_string(),
        })
        .collect()
}

/// Pretty-printed `{"icons": [...]}` fragment for pasting into `manifest.json`
pub fn manifest_json(icons: &[IconFile], public_root: &Path) -> Result<String> {
    let entries = manifest_icons(icons, public_root);
    serde_json::to_string_pretty(&ManifestFragment { icons: &entries })
        .context("Failed to serialize manifest icons")
}

fn url_path(path: &Path, public_root: &Path) -> String {
    match path.strip_prefix(public_root) {
        Ok(relative) => {
            let segments: Vec<String> = relative
                .components()
                .filter_map(|c| match c {
                    Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect();
            format!("/{}", segments.join("/"))
        }
        // Outside the public root: fall back to the bare file name
        Err(_) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("/{}", name)
        }
    }
}
