use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use image::RgbImage;
use tracing::{debug, info};

use crate::pixels;

/// Recursively find all reference image files under `dir`.
pub fn find_reference_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("read reference directory {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        if name.starts_with('.') {
            continue;
        }
        if path.is_dir() {
            results.extend(find_reference_files(&path)?);
        } else if path.is_file() {
            results.push(path);
        }
    }
    results.sort();
    Ok(results)
}

/// Derive the lookup key from a file path: references/ic/bank.png -> ic/bank
pub fn derive_reference_key(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let rel = rel.with_extension("");
    rel.to_string_lossy().replace('\\', "/")
}

/// Immutable set of named baseline images, loaded once at startup.
#[derive(Debug, Default, Clone)]
pub struct References {
    images: HashMap<String, Arc<RgbImage>>,
}

impl References {
    /// Load every image under `dir`, keyed by its relative path minus extension.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut images = HashMap::new();
        for path in find_reference_files(dir)? {
            let key = derive_reference_key(&path, dir);
            let image = pixels::load_rgb(&path)?;
            debug!(key = %key, "loaded reference {}", path.display());
            images.insert(key, Arc::new(image));
        }
        info!("loaded {} reference image(s) from {}", images.len(), dir.display());
        Ok(Self { images })
    }

    /// Build a library from already decoded images.
    pub fn from_images<K: Into<String>>(images: impl IntoIterator<Item = (K, RgbImage)>) -> Self {
        Self {
            images: images
                .into_iter()
                .map(|(k, v)| (k.into(), Arc::new(v)))
                .collect(),
        }
    }

    /// Shared handle to the reference named `key`.
    pub fn get(&self, key: &str) -> Result<Arc<RgbImage>> {
        self.images
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow!("reference image \"{}\" not found", key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.images.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
