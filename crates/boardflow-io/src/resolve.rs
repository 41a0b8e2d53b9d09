//! Resolving element image sources to pixels.

use boardflow_core::ImageResolver;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Resolver that tries board-folder candidates first, then the network,
/// then the source as a plain path.
pub struct FsHttpResolver {
    client: reqwest::blocking::Client,
}

impl FsHttpResolver {
    /// Creates a resolver with a fresh HTTP client.
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    fn fetch_remote(&self, url: &str) -> Option<RgbaImage> {
        let response = match self.client.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "image fetch failed");
                return None;
            }
        };
        if !response.status().is_success() {
            warn!(url, status = %response.status(), "image fetch returned error status");
            return None;
        }
        let bytes = match response.bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(url, error = %e, "failed to read image response");
                return None;
            }
        };
        match image::load_from_memory(&bytes) {
            Ok(img) => Some(img.to_rgba8()),
            Err(e) => {
                warn!(url, error = %e, "failed to decode fetched image");
                None
            }
        }
    }
}

impl Default for FsHttpResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageResolver for FsHttpResolver {
    fn resolve(&self, src: &str, base_path: Option<&Path>) -> Option<RgbaImage> {
        if let Some(base) = base_path {
            for candidate in local_candidates(src, base) {
                if candidate.is_file() {
                    match image::open(&candidate) {
                        Ok(img) => return Some(img.to_rgba8()),
                        Err(e) => {
                            warn!(path = %candidate.display(), error = %e, "failed to decode local image")
                        }
                    }
                }
            }
        }

        if src.starts_with("http://") || src.starts_with("https://") {
            return self.fetch_remote(src);
        }

        match image::open(src) {
            Ok(img) => Some(img.to_rgba8()),
            Err(e) => {
                warn!(src, error = %e, "failed to open image source");
                None
            }
        }
    }
}

/// Local paths a source may live at inside a board export folder.
///
/// For URL sources the basename of the URL path (query stripped) is also
/// tried, so a board exported alongside its images works offline.
fn local_candidates(src: &str, base: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![base.join(src)];
    if let Some(name) = basename(src) {
        candidates.push(base.join("images").join(name));
        candidates.push(base.join(name));
    }
    if src.starts_with("http") {
        let path = src.split(['?', '#']).next().unwrap_or(src);
        if let Some(name) = basename(path) {
            candidates.push(base.join("images").join(name));
            candidates.push(base.join(name));
        }
    }
    candidates
}

fn basename(path: &str) -> Option<&str> {
    path.rsplit(['/', '\\']).next().filter(|name| !name.is_empty())
}
