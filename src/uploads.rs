//! Disk storage for uploaded images.
//!
//! Files land in the configured upload directory under a generated
//! `<uuid>.<ext>` name and are referenced by their public path
//! `/uploads/<name>`.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use actix_multipart::form::tempfile::TempFile;
use tempfile::NamedTempFile;
use thiserror::Error;
use uuid::Uuid;

/// URL prefix under which the upload directory is served.
pub const PUBLIC_PREFIX: &str = "/uploads";

const ALLOWED_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "gif", "webp", "svg", "avif", "bmp"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("failed to store upload: {0}")]
    Io(#[from] io::Error),
}

/// An image received in a request, still sitting in a temporary file.
#[derive(Debug)]
pub struct UploadedImage {
    pub file: NamedTempFile,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

impl From<TempFile> for UploadedImage {
    fn from(value: TempFile) -> Self {
        Self {
            file: value.file,
            file_name: value.file_name,
            content_type: value.content_type.map(|mime| mime.essence_str().to_string()),
        }
    }
}

impl UploadedImage {
    /// Writes `bytes` to a fresh temporary file.
    pub fn from_bytes(
        bytes: &[u8],
        file_name: Option<&str>,
        content_type: Option<&str>,
    ) -> io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self {
            file,
            file_name: file_name.map(str::to_string),
            content_type: content_type.map(str::to_string),
        })
    }

    /// Lower-cased extension for the stored name, checked against the image allow-list.
    fn extension(&self) -> Result<String, UploadError> {
        if let Some(content_type) = &self.content_type {
            if !content_type.starts_with("image/") {
                return Err(UploadError::UnsupportedType(content_type.clone()));
            }
        }

        let from_name = self
            .file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        let extension = match from_name {
            Some(ext) => ext,
            None => self
                .content_type
                .as_deref()
                .and_then(extension_for_content_type)
                .map(str::to_string)
                .ok_or_else(|| UploadError::UnsupportedType("unknown".to_string()))?,
        };

        if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            Ok(extension)
        } else {
            Err(UploadError::UnsupportedType(extension))
        }
    }
}

fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "image/svg+xml" => Some("svg"),
        "image/avif" => Some("avif"),
        "image/bmp" => Some("bmp"),
        _ => None,
    }
}

/// Upload directory on disk.
#[derive(Clone, Debug)]
pub struct UploadStorage {
    root: PathBuf,
}

impl UploadStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the upload directory when it does not exist yet.
    pub fn ensure_root(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    /// Moves the image into the upload directory and returns its public path.
    pub fn store(&self, image: UploadedImage) -> Result<String, UploadError> {
        let extension = image.extension()?;
        let name = format!("{}.{extension}", Uuid::new_v4());
        let target = self.root.join(&name);

        self.ensure_root()?;
        if let Err(err) = image.file.persist(&target) {
            // Temp dir and upload dir may live on different filesystems.
            fs::copy(err.file.path(), &target)?;
        }

        log::info!("Stored upload {name}");
        Ok(format!("{PUBLIC_PREFIX}/{name}"))
    }

    /// Stores every image, removing the already stored ones if any fails.
    pub fn store_all(&self, images: Vec<UploadedImage>) -> Result<Vec<String>, UploadError> {
        let mut stored = Vec::with_capacity(images.len());
        for image in images {
            match self.store(image) {
                Ok(path) => stored.push(path),
                Err(err) => {
                    self.remove_all(&stored);
                    return Err(err);
                }
            }
        }
        Ok(stored)
    }

    /// Maps a public path to a file directly inside the upload directory.
    ///
    /// Returns `None` for paths outside `/uploads/` or names that are not a
    /// plain file name.
    pub fn resolve(&self, public_path: &str) -> Option<PathBuf> {
        let name = public_path.strip_prefix(PUBLIC_PREFIX)?.strip_prefix('/')?;
        let is_plain = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\']);
        is_plain.then(|| self.root.join(name))
    }

    /// Deletes an upload. Missing files are ignored and failures only logged.
    pub fn remove(&self, public_path: &str) {
        let Some(path) = self.resolve(public_path) else {
            log::warn!("Refusing to remove upload outside the upload directory: {public_path}");
            return;
        };

        match fs::remove_file(&path) {
            Ok(()) => log::info!("Removed upload {public_path}"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => log::error!("Failed to remove upload {public_path}: {err}"),
        }
    }

    pub fn remove_all(&self, public_paths: &[String]) {
        for path in public_paths {
            self.remove(path);
        }
    }

    /// Public paths of every file currently in the upload directory.
    pub fn list(&self) -> io::Result<Vec<String>> {
        self.list_older_than(Duration::ZERO)
    }

    /// Public paths of stored files last modified at least `min_age` ago.
    pub fn list_older_than(&self, min_age: Duration) -> io::Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        let now = SystemTime::now();
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry?;
            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }
            let age = now
                .duration_since(metadata.modified()?)
                .unwrap_or(Duration::ZERO);
            if age < min_age {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                paths.push(format!("{PUBLIC_PREFIX}/{name}"));
            }
        }
        paths.sort();
        Ok(paths)
    }
}

/// Stored files that no content references any more.
pub fn orphaned_uploads(stored: &[String], referenced: &[String]) -> Vec<String> {
    let referenced: HashSet<&str> = referenced.iter().map(String::as_str).collect();
    stored
        .iter()
        .filter(|path| !referenced.contains(path.as_str()))
        .cloned()
        .collect()
}
