//! Durable paste storage: a mutex-guarded collection backed by a single
//! JSON document that is rewritten atomically on every mutation.


use crate::constants::TIMESTAMP_FORMAT;
use crate::error::AppError;
use crate::ident::paste_id;
use crate::models::paste::{normalize_title, resolve_language, Paste};
use crate::validate::validate_content;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Owner of the paste collection and its backing file.
///
/// The in-memory sequence is the process's single source of truth, ordered
/// newest-first by insertion. Every mutation rewrites the entire document
/// durably (temp file + atomic rename) before it becomes visible in memory,
/// so a record exists fully formed or not at all. Mutations serialize on
/// the internal mutex; readers take the same lock briefly and clone a
/// snapshot.
pub struct PasteStore {
    path: PathBuf,
    max_paste_size: usize,
    pastes: Mutex<Vec<Paste>>,
}

impl PasteStore {
    /// Open the store at `path`, loading any existing collection.
    ///
    /// A missing file is treated as an empty collection and initialized to
    /// an empty JSON array. An unparsable file is also treated as empty;
    /// the corrupt file is left on disk untouched so the evidence of the
    /// corruption survives until the next mutation rewrites it.
    ///
    /// # Errors
    /// Returns an error when the parent directory cannot be created, the
    /// file cannot be read, or the initial empty document cannot be
    /// written.
    pub fn open(path: impl Into<PathBuf>, max_paste_size: usize) -> Result<Self, AppError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let pastes = if path.exists() {
            load_collection(&path)?
        } else {
            write_document(&path, &[])?;
            Vec::new()
        };
        Ok(Self {
            path,
            max_paste_size,
            pastes: Mutex::new(pastes),
        })
    }

    /// Create a paste from submitted fields and insert it at the front.
    ///
    /// Validation failures return before memory or disk is touched. The
    /// language resolves to the explicit value unless it is blank or
    /// `"auto"`, in which case detection decides. The record only becomes
    /// visible after the rewritten document has been swapped into place, so
    /// a create that did not persist is never reported as successful.
    ///
    /// # Errors
    /// [`AppError::Validation`] for rejected content; [`AppError::Storage`]
    /// or [`AppError::Serialization`] when the durable rewrite fails.
    pub fn create(
        &self,
        content: &str,
        title: Option<&str>,
        language: Option<&str>,
    ) -> Result<Paste, AppError> {
        validate_content(content, self.max_paste_size)?;

        let paste = Paste {
            id: paste_id(content),
            title: normalize_title(title),
            content: content.to_string(),
            language: resolve_language(content, language),
            created_at: chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            size: content.chars().count(),
        };

        let mut pastes = self.lock()?;
        let mut next = Vec::with_capacity(pastes.len() + 1);
        next.push(paste.clone());
        next.extend(pastes.iter().cloned());
        write_document(&self.path, &next)?;
        *pastes = next;
        Ok(paste)
    }

    /// Return one page of the collection, newest first.
    ///
    /// `total_pages` floors at 1 and `page` is clamped to
    /// `[1, total_pages]`, so out-of-range page numbers always land on a
    /// valid page instead of an error or an empty result.
    ///
    /// # Returns
    /// The page slice and the total page count.
    pub fn list(&self, page: usize, page_size: usize) -> Result<(Vec<Paste>, usize), AppError> {
        let page_size = page_size.max(1);
        let pastes = self.lock()?;
        let (page, total_pages) = clamp_page(page, pastes.len(), page_size);
        let start = (page - 1) * page_size;
        Ok((
            pastes.iter().skip(start).take(page_size).cloned().collect(),
            total_pages,
        ))
    }

    /// Fetch the first record whose id matches, scanning newest first.
    pub fn get(&self, id: &str) -> Result<Option<Paste>, AppError> {
        let pastes = self.lock()?;
        Ok(pastes.iter().find(|paste| paste.id == id).cloned())
    }

    /// Delete every record whose id matches.
    ///
    /// The document is only rewritten when the collection actually shrank.
    ///
    /// # Returns
    /// `true` when at least one record was removed.
    pub fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut pastes = self.lock()?;
        let remaining: Vec<Paste> = pastes
            .iter()
            .filter(|paste| paste.id != id)
            .cloned()
            .collect();
        if remaining.len() == pastes.len() {
            return Ok(false);
        }
        write_document(&self.path, &remaining)?;
        *pastes = remaining;
        Ok(true)
    }

    /// Full ordered snapshot of the collection for bulk listings.
    pub fn all(&self) -> Result<Vec<Paste>, AppError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Paste>>, AppError> {
        self.pastes
            .lock()
            .map_err(|_| AppError::StorageMessage("paste collection mutex poisoned".to_string()))
    }
}

fn clamp_page(page: usize, total: usize, page_size: usize) -> (usize, usize) {
    let total_pages = total.div_ceil(page_size).max(1);
    (page.clamp(1, total_pages), total_pages)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write the full collection to a sibling temp file, then atomically
/// replace the primary document, so a reader of the primary file only ever
/// observes a complete pre- or post-mutation snapshot.
fn write_document(path: &Path, pastes: &[Paste]) -> Result<(), AppError> {
    let temp = temp_path(path);
    let bytes = serde_json::to_vec_pretty(pastes)?;
    fs::write(&temp, bytes)?;
    fs::rename(&temp, path)?;
    Ok(())
}

/// Load the collection, tolerating a missing or unparsable document.
///
/// Unparsable documents load as an empty collection and stay on disk
/// as-is; only genuine read failures propagate.
fn load_collection(path: &Path) -> Result<Vec<Paste>, AppError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };
    match serde_json::from_slice(&bytes) {
        Ok(pastes) => Ok(pastes),
        Err(err) => {
            tracing::warn!(
                "Unparsable paste document at {}: {}. Starting with an empty collection",
                path.display(),
                err
            );
            Ok(Vec::new())
        }
    }
}
