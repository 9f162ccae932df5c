use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use url::Url;

/// Key-value string storage for user preferences.
///
/// Values are raw strings; parsing them into richer types is the caller's
/// concern, which keeps the storage contract encoding-free.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Scope key for preferences not tied to any origin.
const DEFAULT_SCOPE: &str = "default";

#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefsFile {
    #[serde(default)]
    origins: HashMap<String, HashMap<String, String>>,
}

/// JSON-file-backed store scoped to one origin.
///
/// The file holds every origin's preferences; an instance reads and writes
/// only its own scope. Writes go through to disk immediately.
pub struct FilePreferenceStore {
    path: PathBuf,
    scope: String,
    file: PrefsFile,
}

impl FilePreferenceStore {
    pub fn open(path: &Path, origin: Option<&Url>) -> anyhow::Result<Self> {
        let file = if path.exists() {
            let bytes =
                std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parse {}", path.display()))?
        } else {
            PrefsFile::default()
        };
        Ok(Self {
            path: path.to_path_buf(),
            scope: scope_key(origin),
            file,
        })
    }

    fn persist(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(&self.file).context("encode preference store")?;
        std::fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.file.origins.get(&self.scope)?.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.file
            .origins
            .entry(self.scope.clone())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.persist()
    }
}

// Opaque origins (file: and friends) all serialize as "null"; use the full
// URL instead so distinct pages keep distinct scopes.
fn scope_key(origin: Option<&Url>) -> String {
    match origin {
        Some(url) => {
            let origin = url.origin();
            if origin.is_tuple() {
                origin.ascii_serialization()
            } else {
                url.as_str().to_string()
            }
        }
        None => DEFAULT_SCOPE.to_string(),
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_store_round_trips_across_reopen() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("prefs.json");
        let origin = Url::parse("https://example.com/t/slug/1").unwrap();

        let mut store = FilePreferenceStore::open(&path, Some(&origin)).unwrap();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "light").unwrap();

        let store = FilePreferenceStore::open(&path, Some(&origin)).unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn origins_are_isolated() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("prefs.json");
        let a = Url::parse("https://a.example.com/").unwrap();
        let b = Url::parse("https://b.example.com/").unwrap();

        let mut store_a = FilePreferenceStore::open(&path, Some(&a)).unwrap();
        store_a.set("theme", "light").unwrap();

        let mut store_b = FilePreferenceStore::open(&path, Some(&b)).unwrap();
        assert_eq!(store_b.get("theme"), None);
        store_b.set("theme", "dark").unwrap();

        let store_a = FilePreferenceStore::open(&path, Some(&a)).unwrap();
        assert_eq!(store_a.get("theme").as_deref(), Some("light"));
        let store_none = FilePreferenceStore::open(&path, None).unwrap();
        assert_eq!(store_none.get("theme"), None);
    }

    #[test]
    fn same_origin_different_paths_share_a_scope() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("prefs.json");
        let a = Url::parse("https://example.com/a").unwrap();
        let b = Url::parse("https://example.com/b").unwrap();

        let mut store_a = FilePreferenceStore::open(&path, Some(&a)).unwrap();
        store_a.set("theme", "light").unwrap();

        let store_b = FilePreferenceStore::open(&path, Some(&b)).unwrap();
        assert_eq!(store_b.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn opaque_origins_keep_distinct_scopes() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("prefs.json");
        let a = Url::parse("file:///pages/a.html").unwrap();
        let b = Url::parse("file:///pages/b.html").unwrap();

        let mut store_a = FilePreferenceStore::open(&path, Some(&a)).unwrap();
        store_a.set("theme", "light").unwrap();

        let store_b = FilePreferenceStore::open(&path, Some(&b)).unwrap();
        assert_eq!(store_b.get("theme"), None);
    }

    #[test]
    fn memory_store_get_set() {
        let mut store = MemoryPreferenceStore::new();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }
}
