// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable key-value storage for session credentials.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// Key-value persistence for credential entries.
///
/// Implementations must make `update` all-or-nothing so a credential pair is
/// never observed half-replaced.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write `set` and erase `remove` in one step.
    fn update(&self, set: &[(&str, &str)], remove: &[&str]) -> anyhow::Result<()>;

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.update(&[(key, value)], &[])
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.update(&[], &[key])
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> anyhow::Result<()> {
        self.update(entries, &[])
    }

    fn remove_many(&self, keys: &[&str]) -> anyhow::Result<()> {
        self.update(&[], keys)
    }
}

fn apply(map: &mut BTreeMap<String, String>, set: &[(&str, &str)], remove: &[&str]) {
    for key in remove {
        map.remove(*key);
    }
    for (key, value) in set {
        map.insert((*key).to_owned(), (*value).to_owned());
    }
}

/// Process-lifetime store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn update(&self, set: &[(&str, &str)], remove: &[&str]) -> anyhow::Result<()> {
        apply(&mut self.entries.lock(), set, remove);
        Ok(())
    }
}

/// JSON-file store with atomic writes.
///
/// The whole map is rewritten on every mutation (write tmp + rename), so a
/// crash mid-write leaves the previous file intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, loading existing entries if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let entries = if path.exists() { load(&path)? } else { BTreeMap::new() };
        Ok(Self { path, entries: Mutex::new(entries) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

}

impl CredentialStore for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn update(&self, set: &[(&str, &str)], remove: &[&str]) -> anyhow::Result<()> {
        let mut map = self.entries.lock();
        let mut next = map.clone();
        apply(&mut next, set, remove);
        if next == *map {
            return Ok(());
        }
        // Disk first: a failed write leaves both the file and the map as they were.
        save(&self.path, &next)?;
        *map = next;
        Ok(())
    }
}

fn load(path: &Path) -> anyhow::Result<BTreeMap<String, String>> {
    let contents = std::fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    let entries = serde_json::from_str(&contents)?;
    Ok(entries)
}

/// Uses a unique temp filename (PID + counter) so concurrent saves from
/// separate store handles never share a `.tmp` file.
fn save(path: &Path, entries: &BTreeMap<String, String>) -> anyhow::Result<()> {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(entries)?;
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(
        "{}.{}.{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy(),
        std::process::id(),
        seq,
    );
    let tmp_path = path.with_file_name(tmp_name);
    std::fs::write(&tmp_path, json)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
