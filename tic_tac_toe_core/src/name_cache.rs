//! Last-used player names, kept between launches.
//!
//! Values live under a namespace (`TicTacToe`) with the keys `player1` and
//! `player2`, the same shape an on-device preferences store would use.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::CacheError;

pub const NAME_CACHE_NAMESPACE: &str = "TicTacToe";
const PLAYER1_KEY: &str = "player1";
const PLAYER2_KEY: &str = "player2";

/// Names to prefill the entry fields with. Empty strings when nothing is cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CachedNames {
    pub player1: String,
    pub player2: String,
}

pub trait NameCache {
    fn load(&self) -> Result<CachedNames, CacheError>;
    fn store(&mut self, player1: &str, player2: &str) -> Result<(), CacheError>;
    fn clear(&mut self) -> Result<(), CacheError>;
}

type Namespaces = BTreeMap<String, BTreeMap<String, String>>;

fn read_names(namespaces: &Namespaces) -> CachedNames {
    let Some(entries) = namespaces.get(NAME_CACHE_NAMESPACE) else {
        return CachedNames::default();
    };
    let get = |key: &str| entries.get(key).cloned().unwrap_or_default();
    CachedNames {
        player1: get(PLAYER1_KEY),
        player2: get(PLAYER2_KEY),
    }
}

fn write_names(namespaces: &mut Namespaces, player1: &str, player2: &str) {
    let entries = namespaces
        .entry(NAME_CACHE_NAMESPACE.to_string())
        .or_default();
    entries.insert(PLAYER1_KEY.to_string(), player1.to_string());
    entries.insert(PLAYER2_KEY.to_string(), player2.to_string());
}

fn remove_names(namespaces: &mut Namespaces) {
    if let Some(entries) = namespaces.get_mut(NAME_CACHE_NAMESPACE) {
        entries.remove(PLAYER1_KEY);
        entries.remove(PLAYER2_KEY);
        if entries.is_empty() {
            namespaces.remove(NAME_CACHE_NAMESPACE);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryNameCache {
    namespaces: Namespaces,
}

impl MemoryNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw key/value view of the game's namespace.
    pub fn entries(&self) -> HashMap<String, String> {
        self.namespaces
            .get(NAME_CACHE_NAMESPACE)
            .map(|e| e.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default()
    }
}

impl NameCache for MemoryNameCache {
    fn load(&self) -> Result<CachedNames, CacheError> {
        Ok(read_names(&self.namespaces))
    }

    fn store(&mut self, player1: &str, player2: &str) -> Result<(), CacheError> {
        write_names(&mut self.namespaces, player1, player2);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CacheError> {
        remove_names(&mut self.namespaces);
        Ok(())
    }
}

/// JSON file holding one object per namespace. Other namespaces in the file
/// are left alone.
#[derive(Debug, Clone)]
pub struct JsonFileNameCache {
    path: PathBuf,
}

impl JsonFileNameCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Namespaces, CacheError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(Namespaces::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Namespaces::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Like `read`, but a corrupt file is discarded so the next write repairs it.
    fn read_for_update(&self) -> Result<Namespaces, CacheError> {
        match self.read() {
            Err(CacheError::Json(err)) => {
                warn!(
                    "⚠️ Discarding unreadable name cache {}: {}",
                    self.path.display(),
                    err
                );
                Ok(Namespaces::new())
            }
            other => other,
        }
    }

    fn write(&self, namespaces: &Namespaces) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(namespaces)?)?;
        debug!("Name cache written to {}", self.path.display());
        Ok(())
    }
}

impl NameCache for JsonFileNameCache {
    fn load(&self) -> Result<CachedNames, CacheError> {
        Ok(read_names(&self.read()?))
    }

    fn store(&mut self, player1: &str, player2: &str) -> Result<(), CacheError> {
        let mut namespaces = self.read_for_update()?;
        write_names(&mut namespaces, player1, player2);
        self.write(&namespaces)
    }

    fn clear(&mut self) -> Result<(), CacheError> {
        let mut namespaces = self.read_for_update()?;
        remove_names(&mut namespaces);
        self.write(&namespaces)
    }
}
