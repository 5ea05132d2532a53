//! Plot manifest
//!
//! JSON object mapping each plot identifier to the relative path of its image.
//! Written whole on every run; entries from earlier runs are never merged in.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    pub(crate) fn insert(&mut self, id: String, path: String) {
        self.entries.insert(id, path);
    }

    #[cfg(test)]
    pub(crate) fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pretty JSON with 4-space indentation
    pub(crate) fn to_pretty_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// Replace whatever is at `path` with this manifest.
    pub(crate) fn write(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| AppError::ManifestWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let json = self.to_pretty_json().map_err(|source| AppError::ManifestFormat {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| AppError::ManifestWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| AppError::ManifestFormat {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl FromIterator<(String, String)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
