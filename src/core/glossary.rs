//! Glossary of finance terms backed by a YAML data asset.
//!
//! The built-in asset is compiled into the binary and parsed on load. A file
//! with the same layout can be supplied instead to extend or replace the
//! content without touching code.
use crate::core::error::FlexError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

const BUILTIN_GLOSSARY: &str = include_str!("../../assets/glossary.yaml");

/// Related terms shown for a term missing from the glossary.
pub const PLACEHOLDER_RELATED: [&str; 3] = ["Term 1", "Term 2", "Term 3"];
pub const MAX_RELATED: usize = 3;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TermRecord {
    pub content: String,
    pub examples: String,
    #[serde(default)]
    pub related: Vec<String>,
}

impl TermRecord {
    /// Generic record echoing the searched term.
    pub fn placeholder(term: &str) -> Self {
        TermRecord {
            content: format!(
                "This would contain a simple, student-friendly explanation of {term}."
            ),
            examples: "This section would show real-world examples of how this concept applies to student life.".to_string(),
            related: PLACEHOLDER_RELATED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Glossary {
    #[serde(default)]
    pub popular: Vec<String>,
    #[serde(default)]
    terms: BTreeMap<String, TermRecord>,
}

impl Glossary {
    pub fn builtin() -> Result<Self, FlexError> {
        Self::from_yaml(BUILTIN_GLOSSARY)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, FlexError> {
        let mut glossary: Glossary = serde_yaml::from_str(yaml)?;
        // Keys are stored case-folded so lookups only fold the query
        glossary.terms = std::mem::take(&mut glossary.terms)
            .into_iter()
            .map(|(key, mut record)| {
                record.related.truncate(MAX_RELATED);
                (key.to_lowercase(), record)
            })
            .collect();
        debug!(terms = glossary.terms.len(), "Loaded glossary");
        Ok(glossary)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read glossary file: {}", path.as_ref().display())
        })?;
        Self::from_yaml(&yaml).with_context(|| {
            format!("Failed to parse glossary file: {}", path.as_ref().display())
        })
    }

    /// Loads the configured glossary file, or the built-in one.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::builtin()?),
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, query: &str) -> bool {
        self.terms.contains_key(&query.to_lowercase())
    }

    /// Exact, case-insensitive lookup. Unknown terms get a placeholder.
    pub fn lookup(&self, query: &str) -> TermRecord {
        let key = query.to_lowercase();
        match self.terms.get(&key) {
            Some(record) => record.clone(),
            None => {
                debug!(term = %key, "Term not in glossary, using placeholder");
                TermRecord::placeholder(&key)
            }
        }
    }
}
