use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};

/// Localised string lookup keyed by raw message identifiers.
pub trait Lookup {
    /// Returns the translation for `key`, or `None` when the table has no entry.
    fn get(&self, key: &str) -> Option<&str>;

    /// Returns the translation for `key`, falling back to the key itself.
    fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }
}

/// A message table loaded from a `key:value` file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Messages {
    table: HashMap<String, String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading messages {}", path.display()))?;
        let messages = Self::parse(&text);
        tracing::debug!(path = %path.display(), count = messages.len(), "loaded messages");
        Ok(messages)
    }

    /// Parses `key:value` lines. Blank lines and `#` comments are skipped, as
    /// are lines without a separator. Later duplicates win.
    pub fn parse(text: &str) -> Self {
        let table = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.to_string()))
            .collect();
        Self { table }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.table.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Lookup for Messages {
    fn get(&self, key: &str) -> Option<&str> {
        self.table.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Messages
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            table: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
