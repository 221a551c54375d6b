use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::date::{DateKey, UNKNOWN_KEY, file_name_for_key};
use crate::index::write_index;
use crate::models::{RawEntry, WordIndex, entry_date};
use crate::storage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitFile {
    pub file: String,
    pub words: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    // In order of first appearance in the aggregate
    pub files: Vec<SplitFile>,
    pub total: usize,
    pub unknown: usize,
    pub backup: Option<PathBuf>,
    pub index: WordIndex,
}

/// Entries grouped by date key, keeping first-seen group order and the
/// original order inside each group.
pub fn group_by_date(entries: Vec<RawEntry>) -> Vec<(String, Vec<RawEntry>)> {
    let mut groups: Vec<(String, Vec<RawEntry>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let key = entry_date(&entry)
            .and_then(DateKey::parse)
            .map(|k| k.as_str().to_string())
            .unwrap_or_else(|| UNKNOWN_KEY.to_string());

        let slot = *positions.entry(key.clone()).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(entry);
    }
    groups
}

pub struct WordSplitter<'a> {
    config: &'a Config,
}

impl<'a> WordSplitter<'a> {
    pub fn new(config: &'a Config) -> Self {
        WordSplitter { config }
    }

    pub fn split(&self) -> Result<SplitReport> {
        self.split_file(&self.config.aggregate_path())
    }

    /// Splits `input` into one file per day next to the configured data
    /// directory, backs up the aggregate and writes the index. Any read or
    /// parse failure aborts before anything is written.
    pub fn split_file(&self, input: &Path) -> Result<SplitReport> {
        let entries = storage::read_entries(input)?;
        let total = entries.len();
        let groups = group_by_date(entries);

        let mut files = Vec::with_capacity(groups.len());
        let mut unknown = 0;
        for (key, words) in &groups {
            let file_name = file_name_for_key(key);
            storage::write_entries(&self.config.resolve(Path::new(&file_name)), words)?;
            println!("✅ {} created ({} words)", file_name, words.len());
            if key == UNKNOWN_KEY {
                unknown = words.len();
            }
            files.push(SplitFile { file: file_name, words: words.len() });
        }

        let backup = if input.exists() {
            let backup = backup_path(input);
            fs::copy(input, &backup).with_context(|| {
                format!("cannot back up {} to {}", input.display(), backup.display())
            })?;
            println!("\n💾 Backup created: {}", backup.display());
            Some(backup)
        } else {
            None
        };

        let index = WordIndex::from_keys(groups.iter().map(|(key, _)| key.as_str()));
        let index_path = self.config.index_path();
        write_index(&index_path, &index)?;
        println!("✅ {} created", index_path.display());

        if unknown > 0 {
            tracing::warn!(
                count = unknown,
                "entries without a usable date went to the unknown bucket"
            );
        }
        println!("\n📊 {} words split into {} files.", total, files.len());

        Ok(SplitReport { files, total, unknown, backup, index })
    }
}

// words.json -> words.json.backup2
fn backup_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".backup2");
    PathBuf::from(name)
}
