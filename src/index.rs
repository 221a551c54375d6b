use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::date::{UNKNOWN_KEY, file_name_for_key};
use crate::models::WordIndex;
use crate::storage;

const DAILY_FILE_PATTERN: &str = r"^words_(\d{4})_(\d{2})_(\d{2})\.json$";

impl WordIndex {
    /// Builds the index from group keys: every key gets a file, only real
    /// dates go into `dates`. Both lists come out sorted.
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut files = Vec::new();
        let mut dates = Vec::new();
        for key in keys {
            files.push(file_name_for_key(key));
            if key != UNKNOWN_KEY {
                dates.push(key.to_string());
            }
        }
        files.sort();
        files.dedup();
        dates.sort();
        dates.dedup();
        WordIndex { files, dates }
    }
}

pub fn load_index(path: &Path) -> Result<WordIndex> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read index {}", path.display()))?;
    let index: WordIndex = serde_json::from_str(&content)
        .with_context(|| format!("invalid index {}", path.display()))?;
    Ok(index)
}

pub fn write_index(path: &Path, index: &WordIndex) -> Result<()> {
    storage::write_json(path, index)
}

#[derive(Debug, Default)]
pub struct DailyFiles {
    pub keys: Vec<String>,
    // words_*.json files the index cannot list, e.g. words_2024_3_5.json
    pub unindexed: Vec<String>,
}

/// Finds daily files (and the unknown bucket) in `dir`.
pub fn scan_daily_files(dir: &Path) -> Result<DailyFiles> {
    let pattern = Regex::new(DAILY_FILE_PATTERN)?;
    let unknown_file = file_name_for_key(UNKNOWN_KEY);
    let index_file = file_name_for_key("index");

    let mut found = DailyFiles::default();
    for entry in fs::read_dir(dir).with_context(|| format!("cannot list {}", dir.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };

        if let Some(caps) = pattern.captures(name) {
            found.keys.push(format!("{}_{}_{}", &caps[1], &caps[2], &caps[3]));
        } else if name == unknown_file {
            found.keys.push(UNKNOWN_KEY.to_string());
        } else if name.starts_with("words_") && name.ends_with(".json") && name != index_file {
            found.unindexed.push(name.to_string());
        }
    }
    found.unindexed.sort();
    Ok(found)
}

/// Scans `dir` and writes a fresh index to `index_path`.
pub fn rebuild_index(dir: &Path, index_path: &Path) -> Result<WordIndex> {
    let found = scan_daily_files(dir)?;
    for name in &found.unindexed {
        tracing::warn!(file = %name, "not a zero-padded daily file name, left out of the index");
        println!("⚠️  {} skipped: expected words_YYYY_MM_DD.json", name);
    }

    let index = WordIndex::from_keys(found.keys.iter().map(String::as_str));
    write_index(index_path, &index)?;
    println!(
        "✅ {} rebuilt ({} files, {} dates)",
        index_path.display(),
        index.files.len(),
        index.dates.len()
    );
    Ok(index)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    pub file: String,
    // None when the listed file is gone
    pub words: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub files: Vec<FileStats>,
    pub total: usize,
}

impl IndexStats {
    pub fn missing(&self) -> impl Iterator<Item = &FileStats> {
        self.files.iter().filter(|f| f.words.is_none())
    }
}

/// Loads every file listed in `index` and counts its words.
pub fn collect_stats(dir: &Path, index: &WordIndex) -> Result<IndexStats> {
    let mut files = Vec::with_capacity(index.files.len());
    let mut total = 0;

    for file in &index.files {
        let path: PathBuf = dir.join(file);
        let words = storage::read_entries_if_exists(&path)?.map(|entries| entries.len());
        match words {
            Some(count) => {
                println!("  📄 {}: {} words", file, count);
                total += count;
            }
            None => println!("  ⚠️  {}: listed in index but missing", file),
        }
        files.push(FileStats { file: file.clone(), words });
    }

    println!("📊 Total: {} words in {} files", total, index.files.len());
    Ok(IndexStats { files, total })
}
