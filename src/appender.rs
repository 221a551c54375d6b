use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::date::{self, Clock};
use crate::models::WordEntry;
use crate::parser;
use crate::storage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    Added {
        file: PathBuf,
        added: usize,
        skipped: usize,
        created: bool,
    },
    InvalidDate(String),
    MissingInput(PathBuf),
}

pub struct WordAppender<'a, C: Clock> {
    config: &'a Config,
    clock: C,
}

impl<'a, C: Clock> WordAppender<'a, C> {
    pub fn new(config: &'a Config, clock: C) -> Self {
        WordAppender { config, clock }
    }

    /// Reads the configured input file and appends its words to the daily
    /// file of `target_date` (today when `None`).
    ///
    /// A malformed date or a missing input file is reported through the
    /// outcome and nothing is written. A daily file that exists but does not
    /// parse is an error.
    pub fn append(&self, target_date: Option<&str>) -> Result<AppendOutcome> {
        self.append_from(&self.config.input_path(), target_date)
    }

    pub fn append_from(&self, input: &Path, target_date: Option<&str>) -> Result<AppendOutcome> {
        let target_date = match target_date {
            Some(d) => d.to_string(),
            None => date::format_date(self.clock.today()),
        };

        let Some(file_name) = date::daily_file_name(&target_date) else {
            println!("❌ Invalid date format: {} (expected DD.MM.YYYY)", target_date);
            return Ok(AppendOutcome::InvalidDate(target_date));
        };
        let target_file = self.config.resolve(Path::new(&file_name));

        if !input.exists() {
            println!("❌ {} not found!", input.display());
            return Ok(AppendOutcome::MissingInput(input.to_path_buf()));
        }

        // Existing words for that day, or a fresh file
        let (mut words, created) = match storage::read_entries_if_exists(&target_file)? {
            Some(words) => (words, false),
            None => {
                println!("✨ Creating new file: {}", target_file.display());
                (Vec::new(), true)
            }
        };

        let content = fs::read_to_string(input)
            .with_context(|| format!("cannot read {}", input.display()))?;
        let parsed = parser::parse_input(&content);

        let added = parsed.pairs.len();
        for pair in parsed.pairs {
            words.push(WordEntry::new(pair.word, pair.meaning, target_date.as_str()).into_raw()?);
        }

        // Always rewrite the whole day, old entries first
        storage::write_entries(&target_file, &words)?;

        println!("✅ {} words added to {}", added, target_file.display());
        println!("📝 Pronunciation, type and example sentences must be filled in manually.");

        Ok(AppendOutcome::Added {
            file: target_file,
            added,
            skipped: parsed.skipped,
            created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::FixedClock;
    use chrono::NaiveDate;
    use serde_json::json;
    use tempfile::TempDir;

    fn setup(input: Option<&str>) -> (TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        if let Some(text) = input {
            fs::write(dir.path().join("willaddednewwords.txt"), text).unwrap();
        }
        let config = Config::default().with_data_dir(dir.path());
        (dir, config)
    }

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
    }

    fn words_in(path: &Path) -> Vec<(String, String)> {
        storage::read_entries(path)
            .unwrap()
            .into_iter()
            .map(|e| {
                let text = |key: &str| e[key].as_str().unwrap().to_string();
                (text("word"), text("meaning"))
            })
            .collect()
    }

    #[test]
    fn creates_daily_file_for_explicit_date() {
        let (dir, config) = setup(Some("run=koşmak\n"));
        let outcome = WordAppender::new(&config, clock()).append(Some("05.03.2024")).unwrap();

        let file = dir.path().join("words_2024_03_05.json");
        assert_eq!(
            outcome,
            AppendOutcome::Added { file: file.clone(), added: 1, skipped: 0, created: true }
        );
        let entries = storage::read_entries(&file).unwrap();
        let expected = WordEntry::new("run", "koşmak", "05.03.2024").into_raw().unwrap();
        assert_eq!(entries, vec![expected]);
    }

    #[test]
    fn defaults_to_the_clock_date() {
        let (dir, config) = setup(Some("walk:yürümek\n"));
        WordAppender::new(&config, clock()).append(None).unwrap();

        let entries = storage::read_entries(&dir.path().join("words_2024_03_05.json")).unwrap();
        assert_eq!(entries[0]["date"], "05.03.2024");
    }

    #[test]
    fn appends_after_existing_entries() {
        let (dir, config) = setup(Some("swim=yüzmek\nfly=uçmak\n"));
        let file = dir.path().join("words_2024_01_02.json");
        let old = WordEntry::new("old", "eski", "02.01.2024").into_raw().unwrap();
        storage::write_entries(&file, &[old]).unwrap();

        let outcome = WordAppender::new(&config, clock()).append(Some("02.01.2024")).unwrap();
        assert!(matches!(outcome, AppendOutcome::Added { added: 2, created: false, .. }));
        assert_eq!(
            words_in(&file),
            vec![
                ("old".to_string(), "eski".to_string()),
                ("swim".to_string(), "yüzmek".to_string()),
                ("fly".to_string(), "uçmak".to_string()),
            ]
        );
    }

    #[test]
    fn malformed_lines_are_not_counted() {
        let (_dir, config) = setup(Some("run=koşmak\nno separator here\n\nwalk:yürümek\n"));
        let outcome = WordAppender::new(&config, clock()).append(Some("05.03.2024")).unwrap();
        assert!(matches!(outcome, AppendOutcome::Added { added: 2, skipped: 1, .. }));
    }

    #[test]
    fn invalid_date_writes_nothing() {
        let (dir, config) = setup(Some("run=koşmak\n"));
        let outcome = WordAppender::new(&config, clock()).append(Some("2024-03-05")).unwrap();
        assert_eq!(outcome, AppendOutcome::InvalidDate("2024-03-05".to_string()));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_input_writes_nothing() {
        let (dir, config) = setup(None);
        let outcome = WordAppender::new(&config, clock()).append(Some("05.03.2024")).unwrap();
        assert_eq!(
            outcome,
            AppendOutcome::MissingInput(dir.path().join("willaddednewwords.txt"))
        );
        assert!(!dir.path().join("words_2024_03_05.json").exists());
    }

    #[test]
    fn empty_input_still_creates_the_day() {
        let (dir, config) = setup(Some("\n\n"));
        let outcome = WordAppender::new(&config, clock()).append(Some("05.03.2024")).unwrap();
        assert!(matches!(outcome, AppendOutcome::Added { added: 0, created: true, .. }));
        let file = dir.path().join("words_2024_03_05.json");
        assert!(storage::read_entries(&file).unwrap().is_empty());
    }

    #[test]
    fn corrupt_daily_file_is_an_error() {
        let (dir, config) = setup(Some("run=koşmak\n"));
        let file = dir.path().join("words_2024_03_05.json");
        fs::write(&file, "not json").unwrap();
        assert!(WordAppender::new(&config, clock()).append(Some("05.03.2024")).is_err());
        assert_eq!(fs::read_to_string(&file).unwrap(), "not json");
    }

    #[test]
    fn existing_entries_with_nulls_are_kept_verbatim() {
        let (dir, config) = setup(Some("fly=uçmak\n"));
        let file = dir.path().join("words_2024_03_05.json");
        let existing = r#"[{"word":"old","examples":null,"pronunciation":null,
            "date":"05.03.2024","starred":true}]"#;
        fs::write(&file, existing).unwrap();

        let outcome = WordAppender::new(&config, clock()).append(Some("05.03.2024")).unwrap();
        assert!(matches!(outcome, AppendOutcome::Added { added: 1, created: false, .. }));

        let entries = storage::read_entries(&file).unwrap();
        assert_eq!(
            serde_json::Value::Object(entries[0].clone()),
            json!({
                "word": "old",
                "examples": null,
                "pronunciation": null,
                "date": "05.03.2024",
                "starred": true
            })
        );
        let keys: Vec<&str> = entries[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["word", "examples", "pronunciation", "date", "starred"]);
        assert_eq!(entries[1]["word"], "fly");
    }
}
