use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored entry exactly as found on disk. Only `date` is ever read; every
/// other key passes through untouched, in its original order.
pub type RawEntry = Map<String, Value>;

/// The entry's `date` when it is a non-empty string.
pub fn entry_date(entry: &RawEntry) -> Option<&str> {
    entry.get("date").and_then(Value::as_str).filter(|d| !d.is_empty())
}

// Past tense / past participle form of a verb
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct VerbForm {
    pub form: Option<String>,
    pub pronunciation: Option<String>,
}

/// A freshly added word: only word, meaning and date are known, the rest is
/// left for manual completion.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WordEntry {
    pub word: String,
    pub pronunciation: String,
    #[serde(rename = "type")]
    pub word_type: String,
    pub meaning: String,
    pub v2: VerbForm,
    pub v3: VerbForm,
    #[serde(rename = "gerundInfinitive")]
    pub gerund_infinitive: Option<String>,
    pub examples: Vec<String>,
    pub date: String,
}

impl WordEntry {
    pub fn new(
        word: impl Into<String>,
        meaning: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            pronunciation: String::new(),
            word_type: String::new(),
            meaning: meaning.into(),
            v2: VerbForm::default(),
            v3: VerbForm::default(),
            gerund_infinitive: None,
            examples: Vec::new(),
            date: date.into(),
        }
    }

    pub fn into_raw(self) -> Result<RawEntry> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => anyhow::bail!("word entry serialized to {}", other),
        }
    }
}

// Contents of words_index.json
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct WordIndex {
    pub files: Vec<String>,
    pub dates: Vec<String>,
}
