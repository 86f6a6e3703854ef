//! Interpretive content lookup.
//!
//! Derived numbers are keys into an external, read-only store of
//! interpretive records. The core only needs `get`; a missing record is
//! normal and callers fall back to a neutral default.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::ContentError;

/// Namespace of a content key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    LifePath,
    Expression,
    Soul,
    Personality,
    Birthday,
    Heart,
    Maturity,
    Challenge,
    PersonalYear,
    KarmicLesson,
    KarmicDebt,
    Compatibility,
    Matrix,
    Sephirah,
    Path,
}

/// All topics, in declaration order.
pub const ALL_TOPICS: [Topic; 15] = [
    Topic::LifePath,
    Topic::Expression,
    Topic::Soul,
    Topic::Personality,
    Topic::Birthday,
    Topic::Heart,
    Topic::Maturity,
    Topic::Challenge,
    Topic::PersonalYear,
    Topic::KarmicLesson,
    Topic::KarmicDebt,
    Topic::Compatibility,
    Topic::Matrix,
    Topic::Sephirah,
    Topic::Path,
];

impl Topic {
    /// Stable kebab-case name, used as the top-level key in content files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LifePath => "life-path",
            Self::Expression => "expression",
            Self::Soul => "soul",
            Self::Personality => "personality",
            Self::Birthday => "birthday",
            Self::Heart => "heart",
            Self::Maturity => "maturity",
            Self::Challenge => "challenge",
            Self::PersonalYear => "personal-year",
            Self::KarmicLesson => "karmic-lesson",
            Self::KarmicDebt => "karmic-debt",
            Self::Compatibility => "compatibility",
            Self::Matrix => "matrix",
            Self::Sephirah => "sephirah",
            Self::Path => "path",
        }
    }

    /// Inverse of [`Topic::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_TOPICS.iter().copied().find(|t| t.name() == name)
    }
}

/// One interpretive record. Only `title` is required in source files.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ContentRecord {
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
}

/// Read-only key/value access to interpretive records.
pub trait ContentStore {
    /// Record for `key` under `topic`, if present.
    fn get(&self, topic: Topic, key: &str) -> Option<&ContentRecord>;
}

/// A store with no records; every lookup falls back to defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyContentStore;

impl ContentStore for EmptyContentStore {
    fn get(&self, _topic: Topic, _key: &str) -> Option<&ContentRecord> {
        None
    }
}

/// In-memory store keyed by `(topic, key)`.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentStore {
    records: HashMap<(Topic, String), ContentRecord>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record.
    pub fn insert(&mut self, topic: Topic, key: impl Into<String>, record: ContentRecord) {
        self.records.insert((topic, key.into()), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load from JSON: `{ "<topic>": { "<key>": { "title": ..., ... } } }`.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let raw: HashMap<String, HashMap<String, ContentRecord>> = serde_json::from_str(text)?;
        let mut store = Self::new();
        for (topic_name, entries) in raw {
            let topic = Topic::from_name(&topic_name)
                .ok_or_else(|| ContentError::UnknownTopic(topic_name.clone()))?;
            for (key, record) in entries {
                store.insert(topic, key, record);
            }
        }
        tracing::debug!(records = store.len(), "loaded content store");
        Ok(store)
    }
}

impl ContentStore for MemoryContentStore {
    fn get(&self, topic: Topic, key: &str) -> Option<&ContentRecord> {
        self.records.get(&(topic, key.to_string()))
    }
}

impl<S: ContentStore + ?Sized> ContentStore for &S {
    fn get(&self, topic: Topic, key: &str) -> Option<&ContentRecord> {
        (**self).get(topic, key)
    }
}

/// Look up a derived number, logging when the record is absent.
pub fn lookup_number<S: ContentStore + ?Sized>(
    store: &S,
    topic: Topic,
    value: u32,
) -> Option<&ContentRecord> {
    let key = value.to_string();
    let found = store.get(topic, &key);
    if found.is_none() {
        tracing::debug!(topic = topic.name(), key = %key, "no content record");
    }
    found
}
