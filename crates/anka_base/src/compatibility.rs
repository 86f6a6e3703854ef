//! Life Path compatibility scoring.
//!
//! Two Life Path numbers form an order-independent pair key, used to look
//! up a qualitative descriptor. The numeric score is an approximate keyword
//! heuristic over that descriptor's text: it has no derivation beyond
//! "positive words up, negative words down", and should be read as a
//! placeholder policy rather than a principled metric.

use std::collections::HashSet;

use anka_math::is_master;

use crate::content::{ContentRecord, ContentStore, Topic};

/// Score when no descriptor is found.
pub const NEUTRAL_SCORE: u32 = 50;

/// Starting point of the keyword heuristic.
pub const BASE_SCORE: u32 = 70;

/// Heuristic scores are clamped to `[MIN_SCORE, MAX_SCORE]`.
pub const MIN_SCORE: u32 = 30;
pub const MAX_SCORE: u32 = 90;

/// Points added or removed per distinct keyword found.
pub const KEYWORD_WEIGHT: u32 = 8;

/// Words that raise the heuristic score.
pub const POSITIVE_KEYWORDS: [&str; 8] = [
    "harmony",
    "harmonious",
    "support",
    "understanding",
    "complement",
    "balance",
    "natural",
    "trust",
];

/// Words that lower the heuristic score.
pub const NEGATIVE_KEYWORDS: [&str; 8] = [
    "conflict",
    "tension",
    "difficult",
    "clash",
    "struggle",
    "rivalry",
    "friction",
    "incompatible",
];

/// Kind of relationship a compatibility request is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipType {
    Romantic,
    Friendship,
    Business,
    Family,
}

pub const ALL_RELATIONSHIPS: [RelationshipType; 4] = [
    RelationshipType::Romantic,
    RelationshipType::Friendship,
    RelationshipType::Business,
    RelationshipType::Family,
];

impl RelationshipType {
    /// Lowercase name, also used as the content-key prefix.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Romantic => "romantic",
            Self::Friendship => "friendship",
            Self::Business => "business",
            Self::Family => "family",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_RELATIONSHIPS
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }
}

/// Canonical ordering of two Life Path numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub first: u32,
    pub second: u32,
}

impl PairKey {
    /// The same pair written the other way round.
    pub const fn reversed(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Build the pair key.
///
/// Ascending order, except that when exactly one side is a master number
/// that side goes first regardless of magnitude.
pub fn pair_key(a: u32, b: u32) -> PairKey {
    let (first, second) = match (is_master(a), is_master(b)) {
        (true, false) => (a, b),
        (false, true) => (b, a),
        _ => (a.min(b), a.max(b)),
    };
    PairKey { first, second }
}

/// How the overall score was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// `BASE_SCORE` when a descriptor matched, `NEUTRAL_SCORE` otherwise.
    pub base: u32,
    pub positive_hits: Vec<&'static str>,
    pub negative_hits: Vec<&'static str>,
    /// Whether a descriptor was found.
    pub matched: bool,
}

/// Result of a compatibility request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityResult {
    pub key: PairKey,
    pub relationship: RelationshipType,
    /// 0..=100; the heuristic keeps it within 30..=90, the neutral default is 50.
    pub overall: u32,
    pub breakdown: ScoreBreakdown,
    pub title: Option<String>,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
}

/// Keyword heuristic over a descriptor. Approximate by construction.
///
/// Keywords match whole words only, so "misunderstanding" does not count
/// as "understanding".
pub fn heuristic_score(record: &ContentRecord) -> (u32, ScoreBreakdown) {
    let mut haystack = record.title.to_lowercase();
    for k in &record.keywords {
        haystack.push(' ');
        haystack.push_str(&k.to_lowercase());
    }
    haystack.push(' ');
    haystack.push_str(&record.text.to_lowercase());

    let words: HashSet<&str> = haystack
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .collect();

    let positive_hits: Vec<&'static str> = POSITIVE_KEYWORDS
        .iter()
        .copied()
        .filter(|k| words.contains(k))
        .collect();
    let negative_hits: Vec<&'static str> = NEGATIVE_KEYWORDS
        .iter()
        .copied()
        .filter(|k| words.contains(k))
        .collect();

    let raw = BASE_SCORE as i64 + KEYWORD_WEIGHT as i64 * positive_hits.len() as i64
        - KEYWORD_WEIGHT as i64 * negative_hits.len() as i64;
    let score = raw.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u32;

    (
        score,
        ScoreBreakdown {
            base: BASE_SCORE,
            positive_hits,
            negative_hits,
            matched: true,
        },
    )
}

fn find_descriptor<'a, S: ContentStore + ?Sized>(
    store: &'a S,
    key: PairKey,
    relationship: RelationshipType,
) -> Option<&'a ContentRecord> {
    let candidates = [
        format!("{}:{key}", relationship.name()),
        format!("{}:{}", relationship.name(), key.reversed()),
        key.to_string(),
        key.reversed().to_string(),
    ];
    candidates
        .iter()
        .find_map(|k| store.get(Topic::Compatibility, k))
}

/// Score two Life Path numbers.
///
/// Missing descriptors are not an error: the result is the neutral
/// default (score 50, no title, empty lists).
pub fn compatibility<S: ContentStore + ?Sized>(
    life_path_a: u32,
    life_path_b: u32,
    relationship: RelationshipType,
    store: &S,
) -> CompatibilityResult {
    let key = pair_key(life_path_a, life_path_b);
    tracing::trace!(a = life_path_a, b = life_path_b, key = %key, "pair key");

    match find_descriptor(store, key, relationship) {
        Some(record) => {
            let (overall, breakdown) = heuristic_score(record);
            CompatibilityResult {
                key,
                relationship,
                overall,
                breakdown,
                title: Some(record.title.clone()),
                strengths: record.strengths.clone(),
                challenges: record.challenges.clone(),
            }
        }
        None => {
            tracing::debug!(key = %key, relationship = relationship.name(),
                "no compatibility descriptor, using neutral default");
            CompatibilityResult {
                key,
                relationship,
                overall: NEUTRAL_SCORE,
                breakdown: ScoreBreakdown {
                    base: NEUTRAL_SCORE,
                    positive_hits: Vec::new(),
                    negative_hits: Vec::new(),
                    matched: false,
                },
                title: None,
                strengths: Vec::new(),
                challenges: Vec::new(),
            }
        }
    }
}
