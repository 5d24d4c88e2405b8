//! Data structures for the language identification pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All training documents loaded for one language.
#[derive(Debug, Clone)]
pub struct LanguageCorpus {
    pub language: String,
    pub documents: Vec<String>,
}

impl LanguageCorpus {
    /// Total character count across all documents.
    pub fn total_chars(&self) -> usize {
        self.documents.iter().map(|d| d.len()).sum()
    }

    /// Get the number of documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

/// Profiling parameters, threaded explicitly through training and prediction.
///
/// The same `ngram_size` must be used for training and inference; the CLI
/// builds one value and passes it to both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilingParams {
    pub ngram_size: usize,
}

impl Default for ProfilingParams {
    fn default() -> Self {
        Self { ngram_size: 2 }
    }
}

/// Snippet evaluation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalParams {
    /// Snippet length in words. Test documents are cut into consecutive
    /// snippets of exactly this many words; a trailing shorter chunk is
    /// dropped.
    pub snippet_len: usize,
    /// Maximum snippets evaluated per test document.
    pub max_snippets: usize,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            snippet_len: 200,
            max_snippets: 100,
        }
    }
}

/// N-grams of one text ranked by descending occurrence count.
///
/// Entries are sorted by count descending; n-grams with equal counts keep
/// their first-occurrence order from the input sequence (stable sort over an
/// insertion-ordered list). The rank of an n-gram is its zero-based position
/// in the entry list. A rank index is built once at construction so lookups
/// during distance computation are O(1).
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrequencyProfile {
    entries: Vec<(String, u32)>,
    #[serde(skip)]
    ranks: HashMap<String, usize>,
}

impl FrequencyProfile {
    /// Build a profile from (n-gram, count) pairs in first-occurrence order.
    ///
    /// Sorts by count descending with a stable sort, so equal counts keep
    /// the order of the input list.
    pub fn from_ordered_counts(mut counts: Vec<(String, u32)>) -> Self {
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        let ranks = counts
            .iter()
            .enumerate()
            .map(|(rank, (gram, _))| (gram.clone(), rank))
            .collect();
        Self {
            entries: counts,
            ranks,
        }
    }

    /// Rank of an n-gram in this profile, if present.
    pub fn rank_of(&self, ngram: &str) -> Option<usize> {
        self.ranks.get(ngram).copied()
    }

    /// Ranked (n-gram, count) pairs; index = rank.
    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of n-grams the source text produced.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|&(_, c)| c as u64).sum()
    }
}

/// Trained per-language profiles, in the caller's language order.
///
/// The stored order is significant: it is the documented tie-break for
/// minimum-distance selection (see [`DistanceMap::best`]).
#[derive(Debug, Clone, Default)]
pub struct ProfileSet {
    entries: Vec<(String, FrequencyProfile)>,
}

impl ProfileSet {
    pub fn from_entries(entries: Vec<(String, FrequencyProfile)>) -> Self {
        Self { entries }
    }

    /// Profile for a language, if trained.
    pub fn get(&self, language: &str) -> Option<&FrequencyProfile> {
        self.entries
            .iter()
            .find(|(lang, _)| lang == language)
            .map(|(_, profile)| profile)
    }

    /// Iterate (language, profile) pairs in training order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrequencyProfile)> {
        self.entries
            .iter()
            .map(|(lang, profile)| (lang.as_str(), profile))
    }

    /// Language identifiers in training order.
    pub fn languages(&self) -> Vec<&str> {
        self.entries.iter().map(|(lang, _)| lang.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-language distances for one classification call.
///
/// Preserves the profile set's language order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DistanceMap {
    entries: Vec<(String, f64)>,
}

impl DistanceMap {
    pub fn from_entries(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    /// Distance for a language, if present.
    pub fn get(&self, language: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(lang, _)| lang == language)
            .map(|&(_, d)| d)
    }

    /// Iterate (language, distance) pairs in profile-set order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(lang, d)| (lang.as_str(), *d))
    }

    /// The minimum-distance language.
    ///
    /// Scans in profile-set order with strictly-smaller-wins, so an exact
    /// tie keeps the earlier language.
    pub fn best(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (lang, distance) in self.iter() {
            match best {
                Some((_, d)) if distance >= d => {}
                _ => best = Some((lang, distance)),
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Anything that names a language for a text.
///
/// The rank-distance classifier and the stopword baseline both implement
/// this, so the evaluation harness can compare them through one interface.
pub trait LanguageDetector {
    /// Short name used in reports.
    fn name(&self) -> &str;

    /// Detect the language of `text`, or `None` when there is no signal.
    fn detect(&self, text: &str) -> Option<String>;
}

/// Classification of one whole test document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResult {
    pub language: String,
    pub document_index: usize,
    /// (classifier name, predicted language or "?" for no signal)
    pub predictions: Vec<(String, String)>,
}

/// One confusion-table row: what one classifier predicted for snippets whose
/// true language is `language`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfusionRow {
    pub language: String,
    /// Predicted language -> snippet count, in sorted order.
    pub predicted: Vec<(String, usize)>,
}

/// Aggregate results for one classifier over the snippet pass.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifierReport {
    pub name: String,
    pub confusion: Vec<ConfusionRow>,
    pub total_predictions: usize,
    pub correct_predictions: usize,
    pub accuracy: f64,
    pub total_seconds: f64,
    pub avg_seconds_per_prediction: f64,
}

/// Full snippet evaluation result.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    pub version: String,
    pub params: ProfilingParams,
    pub eval: EvalParams,
    pub languages: Vec<String>,
    pub classifiers: Vec<ClassifierReport>,
}
