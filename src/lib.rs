//! Character n-gram language identification.
//!
//! Identifies the language of a text snippet by comparing its character
//! n-gram frequency profile against per-language reference profiles with a
//! rank-distance ("out-of-place") measure: for each query n-gram, the
//! absolute difference between its rank in the query profile and its rank in
//! the reference profile, with a large fixed penalty for n-grams the
//! reference has never seen. The smallest total distance wins.
//!
//! # Example
//!
//! ```
//! use ngram_langid::prelude::*;
//!
//! let params = ProfilingParams::default();
//!
//! let corpora = vec![
//!     LanguageCorpus {
//!         language: "en".to_string(),
//!         documents: vec!["the quick brown fox jumps over the lazy dog".to_string()],
//!     },
//!     LanguageCorpus {
//!         language: "fr".to_string(),
//!         documents: vec!["le renard brun saute par dessus le chien paresseux".to_string()],
//!     },
//! ];
//!
//! let profiles = train(&corpora, &params);
//! let distances = predict(&profiles, "the lazy dog", &params);
//!
//! let (best, _) = distances.best().unwrap();
//! assert_eq!(best, "en");
//! ```

pub mod baseline;
pub mod classify;
pub mod corpus;
pub mod eval;
pub mod models;
pub mod ngram;
pub mod normalize;
pub mod output;
pub mod train;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::baseline::StopwordClassifier;
    pub use crate::classify::{predict, rank_distance, RankDistanceClassifier, OOV_PENALTY};
    pub use crate::corpus::{load_corpus, load_language_dir, CorpusError};
    pub use crate::eval::{classify_documents, evaluate, split_snippets, NO_SIGNAL};
    pub use crate::models::{
        ClassifierReport, ConfusionRow, DistanceMap, DocumentResult, EvalParams, EvalReport,
        FrequencyProfile, LanguageCorpus, LanguageDetector, ProfileSet, ProfilingParams,
    };
    pub use crate::ngram::{ngram_stats, ngrams, Ngrams};
    pub use crate::normalize::normalize;
    pub use crate::output::{
        print_distances, print_document_results, print_report, write_csv, write_csv_file,
        write_json, write_json_file, OutputError,
    };
    pub use crate::train::{train, train_language};
}

// Re-export commonly used items at the crate root
pub use classify::{predict, rank_distance, OOV_PENALTY};
pub use models::{DistanceMap, FrequencyProfile, LanguageCorpus, ProfileSet, ProfilingParams};
pub use train::train;
