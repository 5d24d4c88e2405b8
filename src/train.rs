//! Per-language profile training.

use rayon::prelude::*;

use crate::models::{FrequencyProfile, LanguageCorpus, ProfileSet, ProfilingParams};
use crate::ngram::{ngram_stats, ngrams};
use crate::normalize::normalize;

/// Build a frequency profile from one language's documents.
///
/// Documents are concatenated with a single-space separator so no n-gram
/// spans two documents, then normalized and profiled. Zero documents yield
/// an empty profile.
pub fn train_language(corpus: &LanguageCorpus, params: &ProfilingParams) -> FrequencyProfile {
    let blob = normalize(&corpus.documents.join(" "));
    ngram_stats(ngrams(&blob, params.ngram_size))
}

/// Train one profile per language.
///
/// Languages are independent, so they are profiled in parallel; the ordered
/// collect is the join barrier, and the resulting profile set keeps the
/// caller's language order.
pub fn train(corpora: &[LanguageCorpus], params: &ProfilingParams) -> ProfileSet {
    let entries: Vec<(String, FrequencyProfile)> = corpora
        .par_iter()
        .map(|corpus| (corpus.language.clone(), train_language(corpus, params)))
        .collect();

    ProfileSet::from_entries(entries)
}
