//! Snippet evaluation harness.
//!
//! Runs one or more classifiers over a held-out test corpus, cut into
//! fixed-length word snippets, and accumulates per-language confusion
//! counts and wall-clock timing for each classifier.

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::Instant;

use crate::models::{
    ClassifierReport, ConfusionRow, DocumentResult, EvalParams, EvalReport, LanguageCorpus,
    LanguageDetector, ProfilingParams,
};
use crate::normalize::normalize;

/// Label recorded when a classifier returns no signal.
pub const NO_SIGNAL: &str = "?";

/// Cut a document into consecutive snippets of exactly `snippet_len` words.
///
/// The document is normalized first; a trailing chunk shorter than
/// `snippet_len` is dropped, and at most `max_snippets` snippets are taken
/// per document.
pub fn split_snippets(document: &str, eval: &EvalParams) -> Vec<String> {
    if eval.snippet_len == 0 {
        return Vec::new();
    }
    let normalized = normalize(document);
    let words: Vec<&str> = normalized.split_whitespace().collect();

    words
        .chunks_exact(eval.snippet_len)
        .take(eval.max_snippets)
        .map(|chunk| chunk.join(" "))
        .collect()
}

/// Classify each whole test document with every classifier.
pub fn classify_documents(
    classifiers: &[&dyn LanguageDetector],
    test_corpora: &[LanguageCorpus],
) -> Vec<DocumentResult> {
    let mut results = Vec::new();

    for corpus in test_corpora {
        for (document_index, document) in corpus.documents.iter().enumerate() {
            let predictions = classifiers
                .iter()
                .map(|classifier| {
                    let predicted = classifier
                        .detect(document)
                        .unwrap_or_else(|| NO_SIGNAL.to_string());
                    (classifier.name().to_string(), predicted)
                })
                .collect();

            results.push(DocumentResult {
                language: corpus.language.clone(),
                document_index,
                predictions,
            });
        }
    }

    results
}

/// Run the snippet pass over a test corpus.
///
/// Every snippet of every language is classified by every classifier; each
/// classifier accumulates a confusion table (true language -> predicted
/// counts), a correct-prediction tally, and cumulative prediction time.
pub fn evaluate(
    classifiers: &[&dyn LanguageDetector],
    test_corpora: &[LanguageCorpus],
    params: &ProfilingParams,
    eval: &EvalParams,
    show_progress: bool,
) -> EvalReport {
    // Snippets per language, in corpus order
    let snippets: Vec<(&str, Vec<String>)> = test_corpora
        .iter()
        .map(|corpus| {
            let cut: Vec<String> = corpus
                .documents
                .iter()
                .flat_map(|document| split_snippets(document, eval))
                .collect();
            (corpus.language.as_str(), cut)
        })
        .collect();

    let total_snippets: usize = snippets.iter().map(|(_, cut)| cut.len()).sum();

    let progress = if show_progress {
        let pb = ProgressBar::new((total_snippets * classifiers.len()) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Per classifier: confusion counts, correct tally, cumulative seconds
    let mut confusion: Vec<BTreeMap<&str, BTreeMap<String, usize>>> =
        vec![BTreeMap::new(); classifiers.len()];
    let mut correct = vec![0usize; classifiers.len()];
    let mut seconds = vec![0f64; classifiers.len()];

    for (language, cut) in &snippets {
        for snippet in cut {
            for (slot, classifier) in classifiers.iter().enumerate() {
                let start = Instant::now();
                let predicted = classifier
                    .detect(snippet)
                    .unwrap_or_else(|| NO_SIGNAL.to_string());
                seconds[slot] += start.elapsed().as_secs_f64();

                if predicted == *language {
                    correct[slot] += 1;
                }
                *confusion[slot]
                    .entry(*language)
                    .or_default()
                    .entry(predicted)
                    .or_default() += 1;

                if let Some(ref pb) = progress {
                    pb.inc(1);
                }
            }
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("Done");
    }

    let reports = classifiers
        .iter()
        .enumerate()
        .map(|(slot, classifier)| {
            // Confusion rows follow the test corpus language order
            let rows = snippets
                .iter()
                .map(|(language, _)| ConfusionRow {
                    language: language.to_string(),
                    predicted: confusion[slot]
                        .get(language)
                        .map(|counts| counts.iter().map(|(k, &v)| (k.clone(), v)).collect())
                        .unwrap_or_default(),
                })
                .collect();

            ClassifierReport {
                name: classifier.name().to_string(),
                confusion: rows,
                total_predictions: total_snippets,
                correct_predictions: correct[slot],
                accuracy: if total_snippets == 0 {
                    0.0
                } else {
                    correct[slot] as f64 / total_snippets as f64
                },
                total_seconds: seconds[slot],
                avg_seconds_per_prediction: if total_snippets == 0 {
                    0.0
                } else {
                    seconds[slot] / total_snippets as f64
                },
            }
        })
        .collect();

    EvalReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        params: params.clone(),
        eval: eval.clone(),
        languages: test_corpora
            .iter()
            .map(|corpus| corpus.language.clone())
            .collect(),
        classifiers: reports,
    }
}
