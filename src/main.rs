//! Language identification pipeline.
//!
//! Trains per-language character n-gram profiles from a corpus directory and
//! classifies texts by rank-distance, with an evaluation harness for held-out
//! test corpora.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod baseline;
mod classify;
mod corpus;
mod eval;
mod models;
mod ngram;
mod normalize;
mod output;
mod train;

use baseline::StopwordClassifier;
use classify::RankDistanceClassifier;
use corpus::load_corpus;
use eval::{classify_documents, evaluate};
use models::{EvalParams, LanguageDetector, ProfilingParams};
use output::{
    print_distances, print_document_results, print_report, write_csv_file, write_json_file,
};
use train::train;

#[derive(Parser)]
#[command(name = "ngram-langid")]
#[command(about = "Character n-gram language identification")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train profiles and identify the language of one text
    Identify {
        /// Training directory with one subdirectory of .txt files per language
        #[arg(long)]
        train_dir: PathBuf,

        /// Languages to train, in priority order (ties go to the earliest)
        #[arg(long, value_delimiter = ',', default_value = "en,fr,it,de")]
        languages: Vec<String>,

        /// Text to classify
        #[arg(long)]
        text: Option<String>,

        /// File whose contents to classify (alternative to --text)
        #[arg(long)]
        file: Option<PathBuf>,

        /// N-gram order, fixed for training and inference [default: 2]
        #[arg(long, default_value = "2")]
        ngram_size: usize,

        /// Suppress progress output
        #[arg(long)]
        quiet: bool,
    },

    /// Train profiles and evaluate against a held-out test directory
    Evaluate {
        /// Training directory with one subdirectory of .txt files per language
        #[arg(long)]
        train_dir: PathBuf,

        /// Test directory with the same per-language layout
        #[arg(long)]
        test_dir: PathBuf,

        /// Languages to train, in priority order (ties go to the earliest)
        #[arg(long, value_delimiter = ',', default_value = "en,fr,it,de")]
        languages: Vec<String>,

        /// N-gram order, fixed for training and inference [default: 2]
        #[arg(long, default_value = "2")]
        ngram_size: usize,

        /// Snippet length in words [default: 200]
        #[arg(long, default_value = "200")]
        snippet_len: usize,

        /// Maximum snippets per test document [default: 100]
        #[arg(long, default_value = "100")]
        max_snippets: usize,

        /// Also run the stopword baseline for comparison
        #[arg(long)]
        baseline: bool,

        /// Also classify each whole test document and print the predictions
        #[arg(long)]
        documents: bool,

        /// Write the evaluation report as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also write confusion rows as CSV (derived from the output path)
        #[arg(long)]
        csv: bool,

        /// Suppress progress output
        #[arg(long)]
        quiet: bool,
    },

    /// Benchmark profiling and distance computation on synthetic text
    Benchmark {
        /// Number of iterations
        #[arg(long, default_value = "1000")]
        iterations: usize,

        /// Synthetic text size in words
        #[arg(long, default_value = "200")]
        size: usize,

        /// N-gram order [default: 2]
        #[arg(long, default_value = "2")]
        ngram_size: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Identify {
            train_dir,
            languages,
            text,
            file,
            ngram_size,
            quiet,
        } => {
            let query = match (text, file) {
                (Some(text), None) => text,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                _ => return Err("provide exactly one of --text or --file".into()),
            };

            let params = ProfilingParams { ngram_size };

            if !quiet {
                eprintln!("Loading corpus from {}...", train_dir.display());
            }
            let corpora = load_corpus(&train_dir, &languages)?;

            if !quiet {
                for corpus in &corpora {
                    eprintln!(
                        "  {}: {} documents ({} chars)",
                        corpus.language,
                        corpus.document_count(),
                        corpus.total_chars()
                    );
                }
                eprintln!("Training profiles (n={})...", params.ngram_size);
            }
            let profiles = train(&corpora, &params);

            let distances = classify::predict(&profiles, &query, &params);
            print_distances(&distances);
        }

        Commands::Evaluate {
            train_dir,
            test_dir,
            languages,
            ngram_size,
            snippet_len,
            max_snippets,
            baseline,
            documents,
            output,
            csv,
            quiet,
        } => {
            let params = ProfilingParams { ngram_size };
            let eval_params = EvalParams {
                snippet_len,
                max_snippets,
            };

            if !quiet {
                eprintln!("Loading training corpus from {}...", train_dir.display());
            }
            let train_corpora = load_corpus(&train_dir, &languages)?;

            if !quiet {
                eprintln!("Training profiles (n={})...", params.ngram_size);
            }
            let profiles = train(&train_corpora, &params);

            if !quiet {
                for (language, profile) in profiles.iter() {
                    eprintln!("  {}: {} distinct n-grams", language, profile.len());
                }
                eprintln!("Loading test corpus from {}...", test_dir.display());
            }
            let test_corpora = load_corpus(&test_dir, &languages)?;

            let ngram_classifier = RankDistanceClassifier::new(profiles, params.clone());
            let stopword_classifier = StopwordClassifier::new();
            let mut classifiers: Vec<&dyn LanguageDetector> = vec![&ngram_classifier];
            if baseline {
                classifiers.push(&stopword_classifier);
            }

            if documents {
                let results = classify_documents(&classifiers, &test_corpora);
                print_document_results(&results);
            }

            if !quiet {
                eprintln!("Evaluating snippets ({} words each)...", snippet_len);
            }
            let report = evaluate(&classifiers, &test_corpora, &params, &eval_params, !quiet);

            print_report(&report);

            if let Some(path) = output {
                write_json_file(&report, &path)?;
                if !quiet {
                    eprintln!("\nOutput: {}", path.display());
                }

                if csv {
                    let csv_path = path.with_extension("csv");
                    write_csv_file(&report, &csv_path)?;
                    if !quiet {
                        eprintln!("CSV output: {}", csv_path.display());
                    }
                }
            }
        }

        Commands::Benchmark {
            iterations,
            size,
            ngram_size,
        } => {
            run_benchmark(iterations, size, ngram_size);
        }
    }

    Ok(())
}

/// Run a profiling/distance benchmark to measure performance.
fn run_benchmark(iterations: usize, size: usize, ngram_size: usize) {
    use std::time::Instant;

    println!("=== Profiling Benchmark ===");
    println!("Iterations: {}", iterations);
    println!("Text size: {} words", size);
    println!("N-gram size: {}", ngram_size);

    let params = ProfilingParams { ngram_size };

    let reference_words = ["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dogs"];
    let query_words = ["pack", "my", "box", "with", "five", "dozen", "liquor", "jugs"];

    let reference_text = synthetic_text(size, &reference_words);
    let query_text = synthetic_text(size, &query_words);

    // Profiling
    println!("\nProfile construction:");
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = ngram::ngram_stats(ngram::ngrams(&reference_text, params.ngram_size));
    }
    report_timing(start.elapsed(), iterations);

    // Distance, fully in-vocabulary
    let reference = ngram::ngram_stats(ngram::ngrams(&reference_text, params.ngram_size));
    let query_same = ngram::ngram_stats(ngram::ngrams(&reference_text, params.ngram_size));
    println!("\nRank distance (identical text):");
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = classify::rank_distance(&reference, &query_same);
    }
    report_timing(start.elapsed(), iterations);

    // Distance with out-of-vocabulary n-grams
    let query_other = ngram::ngram_stats(ngram::ngrams(&query_text, params.ngram_size));
    println!("\nRank distance (disjoint text):");
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = classify::rank_distance(&reference, &query_other);
    }
    report_timing(start.elapsed(), iterations);
}

/// Build a deterministic pseudo-text of `words` words.
fn synthetic_text(words: usize, vocabulary: &[&str]) -> String {
    (0..words)
        .map(|i| vocabulary[i % vocabulary.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn report_timing(elapsed: std::time::Duration, iterations: usize) {
    let per_call = elapsed.as_secs_f64() / iterations as f64;
    println!("  Total time: {:.3}s", elapsed.as_secs_f64());
    println!("  Per call: {:.3}ms", per_call * 1000.0);
    println!("  Calls/sec: {:.0}", 1.0 / per_call);
}
