//! Output formatting for classification and evaluation results (console,
//! JSON, CSV).

use crate::models::{DistanceMap, DocumentResult, EvalReport};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print a distance table and the winning language to stdout.
pub fn print_distances(distances: &DistanceMap) {
    println!("=== Distances ===");
    for (language, distance) in distances.iter() {
        println!("  {}: {:.0}", language, distance);
    }
    match distances.best() {
        Some((language, distance)) => println!("Best match: {} ({:.0})", language, distance),
        None => println!("Best match: none (no trained languages)"),
    }
}

/// Print per-document predictions from the full-document pass.
pub fn print_document_results(results: &[DocumentResult]) {
    println!("=== Document Predictions ===");
    for result in results {
        let predictions: Vec<String> = result
            .predictions
            .iter()
            .map(|(name, predicted)| format!("{}={}", name, predicted))
            .collect();
        println!(
            "  {} #{}: {}",
            result.language,
            result.document_index,
            predictions.join("  ")
        );
    }
}

/// Print an evaluation summary to stdout.
pub fn print_report(report: &EvalReport) {
    println!("\n=== Evaluation Summary ===");
    println!("Version: {}", report.version);
    println!();
    println!("Parameters:");
    println!("  N-gram size: {}", report.params.ngram_size);
    println!("  Snippet length: {} words", report.eval.snippet_len);
    println!("  Max snippets/document: {}", report.eval.max_snippets);
    println!("  Languages: {}", report.languages.join(", "));

    for classifier in &report.classifiers {
        println!();
        println!("Classifier: {}", classifier.name);
        println!(
            "  Accuracy: {:.1}% ({}/{})",
            classifier.accuracy * 100.0,
            classifier.correct_predictions,
            classifier.total_predictions
        );
        println!(
            "  Avg time/prediction: {:.3}ms",
            classifier.avg_seconds_per_prediction * 1000.0
        );
        for row in &classifier.confusion {
            let counts: Vec<String> = row
                .predicted
                .iter()
                .map(|(language, count)| format!("{}:{}", language, count))
                .collect();
            println!("  {} -> {}", row.language, counts.join(" "));
        }
    }
}

/// Write an evaluation report as JSON.
pub fn write_json<W: Write>(report: &EvalReport, writer: &mut W) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(report)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Write an evaluation report as JSON to a file.
pub fn write_json_file(report: &EvalReport, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_json(report, &mut file)
}

/// Write confusion rows as CSV.
pub fn write_csv<W: Write>(report: &EvalReport, writer: &mut W) -> Result<(), OutputError> {
    writeln!(writer, "classifier,true_language,predicted_language,count")?;

    for classifier in &report.classifiers {
        for row in &classifier.confusion {
            for (predicted, count) in &row.predicted {
                writeln!(
                    writer,
                    "{},{},{},{}",
                    classifier.name, row.language, predicted, count
                )?;
            }
        }
    }

    Ok(())
}

/// Write confusion rows as CSV to a file.
pub fn write_csv_file(report: &EvalReport, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_csv(report, &mut file)
}
