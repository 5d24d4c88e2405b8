//! Filesystem corpus loading.
//!
//! A corpus directory holds one subdirectory per language, each containing
//! plain-text documents: `<root>/<lang>/*.txt`.

use crate::models::LanguageCorpus;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corpus root not found: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("Language directory not found: {}", .0.display())]
    LanguageDirNotFound(PathBuf),
}

/// Load the corpus for every configured language.
///
/// Languages keep the caller's order, which downstream becomes the
/// profile-set order and thus the minimum-distance tie-break.
pub fn load_corpus(root: &Path, languages: &[String]) -> Result<Vec<LanguageCorpus>, CorpusError> {
    if !root.is_dir() {
        return Err(CorpusError::RootNotFound(root.to_path_buf()));
    }

    let mut corpora = Vec::with_capacity(languages.len());
    for language in languages {
        let dir = root.join(language);
        let documents = load_language_dir(&dir)?;
        corpora.push(LanguageCorpus {
            language: language.clone(),
            documents,
        });
    }

    Ok(corpora)
}

/// Read every `.txt` file in a language directory, non-recursively.
///
/// Files are read in sorted filename order for reproducibility. A directory
/// with no `.txt` files yields an empty document list; a missing directory
/// is an error.
pub fn load_language_dir(dir: &Path) -> Result<Vec<String>, CorpusError> {
    if !dir.is_dir() {
        return Err(CorpusError::LanguageDirNotFound(dir.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("txt"))
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        documents.push(fs::read_to_string(&path)?);
    }

    Ok(documents)
}
