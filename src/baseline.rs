//! Stopword-counting baseline classifier.
//!
//! Used only as a comparison subject for the evaluation harness; the core
//! places no constraint on it beyond the [`LanguageDetector`] interface.

use crate::models::LanguageDetector;
use std::collections::HashSet;

const EN_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "of", "at", "by", "for", "with", "about", "to",
    "from", "in", "on", "is", "are", "was", "were", "be", "been", "have", "has", "had", "do",
    "does", "not", "no", "this", "that", "these", "those", "it", "its", "he", "she", "they",
    "we", "you", "i", "as", "so", "than", "then", "there", "here", "when", "where",
];

const FR_STOPWORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "et", "ou", "mais", "si", "dans", "sur",
    "avec", "pour", "par", "pas", "ne", "est", "sont", "était", "être", "avoir", "a", "ont",
    "ce", "cette", "ces", "il", "elle", "ils", "elles", "nous", "vous", "je", "tu", "que",
    "qui", "quoi", "où", "quand", "plus", "moins", "très", "aussi", "comme", "y", "en", "au",
];

const IT_STOPWORDS: &[&str] = &[
    "il", "lo", "la", "i", "gli", "le", "un", "uno", "una", "del", "della", "dei", "delle",
    "e", "o", "ma", "se", "in", "su", "con", "per", "tra", "fra", "non", "è", "sono", "era",
    "essere", "avere", "ha", "hanno", "questo", "questa", "questi", "queste", "lui", "lei",
    "loro", "noi", "voi", "io", "tu", "che", "chi", "dove", "quando", "più", "molto", "anche",
    "come", "di",
];

const DE_STOPWORDS: &[&str] = &[
    "der", "die", "das", "ein", "eine", "einen", "einem", "des", "dem", "den", "und", "oder",
    "aber", "wenn", "in", "auf", "mit", "für", "von", "zu", "aus", "bei", "nach", "nicht",
    "kein", "ist", "sind", "war", "waren", "sein", "haben", "hat", "hatte", "dieser", "diese",
    "dieses", "er", "sie", "es", "wir", "ihr", "ich", "du", "dass", "wer", "wo", "wann",
    "mehr", "sehr", "auch", "wie", "als", "dann",
];

/// Detects a language by counting function-word hits per built-in set.
///
/// Lower-cases the text, splits on whitespace, counts words found in each
/// language's stopword set and returns the language with the most hits.
/// Strictly-greater comparison keeps the earlier language on an exact tie;
/// returns `None` when no word hits any set.
pub struct StopwordClassifier {
    sets: Vec<(&'static str, HashSet<&'static str>)>,
}

impl StopwordClassifier {
    pub fn new() -> Self {
        let sets = vec![
            ("en", EN_STOPWORDS.iter().copied().collect()),
            ("fr", FR_STOPWORDS.iter().copied().collect()),
            ("it", IT_STOPWORDS.iter().copied().collect()),
            ("de", DE_STOPWORDS.iter().copied().collect()),
        ];
        Self { sets }
    }

    /// Languages this baseline can report.
    pub fn languages(&self) -> Vec<&'static str> {
        self.sets.iter().map(|&(lang, _)| lang).collect()
    }
}

impl Default for StopwordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for StopwordClassifier {
    fn name(&self) -> &str {
        "stopwords"
    }

    fn detect(&self, text: &str) -> Option<String> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();

        let mut best: Option<(&str, usize)> = None;
        for (language, set) in &self.sets {
            let hits = words.iter().filter(|word| set.contains(**word)).count();
            if hits > 0 && best.map_or(true, |(_, most)| hits > most) {
                best = Some((language, hits));
            }
        }

        best.map(|(language, _)| language.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        let baseline = StopwordClassifier::new();
        assert_eq!(
            baseline.detect("the cat is on the mat and it has a hat"),
            Some("en".to_string())
        );
    }

    #[test]
    fn test_detects_french() {
        let baseline = StopwordClassifier::new();
        assert_eq!(
            baseline.detect("le chat est dans la maison avec une souris"),
            Some("fr".to_string())
        );
    }

    #[test]
    fn test_detects_german() {
        let baseline = StopwordClassifier::new();
        assert_eq!(
            baseline.detect("der Hund und die Katze sind nicht im Haus"),
            Some("de".to_string())
        );
    }

    #[test]
    fn test_no_signal() {
        let baseline = StopwordClassifier::new();
        assert_eq!(baseline.detect("zzz qqq xxx"), None);
        assert_eq!(baseline.detect(""), None);
    }

    #[test]
    fn test_case_insensitive() {
        let baseline = StopwordClassifier::new();
        assert_eq!(
            baseline.detect("THE CAT AND THE DOG"),
            Some("en".to_string())
        );
    }
}
