//! Rank-distance classification against trained profiles.

use crate::models::{
    DistanceMap, FrequencyProfile, LanguageDetector, ProfileSet, ProfilingParams,
};
use crate::ngram::{ngram_stats, ngrams};
use crate::normalize::normalize;

/// Distance contribution for a query n-gram absent from the reference
/// profile. Large enough to dominate the sum whenever even one query n-gram
/// is unseen: in-vocabulary rank differences are bounded by the profile size,
/// which stays far below this for any realistic corpus.
pub const OOV_PENALTY: f64 = 1_000_000.0;

/// Rank-distance from a reference profile to a query profile.
///
/// For each n-gram at rank `i` in the query, adds `|i - j|` where `j` is its
/// rank in the reference, or [`OOV_PENALTY`] when the reference does not
/// contain it. Only the query's n-grams are iterated, so the measure is
/// asymmetric. An empty query yields 0.
pub fn rank_distance(reference: &FrequencyProfile, query: &FrequencyProfile) -> f64 {
    let mut total = 0.0;
    for (query_rank, (gram, _)) in query.entries().iter().enumerate() {
        match reference.rank_of(gram) {
            Some(ref_rank) => total += (query_rank as f64 - ref_rank as f64).abs(),
            None => total += OOV_PENALTY,
        }
    }
    total
}

/// Classify a text against every trained profile.
///
/// Normalizes and profiles the query once, then computes the rank-distance
/// to each language. Returns the full distance map in profile-set order;
/// winner selection is the caller's job via [`DistanceMap::best`]. A query
/// shorter than the n-gram order produces distance 0 for every language,
/// which callers must read as "no signal", not a confident match.
pub fn predict(profiles: &ProfileSet, text: &str, params: &ProfilingParams) -> DistanceMap {
    let normalized = normalize(text);
    let query = ngram_stats(ngrams(&normalized, params.ngram_size));

    let entries = profiles
        .iter()
        .map(|(language, reference)| (language.to_string(), rank_distance(reference, &query)))
        .collect();

    DistanceMap::from_entries(entries)
}

/// The core classifier behind the [`LanguageDetector`] interface.
pub struct RankDistanceClassifier {
    profiles: ProfileSet,
    params: ProfilingParams,
}

impl RankDistanceClassifier {
    pub fn new(profiles: ProfileSet, params: ProfilingParams) -> Self {
        Self { profiles, params }
    }

    /// The full distance map for a query.
    pub fn distances(&self, text: &str) -> DistanceMap {
        predict(&self.profiles, text, &self.params)
    }
}

impl LanguageDetector for RankDistanceClassifier {
    fn name(&self) -> &str {
        "ngram"
    }

    fn detect(&self, text: &str) -> Option<String> {
        self.distances(text)
            .best()
            .map(|(language, _)| language.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LanguageCorpus;
    use crate::train::train;

    fn trained(pairs: &[(&str, &str)], params: &ProfilingParams) -> ProfileSet {
        let corpora: Vec<LanguageCorpus> = pairs
            .iter()
            .map(|(language, text)| LanguageCorpus {
                language: language.to_string(),
                documents: vec![text.to_string()],
            })
            .collect();
        train(&corpora, params)
    }

    #[test]
    fn test_self_distance_zero() {
        // Classifying a training text against its own profile: every query
        // n-gram sits at its own rank
        let params = ProfilingParams { ngram_size: 2 };
        let profiles = trained(&[("en", "aa bb")], &params);

        let distances = predict(&profiles, "aa bb", &params);
        assert_eq!(distances.get("en"), Some(0.0));
    }

    #[test]
    fn test_distance_non_negative() {
        let params = ProfilingParams { ngram_size: 2 };
        let profiles = trained(&[("en", "the cat sat"), ("fr", "le chat noir")], &params);

        for query in ["the", "chat", "zzz", ""] {
            for (_, distance) in predict(&profiles, query, &params).iter() {
                assert!(distance >= 0.0);
            }
        }
    }

    #[test]
    fn test_empty_query_zero_everywhere() {
        let params = ProfilingParams { ngram_size: 2 };
        let profiles = trained(&[("en", "hello world"), ("fr", "bonjour")], &params);

        let distances = predict(&profiles, "", &params);
        assert_eq!(distances.get("en"), Some(0.0));
        assert_eq!(distances.get("fr"), Some(0.0));
    }

    #[test]
    fn test_oov_dominance() {
        let params = ProfilingParams { ngram_size: 2 };
        let profiles = trained(&[("en", "aaaa")], &params);

        // "zxqv" -> 3 bigrams, none trained
        let distances = predict(&profiles, "zxqv", &params);
        assert_eq!(distances.get("en"), Some(3.0 * OOV_PENALTY));
    }

    #[test]
    fn test_empty_profile_maximally_distant() {
        let params = ProfilingParams { ngram_size: 2 };
        let profiles = trained(&[("en", "hello"), ("xx", "")], &params);

        let distances = predict(&profiles, "hello", &params);
        let query_grams = 4.0;
        assert_eq!(distances.get("xx"), Some(query_grams * OOV_PENALTY));
        assert!(distances.get("en").unwrap() < distances.get("xx").unwrap());
    }

    #[test]
    fn test_rank_distance_asymmetric() {
        let big = ngram_stats(ngrams("abcdefgh", 2));
        let small = ngram_stats(ngrams("abc", 2));

        // Querying the small profile against the big reference finds every
        // gram; the reverse direction hits grams the small reference lacks
        let d_small_query = rank_distance(&big, &small);
        let d_big_query = rank_distance(&small, &big);
        assert!(d_small_query < d_big_query);
        assert!(d_big_query >= OOV_PENALTY);
    }

    #[test]
    fn test_predict_separates_languages() {
        let params = ProfilingParams { ngram_size: 2 };
        let profiles = trained(
            &[
                ("en", "the quick brown fox jumps over the lazy dog and the cat"),
                ("fr", "le renard brun saute par dessus le chien et le chat noir"),
            ],
            &params,
        );

        let en = predict(&profiles, "the dog and the fox", &params);
        assert!(en.get("en").unwrap() < en.get("fr").unwrap());

        let fr = predict(&profiles, "le chien et le renard", &params);
        assert!(fr.get("fr").unwrap() < fr.get("en").unwrap());
    }

    #[test]
    fn test_detector_interface() {
        let params = ProfilingParams { ngram_size: 2 };
        let profiles = trained(
            &[
                ("en", "the quick brown fox jumps over the lazy dog"),
                ("fr", "le renard brun saute par dessus le chien paresseux"),
            ],
            &params,
        );

        let classifier = RankDistanceClassifier::new(profiles, params);
        assert_eq!(classifier.name(), "ngram");
        assert_eq!(classifier.detect("the lazy dog"), Some("en".to_string()));
        assert_eq!(classifier.detect("le chien brun"), Some("fr".to_string()));
    }
}
