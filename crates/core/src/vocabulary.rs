//! The symptom vocabulary: every symptom name the service knows about.

use api_shared::DiseaseRecord;
use std::collections::BTreeSet;

/// Sorted, duplicate-free list of symptom names.
///
/// Names keep their original case for display. Search and exact lookup compare case-insensitively,
/// deduplication does not (`"Fever"` and `"fever"` are two entries).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Builds the vocabulary from the disease catalogue by flattening all symptom lists.
    pub fn from_diseases(diseases: &[DiseaseRecord]) -> Self {
        diseases
            .iter()
            .flat_map(|d| d.symptoms.iter().cloned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Exact-value membership.
    pub fn contains(&self, symptom: &str) -> bool {
        self.terms
            .binary_search_by(|t| t.as_str().cmp(symptom))
            .is_ok()
    }

    /// Entries whose lowercase form contains the lowercase `term`, in vocabulary order.
    ///
    /// An empty term matches everything.
    pub fn filter<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a str> + 'a {
        let needle = term.to_lowercase();
        self.iter()
            .filter(move |t| t.to_lowercase().contains(&needle))
    }

    /// The first entry equal to `term` ignoring case.
    pub fn find_exact(&self, term: &str) -> Option<&str> {
        let needle = term.to_lowercase();
        self.iter().find(|t| t.to_lowercase() == needle)
    }
}

impl FromIterator<String> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let unique: BTreeSet<String> = iter.into_iter().collect();
        Self {
            terms: unique.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disease(symptoms: &[&str]) -> DiseaseRecord {
        DiseaseRecord {
            name: None,
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            description: None,
        }
    }

    fn vocab(terms: &[&str]) -> Vocabulary {
        terms.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn from_diseases_is_sorted_and_unique() {
        let v = Vocabulary::from_diseases(&[
            disease(&["Fever", "Cough", "Headache"]),
            disease(&["Cough", "Fatigue", "Fever"]),
        ]);
        let terms: Vec<&str> = v.iter().collect();
        assert_eq!(terms, vec!["Cough", "Fatigue", "Fever", "Headache"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let v = Vocabulary::from_diseases(&[disease(&["fever", "Fever"])]);
        assert_eq!(v.len(), 2);
        assert!(v.contains("fever"));
        assert!(v.contains("Fever"));
    }

    #[test]
    fn empty_catalogue_gives_empty_vocabulary() {
        let v = Vocabulary::from_diseases(&[]);
        assert!(v.is_empty());
        assert_eq!(v.filter("").count(), 0);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let v = vocab(&["Chest pain", "Fever", "High fever", "Cough"]);
        let upper: Vec<&str> = v.filter("FEVER").collect();
        let lower: Vec<&str> = v.filter("fever").collect();
        assert_eq!(upper, lower);
        assert_eq!(upper, vec!["Fever", "High fever"]);
    }

    #[test]
    fn filter_matches_inside_words_not_only_prefix() {
        let v = vocab(&["Abdominal pain", "Chest pain", "Cough"]);
        let hits: Vec<&str> = v.filter("pain").collect();
        assert_eq!(hits, vec!["Abdominal pain", "Chest pain"]);
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let v = vocab(&["Fever", "Cough"]);
        let all: Vec<&str> = v.filter("").collect();
        assert_eq!(all, vec!["Cough", "Fever"]);
    }

    #[test]
    fn find_exact_ignores_case_but_not_partial_matches() {
        let v = vocab(&["Fever", "Cough"]);
        assert_eq!(v.find_exact("fever"), Some("Fever"));
        assert_eq!(v.find_exact("COUGH"), Some("Cough"));
        assert_eq!(v.find_exact("fev"), None);
        assert_eq!(v.find_exact("xyz"), None);
    }
}
