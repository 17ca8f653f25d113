//! TF-IDF vector space over a small corpus of token bags.
//!
//! Terms are unigrams and adjacent bigrams of tokens at least two characters long. Weights are
//! raw term frequency times smoothed IDF, `ln((1 + n) / (1 + df)) + 1`, and every document
//! vector is L2-normalized so cosine similarity is a plain dot product.

use std::{cmp::Ordering, collections::HashMap};

/// Minimum token length, in characters, for a token to become a term.
const MIN_TOKEN_CHARS: usize = 2;

/// A sparse vector: `(dimension, weight)` pairs sorted by dimension.
type SparseVector = Vec<(usize, f64)>;

/// Vectors for every document of a corpus.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    /// Term to dimension index.
    vocabulary: HashMap<String, usize>,
    /// IDF weight per dimension.
    idf: Vec<f64>,
    /// One normalized vector per input document.
    vectors: Vec<SparseVector>,
}

impl VectorSpace {
    /// Builds the space from tokenized documents.
    pub fn fit(documents: &[Vec<String>]) -> Self {
        let term_lists: Vec<Vec<String>> = documents.iter().map(|d| terms(d)).collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();
        let mut counts: Vec<HashMap<usize, usize>> = Vec::with_capacity(term_lists.len());

        for list in &term_lists {
            let mut doc_counts: HashMap<usize, usize> = HashMap::new();
            for term in list {
                let next = vocabulary.len();
                let idx = *vocabulary.entry(term.clone()).or_insert(next);
                if idx == doc_freq.len() {
                    doc_freq.push(0);
                }
                *doc_counts.entry(idx).or_insert(0) += 1;
            }
            for idx in doc_counts.keys() {
                doc_freq[*idx] += 1;
            }
            counts.push(doc_counts);
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|df| ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let vectors = counts
            .into_iter()
            .map(|doc_counts| {
                let mut vector: SparseVector = doc_counts
                    .into_iter()
                    .map(|(idx, tf)| (idx, tf as f64 * idf[idx]))
                    .collect();
                vector.sort_by_key(|(idx, _)| *idx);
                normalize(&mut vector);
                vector
            })
            .collect();

        Self {
            vocabulary,
            idf,
            vectors,
        }
    }

    /// Number of documents in the space.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// True if the space holds no documents.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Number of distinct terms.
    pub fn dimensions(&self) -> usize {
        self.vocabulary.len()
    }

    /// Cosine similarity of two documents, in `[0, 1]`.
    ///
    /// Documents without terms have similarity 0 to everything. Out-of-range indices do too.
    pub fn cosine(&self, a: usize, b: usize) -> f64 {
        match (self.vectors.get(a), self.vectors.get(b)) {
            (Some(a), Some(b)) => dot(a, b).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}

/// Expands a token bag into unigram and bigram terms.
fn terms(tokens: &[String]) -> Vec<String> {
    let kept: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .collect();
    let mut terms: Vec<String> = kept.iter().map(|t| (*t).to_string()).collect();
    terms.extend(kept.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    terms
}

/// Scales a vector to unit length. Zero vectors are left alone.
fn normalize(vector: &mut SparseVector) {
    let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in vector.iter_mut() {
            *w /= norm;
        }
    }
}

/// Dot product of two sorted sparse vectors.
fn dot(a: &SparseVector, b: &SparseVector) -> f64 {
    let (mut i, mut j, mut sum) = (0, 0, 0.0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

#[cfg(test)]
mod test {
    use super::*;

    fn doc(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn terms_include_bigrams_and_skip_short_tokens() {
        assert_eq!(
            terms(&doc("vlog travel outdoor")),
            vec!["vlog", "travel", "outdoor", "vlog travel", "travel outdoor"]
        );
        assert_eq!(terms(&doc("a vlog b kit")), vec!["vlog", "kit", "vlog kit"]);
    }

    /// IDF weight of a term, if it occurs in the corpus.
    fn idf(space: &VectorSpace, term: &str) -> Option<f64> {
        space.vocabulary.get(term).map(|idx| space.idf[*idx])
    }

    #[test]
    fn smoothed_idf() {
        let space = VectorSpace::fit(&[doc("vlog travel"), doc("vlog studio")]);
        assert!((idf(&space, "vlog").unwrap() - 1.0).abs() < 1e-12);
        let expected = (3.0f64 / 2.0).ln() + 1.0;
        assert!((idf(&space, "studio").unwrap() - expected).abs() < 1e-12);
        assert_eq!(idf(&space, "podcast"), None);
    }

    #[test]
    fn identical_documents_have_similarity_one() {
        let space = VectorSpace::fit(&[doc("vlog travel outdoor"), doc("vlog travel outdoor")]);
        assert!((space.cosine(0, 1) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_documents_have_similarity_zero() {
        let space = VectorSpace::fit(&[doc("vlog travel"), doc("podcast studio")]);
        assert_eq!(space.cosine(0, 1), 0.0);
    }

    #[test]
    fn empty_document_has_similarity_zero() {
        let space = VectorSpace::fit(&[doc("vlog travel"), doc("")]);
        assert_eq!(space.len(), 2);
        assert_eq!(space.cosine(0, 1), 0.0);
        assert_eq!(space.cosine(0, 9), 0.0);
    }

    #[test]
    fn closer_documents_score_higher() {
        let space = VectorSpace::fit(&[
            doc("vlog travel outdoor compact"),
            doc("podcast studio mic"),
            doc("vlog travel"),
        ]);
        assert!(space.cosine(2, 0) > space.cosine(2, 1));
        assert!(space.dimensions() > 0);
        assert!(!space.is_empty());
    }
}
