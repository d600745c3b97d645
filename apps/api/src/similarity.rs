//! TF-IDF cosine similarity over exactly two documents: the resume and the
//! job description.
//!
//! Term weighting follows the common smoothed formulation: raw term counts,
//! idf = ln((1 + n) / (1 + df)) + 1 with n = 2, L2-normalised vectors. The
//! vocabulary keeps the 5000 most frequent non-stop-word terms across both
//! documents. Degenerate input (an empty vocabulary after stop-word removal)
//! scores 0.0 rather than failing the request.

use std::collections::{HashMap, HashSet};

use tracing::warn;

/// The vocabulary cap: only the most frequent terms across both documents
/// participate in scoring.
pub const VOCABULARY_CAP: usize = 5000;

const DOCUMENT_COUNT: f64 = 2.0;

/// Standard English stop words, removed before vectorising.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amount",
    "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "bottom", "but", "by", "call", "can", "cannot", "could", "did", "do", "does",
    "done", "down", "due", "during", "each", "eight", "either", "eleven", "else", "elsewhere",
    "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything", "everywhere",
    "except", "few", "fifteen", "fifty", "first", "five", "for", "former", "formerly", "forty",
    "four", "from", "front", "full", "further", "get", "give", "go", "had", "has", "have", "he",
    "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him",
    "himself", "his", "how", "however", "hundred", "ie", "if", "in", "indeed", "into", "is", "it",
    "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many",
    "may", "me", "meanwhile", "might", "mine", "more", "moreover", "most", "mostly", "move",
    "much", "must", "my", "myself", "name", "namely", "neither", "never", "nevertheless", "next",
    "nine", "no", "nobody", "none", "nor", "not", "nothing", "now", "nowhere", "of", "off",
    "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise", "our",
    "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put", "rather",
    "re", "same", "see", "seem", "seemed", "seeming", "seems", "serious", "several", "she",
    "should", "show", "side", "since", "six", "sixty", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such", "take", "ten", "than",
    "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "thereupon", "these", "they", "third", "this", "those",
    "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too", "top",
    "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon", "us",
    "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence", "whenever",
    "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever", "whether",
    "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why", "will",
    "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Computes the cosine similarity between the resume and the job description.
/// Always in [0.0, 1.0]; recomputed fresh from only the current pair.
pub fn similarity_score(resume_text: &str, job_description: &str) -> f64 {
    let resume_counts = term_counts(resume_text);
    let jd_counts = term_counts(job_description);

    let vocabulary = build_vocabulary(&resume_counts, &jd_counts);
    if vocabulary.is_empty() {
        warn!("similarity vocabulary is empty after stop-word removal, scoring 0.0");
        return 0.0;
    }

    let resume_vector = tfidf_vector(&vocabulary, &resume_counts, &jd_counts);
    let jd_vector = tfidf_vector(&vocabulary, &jd_counts, &resume_counts);

    // Both vectors are L2-normalised, so cosine similarity is the dot product.
    let score: f64 = resume_vector
        .iter()
        .zip(&jd_vector)
        .map(|(a, b)| a * b)
        .sum();

    score.clamp(0.0, 1.0)
}

/// Tokenises a document into lowercase terms of two or more alphanumeric
/// characters, minus stop words, and counts occurrences.
fn term_counts(text: &str) -> HashMap<String, usize> {
    let stop_words: HashSet<&str> = ENGLISH_STOP_WORDS.iter().copied().collect();

    let mut counts = HashMap::new();
    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
    {
        let term = token.to_lowercase();
        if stop_words.contains(term.as_str()) {
            continue;
        }
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

/// Merges both documents' counts and keeps the most frequent terms up to the
/// vocabulary cap. Ties break alphabetically so the result is deterministic.
fn build_vocabulary(
    resume_counts: &HashMap<String, usize>,
    jd_counts: &HashMap<String, usize>,
) -> Vec<String> {
    let mut totals: HashMap<&str, usize> = HashMap::new();
    for (term, count) in resume_counts.iter().chain(jd_counts.iter()) {
        *totals.entry(term.as_str()).or_insert(0) += count;
    }

    let mut terms: Vec<(&str, usize)> = totals.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    terms.truncate(VOCABULARY_CAP);

    terms.into_iter().map(|(term, _)| term.to_string()).collect()
}

/// Builds the L2-normalised TF-IDF vector for one document. The other
/// document's counts contribute only to document frequency.
fn tfidf_vector(
    vocabulary: &[String],
    own_counts: &HashMap<String, usize>,
    other_counts: &HashMap<String, usize>,
) -> Vec<f64> {
    let mut vector: Vec<f64> = vocabulary
        .iter()
        .map(|term| {
            let tf = *own_counts.get(term).unwrap_or(&0) as f64;
            let df = [own_counts, other_counts]
                .iter()
                .filter(|counts| counts.contains_key(term))
                .count() as f64;
            let idf = ((1.0 + DOCUMENT_COUNT) / (1.0 + df)).ln() + 1.0;
            tf * idf
        })
        .collect();

    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in &mut vector {
            *value /= norm;
        }
    }
    vector
}
