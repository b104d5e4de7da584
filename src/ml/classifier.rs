//! Multinomial naive-Bayes text classifier over bag-of-words features.
//!
//! Small closed label sets and tiny training files make a linear
//! bag-of-words model the right size here; training is a single pass and
//! prediction is a deterministic argmax, so concurrent read-only inference
//! needs no locking.

use std::collections::HashMap;

/// Lower-cased alphanumeric tokens of `text`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

pub struct TextClassifier {
    /// Labels in first-seen training order; ties in scoring resolve to the
    /// earliest label, so prediction is deterministic.
    labels: Vec<String>,
    /// Training documents per label (priors).
    label_docs: Vec<u32>,
    /// token → per-label occurrence counts, indexed like `labels`.
    token_counts: HashMap<String, Vec<u32>>,
    /// Total token occurrences per label.
    label_tokens: Vec<u32>,
    total_docs: u32,
}

impl TextClassifier {
    /// Train from `(feature_text, label)` samples. Samples with a blank
    /// label are skipped.
    pub fn train<'a, I>(samples: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut labels: Vec<String> = Vec::new();
        let mut label_docs: Vec<u32> = Vec::new();
        let mut token_counts: HashMap<String, Vec<u32>> = HashMap::new();
        let mut label_tokens: Vec<u32> = Vec::new();
        let mut total_docs = 0u32;

        for (text, label) in samples {
            if label.trim().is_empty() {
                continue;
            }
            let label_idx = match labels.iter().position(|l| l == label) {
                Some(idx) => idx,
                None => {
                    labels.push(label.to_string());
                    label_docs.push(0);
                    label_tokens.push(0);
                    for counts in token_counts.values_mut() {
                        counts.push(0);
                    }
                    labels.len() - 1
                }
            };

            label_docs[label_idx] += 1;
            total_docs += 1;

            for token in tokenize(text) {
                let counts = token_counts
                    .entry(token)
                    .or_insert_with(|| vec![0; labels.len()]);
                counts[label_idx] += 1;
                label_tokens[label_idx] += 1;
            }
        }

        Self {
            labels,
            label_docs,
            token_counts,
            label_tokens,
            total_docs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Most likely label for `text`, or `None` when untrained.
    ///
    /// Log-space naive Bayes with Laplace smoothing; unseen tokens
    /// contribute the smoothed floor for every label.
    pub fn predict(&self, text: &str) -> Option<&str> {
        if self.labels.is_empty() {
            return None;
        }

        let tokens = tokenize(text);
        let vocab = self.token_counts.len() as f64;

        let mut best: Option<(usize, f64)> = None;
        for (idx, label_docs) in self.label_docs.iter().enumerate() {
            let mut score = (f64::from(*label_docs) / f64::from(self.total_docs)).ln();
            let denom = f64::from(self.label_tokens[idx]) + vocab;
            for token in &tokens {
                let count = self
                    .token_counts
                    .get(token)
                    .map(|counts| counts[idx])
                    .unwrap_or(0);
                score += ((f64::from(count) + 1.0) / denom).ln();
            }
            // strict > keeps the earliest label on exact ties
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((idx, score)),
            }
        }

        best.map(|(idx, _)| self.labels[idx].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Dia produtivo. Finalizei TUDO!"),
            vec!["dia", "produtivo", "finalizei", "tudo"]
        );
        assert!(tokenize("...").is_empty());
    }

    #[test]
    fn predicts_the_label_whose_tokens_match() {
        let classifier = TextClassifier::train([
            ("dia produtivo finalizei tarefas", "produtiva"),
            ("consegui terminar o projeto", "produtiva"),
            ("muito cansado sem energia", "exausta"),
            ("fadiga e sono o dia todo", "exausta"),
        ]);

        assert_eq!(classifier.predict("finalizei o projeto"), Some("produtiva"));
        assert_eq!(classifier.predict("sem energia e com sono"), Some("exausta"));
    }

    #[test]
    fn untrained_classifier_predicts_nothing() {
        let classifier = TextClassifier::train(std::iter::empty::<(&str, &str)>());
        assert!(classifier.is_empty());
        assert_eq!(classifier.predict("qualquer texto"), None);
    }

    #[test]
    fn blank_labels_are_skipped() {
        let classifier = TextClassifier::train([("texto", ""), ("outro texto", "   ")]);
        assert!(classifier.is_empty());
    }

    #[test]
    fn unseen_tokens_still_yield_a_deterministic_label() {
        let classifier = TextClassifier::train([
            ("paz e serenidade", "tranquila"),
            ("correria e pressão", "agitada"),
        ]);
        // No overlap with training vocabulary: priors tie, first label wins.
        assert_eq!(classifier.predict("zzz qqq"), Some("tranquila"));
    }
}
