//! Statistical weekly-analysis model: two text classifiers (summary and
//! recommendation) trained once at startup from a JSON file of labeled
//! example weeks. The engine treats this model's output as a candidate only
//! only; blank or uninformative predictions are overridden by the rule-based
//! generators.

pub mod classifier;

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use self::classifier::TextClassifier;

/// One labeled example week from the training file.
#[derive(Debug, Deserialize)]
pub struct TrainingExample {
    /// Comma-joined emotions of the week (e.g. "Feliz,Ansioso,Calmo").
    pub emotions: String,
    /// Period-joined check-in texts of the week.
    pub texts: String,
    /// Predominant emotion label computed for the week.
    pub predominant_emotion: String,
    /// Label for the summary classifier.
    pub expected_summary: String,
    /// Label for the recommendation classifier.
    pub expected_recommendation: String,
}

/// Aggregated features of the week under analysis, same shape as the
/// training rows minus the labels.
#[derive(Debug, Clone)]
pub struct ModelInput {
    pub emotions: String,
    pub texts: String,
    pub predominant_emotion: String,
}

impl ModelInput {
    fn feature_text(&self) -> String {
        format!(
            "{} {} {}",
            self.texts, self.emotions, self.predominant_emotion
        )
    }
}

/// Candidate output of one inference. Fields may be blank when the
/// underlying classifier is untrained; the caller decides what to keep.
#[derive(Debug, Clone, Default)]
pub struct ModelCandidate {
    pub summary: String,
    pub recommendation: String,
}

pub struct WeeklyModel {
    summary: TextClassifier,
    recommendation: TextClassifier,
}

impl WeeklyModel {
    pub fn train(examples: &[TrainingExample]) -> Self {
        let features: Vec<String> = examples.iter().map(feature_of).collect();
        let summary = TextClassifier::train(
            features
                .iter()
                .map(|f| f.as_str())
                .zip(examples.iter().map(|ex| ex.expected_summary.as_str())),
        );
        let recommendation = TextClassifier::train(
            features
                .iter()
                .map(|f| f.as_str())
                .zip(examples.iter().map(|ex| ex.expected_recommendation.as_str())),
        );
        Self {
            summary,
            recommendation,
        }
    }

    /// Load and train from the configured training file.
    ///
    /// Missing file or an empty example list is a degraded-but-legal state:
    /// returns `Ok(None)` and every analysis will resolve through the rule
    /// engine. A file that exists but cannot be read or parsed is an error;
    /// startup must fail rather than silently run a half-trained model.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Training data file not found; analyses will use rule-based generation only");
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read training data from {}", path.display()))?;
        let examples: Vec<TrainingExample> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid training data in {}", path.display()))?;

        if examples.is_empty() {
            tracing::warn!(path = %path.display(), "Training data file is empty; analyses will use rule-based generation only");
            return Ok(None);
        }

        let model = Self::train(&examples);
        if model.summary.is_empty() && model.recommendation.is_empty() {
            tracing::warn!(path = %path.display(), "Training data has no usable labels; analyses will use rule-based generation only");
            return Ok(None);
        }

        tracing::info!(
            examples = examples.len(),
            "Weekly analysis model trained"
        );
        Ok(Some(model))
    }

    pub fn predict(&self, input: &ModelInput) -> ModelCandidate {
        let features = input.feature_text();
        ModelCandidate {
            summary: self
                .summary
                .predict(&features)
                .unwrap_or_default()
                .to_string(),
            recommendation: self
                .recommendation
                .predict(&features)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Feature text of a training row; must agree with
/// [`ModelInput::feature_text`] so token statistics line up at inference.
fn feature_of(example: &TrainingExample) -> String {
    format!(
        "{} {} {}",
        example.texts, example.emotions, example.predominant_emotion
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(
        emotions: &str,
        texts: &str,
        predominant: &str,
        summary: &str,
        recommendation: &str,
    ) -> TrainingExample {
        TrainingExample {
            emotions: emotions.into(),
            texts: texts.into(),
            predominant_emotion: predominant.into(),
            expected_summary: summary.into(),
            expected_recommendation: recommendation.into(),
        }
    }

    #[test]
    fn trained_model_predicts_the_matching_labels() {
        let model = WeeklyModel::train(&[
            example(
                "Feliz,Feliz",
                "Dia produtivo. Finalizei o projeto",
                "Feliz",
                "Semana positiva com foco em produtividade e realizações",
                "Continue mantendo atividades que trazem bem-estar. Considere registrar o que funcionou bem para replicar no futuro.",
            ),
            example(
                "Cansado,Cansado",
                "Muito trabalho. Sem energia",
                "Cansado",
                "Período de cansaço devido ao excesso de atividades profissionais",
                "Priorize o descanso e o sono adequado. Considere revisar sua rotina para evitar sobrecarga e estabelecer limites saudáveis.",
            ),
        ]);

        let candidate = model.predict(&ModelInput {
            emotions: "Feliz,Feliz,Calmo".into(),
            texts: "Dia produtivo. Consegui terminar tudo".into(),
            predominant_emotion: "Feliz".into(),
        });

        assert!(candidate.summary.contains("produtividade"));
        assert!(candidate.recommendation.contains("bem-estar"));
    }

    #[test]
    fn missing_training_file_yields_no_model() {
        let loaded = WeeklyModel::load(std::path::Path::new("does/not/exist.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn training_rows_with_blank_labels_leave_classifiers_empty() {
        let model = WeeklyModel::train(&[example("Calmo", "dia comum", "Calmo", "", "")]);
        let candidate = model.predict(&ModelInput {
            emotions: "Calmo".into(),
            texts: "dia comum".into(),
            predominant_emotion: "Calmo".into(),
        });
        assert!(candidate.summary.is_empty());
        assert!(candidate.recommendation.is_empty());
    }
}
