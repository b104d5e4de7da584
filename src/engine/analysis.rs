//! Weekly analysis orchestration: validate the window, aggregate the
//! predominant emotion, ask the statistical model for a candidate, and
//! resolve each field against the rule-based generators.
//!
//! Only the empty-window validation can fail. Every model problem (absent
//! model, inference panic, timeout, blank or uninformative output) is
//! logged at warn level and absorbed by the fallback, so a non-empty window
//! always produces a complete analysis.

use std::sync::Arc;
use std::time::Duration;

use crate::ml::{ModelCandidate, ModelInput, WeeklyModel};

use super::aggregate;
use super::emotion::{Emotion, Predominant};
use super::recommend::recommend;
use super::summary::{summarize, GENERIC_SUMMARY};
use super::EngineError;

/// Final result of one orchestrator run. Not mutated afterward; re-analysis
/// produces a new value.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub predominant: Predominant,
    pub summary: String,
    pub recommendation: String,
}

#[derive(Clone)]
pub struct AnalysisEngine {
    model: Option<Arc<WeeklyModel>>,
    inference_timeout: Duration,
}

impl AnalysisEngine {
    pub fn new(model: Option<WeeklyModel>, inference_timeout: Duration) -> Self {
        Self {
            model: model.map(Arc::new),
            inference_timeout,
        }
    }

    /// Analyze one user's trailing 7-day window. The caller supplies the
    /// already-filtered window; no re-filtering happens here.
    pub async fn analyze(
        &self,
        emotions: &[Emotion],
        texts: &[String],
    ) -> Result<AnalysisOutcome, EngineError> {
        if emotions.is_empty() {
            return Err(EngineError::NoCheckinData);
        }

        let predominant = aggregate::predominant(emotions);
        let candidate = self.predict(emotions, texts, predominant).await;
        let (summary, recommendation) = resolve(candidate, texts, predominant.as_label());

        Ok(AnalysisOutcome {
            predominant,
            summary,
            recommendation,
        })
    }

    /// Run model inference off the async runtime with a bounded timeout.
    /// Any failure is a degraded condition, never an error to the caller.
    async fn predict(
        &self,
        emotions: &[Emotion],
        texts: &[String],
        predominant: Predominant,
    ) -> Option<ModelCandidate> {
        let model = Arc::clone(self.model.as_ref()?);
        let input = ModelInput {
            emotions: emotions
                .iter()
                .map(|e| e.as_str())
                .collect::<Vec<_>>()
                .join(","),
            texts: texts
                .iter()
                .filter(|t| !t.trim().is_empty())
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(". "),
            predominant_emotion: predominant.as_label().to_string(),
        };

        let inference = tokio::task::spawn_blocking(move || model.predict(&input));
        match tokio::time::timeout(self.inference_timeout, inference).await {
            Ok(Ok(candidate)) => Some(candidate),
            Ok(Err(join_error)) => {
                tracing::warn!(error = %join_error, "Model inference failed, using rule-based fallback");
                None
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.inference_timeout.as_millis() as u64,
                    "Model inference timed out, using rule-based fallback"
                );
                None
            }
        }
    }
}

/// Per-field fallback policy. The summary candidate is discarded when blank
/// or when it equals the generic catch-all sentence: an uninformative model
/// answer counts as no answer. The recommendation candidate is discarded
/// only when blank.
fn resolve(
    candidate: Option<ModelCandidate>,
    texts: &[String],
    predominant_label: &str,
) -> (String, String) {
    let ModelCandidate {
        summary: candidate_summary,
        recommendation: candidate_recommendation,
    } = candidate.unwrap_or_default();

    let summary = if candidate_summary.trim().is_empty() || candidate_summary == GENERIC_SUMMARY {
        summarize(texts, predominant_label)
    } else {
        candidate_summary
    };

    let recommendation = if candidate_recommendation.trim().is_empty() {
        recommend(predominant_label).to_string()
    } else {
        candidate_recommendation
    };

    (summary, recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Emotion::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn empty_window_is_rejected_before_any_generation() {
        let engine = AnalysisEngine::new(None, Duration::from_millis(100));
        let err = engine.analyze(&[], &[]).await.unwrap_err();
        assert!(matches!(err, EngineError::NoCheckinData));
    }

    #[tokio::test]
    async fn without_a_model_both_fields_come_from_the_rules() {
        let engine = AnalysisEngine::new(None, Duration::from_millis(100));
        let outcome = engine
            .analyze(
                &[Feliz, Feliz, Calmo],
                &texts(&["Finalizei o projeto", "dia produtivo"]),
            )
            .await
            .unwrap();

        assert_eq!(outcome.predominant, Predominant::Emotion(Feliz));
        assert_eq!(
            outcome.summary,
            "Semana positiva com foco em produtividade e realizações"
        );
        assert_eq!(outcome.recommendation, recommend("Feliz"));
    }

    #[test]
    fn blank_candidate_fields_fall_back_independently() {
        let candidate = ModelCandidate {
            summary: String::new(),
            recommendation: "   ".to_string(),
        };
        let (summary, recommendation) =
            resolve(Some(candidate), &texts(&["semana comum"]), "Calmo");
        assert_eq!(summary, "Período de calma e estabilidade emocional");
        assert_eq!(recommendation, recommend("Calmo"));
    }

    #[test]
    fn generic_candidate_summary_counts_as_no_answer() {
        let candidate = ModelCandidate {
            summary: GENERIC_SUMMARY.to_string(),
            recommendation: "Recomendação específica do modelo.".to_string(),
        };
        let (summary, recommendation) =
            resolve(Some(candidate), &texts(&["muita pressão no trabalho"]), "Estressado");
        assert_eq!(
            summary,
            "Período de estresse devido à sobrecarga e falta de organização"
        );
        // A non-blank recommendation from the model is kept as-is.
        assert_eq!(recommendation, "Recomendação específica do modelo.");
    }

    #[test]
    fn informative_candidate_is_kept() {
        let candidate = ModelCandidate {
            summary: "Resumo específico do modelo".to_string(),
            recommendation: "Recomendação específica do modelo.".to_string(),
        };
        let (summary, recommendation) = resolve(Some(candidate), &texts(&["x"]), "Feliz");
        assert_eq!(summary, "Resumo específico do modelo");
        assert_eq!(recommendation, "Recomendação específica do modelo.");
    }

    #[tokio::test]
    async fn mixed_week_gets_generic_summary_and_advice() {
        let engine = AnalysisEngine::new(None, Duration::from_millis(100));
        let outcome = engine
            .analyze(
                &[Feliz, Cansado, Ansioso, Calmo, Estressado],
                &texts(&["um dia de cada vez"]),
            )
            .await
            .unwrap();

        assert_eq!(outcome.predominant, Predominant::Mixed);
        assert_eq!(outcome.summary, GENERIC_SUMMARY);
        assert_eq!(outcome.recommendation, recommend("Misto"));
    }
}
