//! Rule-based weekly summary: layered keyword rules over the joined check-in
//! texts, branched on the predominant emotion. Deterministic: this is the
//! authoritative fallback when the statistical model has nothing useful to
//! say, and the de facto primary path in most deployments.

use super::emotion::{Emotion, Predominant};
use super::response::contains_any;

/// The uninformative catch-all sentence. A model candidate equal to this is
/// treated the same as no candidate at all (see [`crate::engine::analysis`]).
pub const GENERIC_SUMMARY: &str = "Período com variações emocionais diversas";

struct SummaryRule {
    keywords: &'static [&'static str],
    sentence: &'static str,
}

const FELIZ_RULES: [SummaryRule; 3] = [
    SummaryRule {
        keywords: &["produtivo", "consegui", "finalizei", "completei", "terminei"],
        sentence: "Semana positiva com foco em produtividade e realizações",
    },
    SummaryRule {
        keywords: &["família", "amigos", "tempo", "pessoas", "amor"],
        sentence: "Período feliz com momentos importantes de conexão pessoal",
    },
    SummaryRule {
        keywords: &["sucesso", "conquista", "vitória"],
        sentence: "Semana marcada por conquistas e sentimentos de realização",
    },
];

const ANSIOSO_RULES: [SummaryRule; 3] = [
    SummaryRule {
        keywords: &["tarefas", "prazos", "pendentes", "trabalho", "deadline"],
        sentence: "Período de ansiedade devido à sobrecarga de trabalho e pressão",
    },
    SummaryRule {
        keywords: &["decisão", "escolher", "preocupado", "dúvida", "incerto"],
        sentence: "Semana marcada por ansiedade relacionada a tomadas de decisão",
    },
    SummaryRule {
        keywords: &["futuro", "medo", "incerteza"],
        sentence: "Período ansioso com preocupações sobre o futuro e incertezas",
    },
];

const CALMO_RULES: [SummaryRule; 3] = [
    SummaryRule {
        keywords: &["relaxamento", "paz", "tranquilo", "sereno", "zen"],
        sentence: "Semana tranquila com momentos de descanso e serenidade",
    },
    SummaryRule {
        keywords: &["equilíbrio", "organizado", "controle", "planejado", "estruturado"],
        sentence: "Período calmo com boa gestão do tempo e bem-estar geral",
    },
    SummaryRule {
        keywords: &["meditação", "mindfulness", "respiração"],
        sentence: "Semana serena com práticas de mindfulness e autoconhecimento",
    },
];

const CANSADO_RULES: [SummaryRule; 3] = [
    SummaryRule {
        keywords: &["trabalho", "exausto", "muito", "sobrecarga", "sobrecarregado"],
        sentence: "Período de cansaço devido ao excesso de atividades profissionais",
    },
    SummaryRule {
        keywords: &["dormir", "energia", "sono", "descanso", "repouso"],
        sentence: "Semana marcada por fadiga relacionada à falta de descanso adequado",
    },
    SummaryRule {
        keywords: &["físico", "mental", "esgotado"],
        sentence: "Período de esgotamento físico e mental, necessitando de pausa",
    },
];

const ESTRESSADO_RULES: [SummaryRule; 3] = [
    SummaryRule {
        keywords: &["conflito", "tensão", "difícil", "problema", "desafio"],
        sentence: "Semana estressante com tensões profissionais e desafios interpessoais",
    },
    SummaryRule {
        keywords: &["pressão", "tempo", "sobrecarga", "urgente", "correria"],
        sentence: "Período de estresse devido à sobrecarga e falta de organização",
    },
    SummaryRule {
        keywords: &["imprevisto", "mudança", "adaptação"],
        sentence: "Semana estressante com imprevistos e necessidade de adaptação",
    },
];

fn rules_for(emotion: Emotion) -> (&'static [SummaryRule; 3], &'static str) {
    match emotion {
        Emotion::Feliz => (&FELIZ_RULES, "Semana positiva com bem-estar geral"),
        Emotion::Ansioso => (
            &ANSIOSO_RULES,
            "Período ansioso com dificuldade de relaxar e descansar",
        ),
        Emotion::Calmo => (&CALMO_RULES, "Período de calma e estabilidade emocional"),
        Emotion::Cansado => (
            &CANSADO_RULES,
            "Período de cansaço que requer atenção ao descanso e recuperação",
        ),
        Emotion::Estressado => (
            &ESTRESSADO_RULES,
            "Período estressante que requer estratégias de gerenciamento de estresse",
        ),
    }
}

/// Produce the weekly summary sentence.
///
/// Joins the non-empty texts, lower-cases them, and walks the predominant
/// emotion's ordered rule list; the first rule with a keyword hit wins,
/// otherwise the emotion's default sentence. `Misto` and unrecognized labels
/// fall back to [`GENERIC_SUMMARY`]. Pure: output depends only on the text
/// contents and the predominant label, never on iteration order.
pub fn summarize(texts: &[String], predominant_label: &str) -> String {
    let joined = texts
        .iter()
        .filter(|t| !t.trim().is_empty())
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(". ")
        .to_lowercase();

    match Predominant::from_label(predominant_label) {
        Predominant::Emotion(emotion) => {
            let (rules, default) = rules_for(emotion);
            rules
                .iter()
                .find(|rule| contains_any(&joined, rule.keywords))
                .map(|rule| rule.sentence)
                .unwrap_or(default)
                .to_string()
        }
        Predominant::Mixed | Predominant::Unrecognized => GENERIC_SUMMARY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn feliz_with_productivity_keywords_hits_the_accomplishment_rule() {
        let summary = summarize(
            &texts(&["Finalizei o projeto", "dia produtivo"]),
            "Feliz",
        );
        assert_eq!(
            summary,
            "Semana positiva com foco em produtividade e realizações"
        );
    }

    #[test]
    fn first_matching_rule_wins_in_order() {
        // "trabalho" (rule 1) and "medo" (rule 3) both present; rule order decides.
        let summary = summarize(&texts(&["trabalho acumulado e medo do futuro"]), "Ansioso");
        assert_eq!(
            summary,
            "Período de ansiedade devido à sobrecarga de trabalho e pressão"
        );
    }

    #[test]
    fn no_keyword_hit_falls_back_to_the_emotion_default() {
        let summary = summarize(&texts(&["dia comum, nada a relatar"]), "Calmo");
        assert_eq!(summary, "Período de calma e estabilidade emocional");
    }

    #[test]
    fn mixed_and_unrecognized_yield_the_generic_sentence() {
        assert_eq!(summarize(&texts(&["qualquer coisa"]), "Misto"), GENERIC_SUMMARY);
        assert_eq!(summarize(&texts(&["qualquer coisa"]), "???"), GENERIC_SUMMARY);
    }

    #[test]
    fn empty_texts_are_ignored() {
        let summary = summarize(&texts(&["", "   ", "muita sobrecarga no trabalho"]), "Cansado");
        assert_eq!(
            summary,
            "Período de cansaço devido ao excesso de atividades profissionais"
        );
    }

    #[test]
    fn predominant_label_match_is_case_insensitive() {
        let summary = summarize(&texts(&["paz e relaxamento"]), "calmo");
        assert_eq!(summary, "Semana tranquila com momentos de descanso e serenidade");
    }
}
