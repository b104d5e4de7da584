//! Weekly recommendation: one fixed advice sentence per predominant emotion.

use super::emotion::{Emotion, Predominant};

/// Map the predominant emotion to its advice sentence. Six possible outputs,
/// pure and idempotent.
pub fn recommend(predominant_label: &str) -> &'static str {
    match Predominant::from_label(predominant_label) {
        Predominant::Emotion(Emotion::Feliz) => {
            "Continue mantendo atividades que trazem bem-estar. Considere registrar o que funcionou bem para replicar no futuro."
        }
        Predominant::Emotion(Emotion::Ansioso) => {
            "Pratique técnicas de respiração e mindfulness. Organize suas tarefas por prioridade e considere dividir objetivos grandes em etapas menores."
        }
        Predominant::Emotion(Emotion::Calmo) => {
            "Mantenha os hábitos que estão trazendo tranquilidade. Continue com práticas de autocuidado e organização."
        }
        Predominant::Emotion(Emotion::Cansado) => {
            "Priorize o descanso e o sono adequado. Considere revisar sua rotina para evitar sobrecarga e estabelecer limites saudáveis."
        }
        Predominant::Emotion(Emotion::Estressado) => {
            "Identifique as principais fontes de estresse e desenvolva estratégias de enfrentamento. Pratique exercícios físicos e técnicas de relaxamento regularmente."
        }
        Predominant::Mixed | Predominant::Unrecognized => {
            "Continue monitorando suas emoções e identifique padrões que possam ser melhorados."
        }
    }
}
