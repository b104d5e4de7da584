//! Emotion analysis engine: sentiment classification, weekly aggregation and
//! rule-based text generation.
//!
//! Everything in this module except [`analysis::AnalysisEngine`] is a pure
//! function over its inputs, with no I/O and no shared state, safe to call
//! concurrently from any number of request handlers.

pub mod aggregate;
pub mod analysis;
pub mod emotion;
pub mod recommend;
pub mod response;
pub mod summary;

pub use emotion::{Emotion, Predominant, Sentiment};

/// Errors that can cross the engine boundary. Everything else inside the
/// engine is total and cannot fail on well-typed input.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Emoção inválida: '{0}'. Valores aceitos: Feliz, Cansado/Cansada, Ansioso/Ansiosa, Calmo/Calma, Estressado/Estressada")]
    InvalidEmotion(String),

    #[error("Não há check-ins nos últimos 7 dias para gerar a análise")]
    NoCheckinData,
}
