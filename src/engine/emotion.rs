use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::EngineError;

/// Closed set of emotions a check-in can carry.
///
/// Declaration order is load-bearing: partial ties in the weekly aggregation
/// resolve to the first tied emotion in this order (see [`crate::engine::aggregate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "emotion", rename_all = "lowercase")]
pub enum Emotion {
    Feliz,
    Cansado,
    Ansioso,
    Calmo,
    Estressado,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Feliz,
        Emotion::Cansado,
        Emotion::Ansioso,
        Emotion::Calmo,
        Emotion::Estressado,
    ];

    /// Canonical (masculine) form, as stored and serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Feliz => "Feliz",
            Emotion::Cansado => "Cansado",
            Emotion::Ansioso => "Ansioso",
            Emotion::Calmo => "Calmo",
            Emotion::Estressado => "Estressado",
        }
    }

    /// Sentiment category is a function of the emotion alone, never of the
    /// check-in text.
    pub fn sentiment(self) -> Sentiment {
        match self {
            Emotion::Feliz => Sentiment::Positivo,
            Emotion::Calmo => Sentiment::Neutro,
            Emotion::Cansado | Emotion::Ansioso | Emotion::Estressado => Sentiment::Negativo,
        }
    }
}

impl FromStr for Emotion {
    type Err = EngineError;

    /// Lenient parse: trims, ignores case and accepts the feminine form of
    /// each gendered adjective ("Cansada" parses to [`Emotion::Cansado`],
    /// "Feliz" has a single form).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "feliz" => Ok(Emotion::Feliz),
            "cansado" | "cansada" => Ok(Emotion::Cansado),
            "ansioso" | "ansiosa" => Ok(Emotion::Ansioso),
            "calmo" | "calma" => Ok(Emotion::Calmo),
            "estressado" | "estressada" => Ok(Emotion::Estressado),
            _ => Err(EngineError::InvalidEmotion(raw.trim().to_string())),
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Emotion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Emotion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Sentiment category derived from an emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sentiment", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positivo,
    Neutro,
    Negativo,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positivo => "positivo",
            Sentiment::Neutro => "neutro",
            Sentiment::Negativo => "negativo",
        }
    }
}

/// Result of the weekly aggregation, and the value the summarizer and
/// recommender branch on.
///
/// `Unrecognized` never comes out of the aggregator; it covers free-form
/// labels read back from storage or training data, so that every consumer
/// matches exhaustively instead of falling through on a stray string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predominant {
    Emotion(Emotion),
    Mixed,
    Unrecognized,
}

impl Predominant {
    /// Parse a stored predominant-emotion label.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("misto") {
            return Predominant::Mixed;
        }
        match trimmed.parse() {
            Ok(emotion) => Predominant::Emotion(emotion),
            Err(_) => Predominant::Unrecognized,
        }
    }

    /// Label persisted with a weekly analysis and fed to the model adapter.
    pub fn as_label(&self) -> &'static str {
        match self {
            Predominant::Emotion(e) => e.as_str(),
            Predominant::Mixed => "Misto",
            Predominant::Unrecognized => "Desconhecido",
        }
    }
}

impl fmt::Display for Predominant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_feminine_variants() {
        assert_eq!("Cansada".parse::<Emotion>().unwrap(), Emotion::Cansado);
        assert_eq!("cansado".parse::<Emotion>().unwrap(), Emotion::Cansado);
        assert_eq!("Ansiosa".parse::<Emotion>().unwrap(), Emotion::Ansioso);
        assert_eq!("CALMA".parse::<Emotion>().unwrap(), Emotion::Calmo);
        assert_eq!("estressada".parse::<Emotion>().unwrap(), Emotion::Estressado);
    }

    #[test]
    fn parse_trims_and_ignores_case() {
        assert_eq!("  Feliz  ".parse::<Emotion>().unwrap(), Emotion::Feliz);
        assert_eq!("fElIz".parse::<Emotion>().unwrap(), Emotion::Feliz);
    }

    #[test]
    fn parse_rejects_unknown_values_listing_the_vocabulary() {
        let err = "radiante".parse::<Emotion>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("radiante"));
        for name in ["Feliz", "Cansado", "Ansioso", "Calmo", "Estressado"] {
            assert!(msg.contains(name), "missing {name} in: {msg}");
        }
    }

    #[test]
    fn parse_rejects_empty_and_whitespace() {
        assert!("".parse::<Emotion>().is_err());
        assert!("   ".parse::<Emotion>().is_err());
    }

    #[test]
    fn sentiment_table_is_exact() {
        assert_eq!(Emotion::Feliz.sentiment(), Sentiment::Positivo);
        assert_eq!(Emotion::Calmo.sentiment(), Sentiment::Neutro);
        assert_eq!(Emotion::Cansado.sentiment(), Sentiment::Negativo);
        assert_eq!(Emotion::Ansioso.sentiment(), Sentiment::Negativo);
        assert_eq!(Emotion::Estressado.sentiment(), Sentiment::Negativo);
    }

    #[test]
    fn predominant_label_round_trips() {
        assert_eq!(
            Predominant::from_label("Feliz"),
            Predominant::Emotion(Emotion::Feliz)
        );
        assert_eq!(Predominant::from_label("misto"), Predominant::Mixed);
        assert_eq!(Predominant::from_label("whatever"), Predominant::Unrecognized);
        assert_eq!(Predominant::Mixed.as_label(), "Misto");
    }

    #[test]
    fn serde_uses_lenient_parse() {
        let e: Emotion = serde_json::from_str("\"calma\"").unwrap();
        assert_eq!(e, Emotion::Calmo);
        assert_eq!(serde_json::to_string(&e).unwrap(), "\"Calmo\"");
        assert!(serde_json::from_str::<Emotion>("\"alegre\"").is_err());
    }
}
