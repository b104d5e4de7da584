//! Per-check-in response generation: keyword detection over the free text
//! selects between a keyword-reinforced and a generic template pool for the
//! check-in's emotion, then one sentence is drawn at random.

use rand::Rng;

use super::emotion::Emotion;

/// Positive-affect terms; reinforce the Feliz and Calmo pools.
pub const POSITIVE_WORDS: [&str; 9] = [
    "bom",
    "ótimo",
    "bem",
    "feliz",
    "alegre",
    "gratidão",
    "felicidade",
    "satisfeito",
    "satisfeita",
];

/// Anxiety terms; reinforce the Ansioso pool.
pub const ANXIETY_WORDS: [&str; 6] = [
    "ansioso",
    "nervoso",
    "preocupado",
    "medo",
    "tensão",
    "inquieto",
];

/// Stress terms; reinforce the Estressado pool.
pub const STRESS_WORDS: [&str; 5] = [
    "estressado",
    "pressão",
    "sobrecarregado",
    "exausto",
    "opressão",
];

/// Fatigue terms; reinforce the Cansado pool.
pub const FATIGUE_WORDS: [&str; 5] = ["cansado", "fadiga", "exausto", "sem energia", "esgotado"];

const FELIZ_REINFORCED: [&str; 4] = [
    "Que maravilha! Continue cultivando esses momentos positivos e celebrando suas conquistas.",
    "É incrível ver sua felicidade! Aproveite cada momento e compartilhe essa positividade.",
    "Que alegria! Momentos assim são preciosos - guarde essa sensação e celebre suas vitórias.",
    "Fantástico! Sua felicidade é contagiante. Continue valorizando esses momentos especiais.",
];

const FELIZ_GENERIC: [&str; 4] = [
    "É ótimo ver que você está feliz! Aproveite esse momento.",
    "Que bom saber que você está se sentindo bem! Aproveite essa sensação positiva.",
    "Fico feliz em saber que você está bem! Continue cultivando essa energia positiva.",
    "É maravilhoso ver sua felicidade! Aproveite cada instante desse sentimento.",
];

const CALMO_REINFORCED: [&str; 4] = [
    "Que bom que você está em paz! A calma é um estado precioso - aproveite para recarregar.",
    "É reconfortante saber que você está tranquilo. A serenidade é um presente - aproveite.",
    "Que maravilha sentir essa paz! Aproveite esse momento de calma para renovar suas energias.",
    "É ótimo ver você em paz! A calma é essencial - aproveite para se conectar consigo mesmo.",
];

const CALMO_GENERIC: [&str; 4] = [
    "É reconfortante saber que você está calmo. A serenidade é importante para o bem-estar.",
    "Que bom que você está tranquilo. A calma é um aliado importante para sua saúde mental.",
    "É ótimo ver que você está em paz. A serenidade ajuda muito no seu bem-estar diário.",
    "Fico feliz em saber que você está calmo. A tranquilidade é fundamental para você.",
];

const ANSIOSO_REINFORCED: [&str; 4] = [
    "Entendo que a ansiedade pode ser desafiadora. Tente respirações profundas e focar no presente.",
    "A ansiedade pode ser intensa. Respire fundo, conte até dez e tente focar no aqui e agora.",
    "Entendo sua ansiedade. Pratique respiração profunda e lembre-se: você está seguro no momento presente.",
    "A ansiedade é difícil, mas passageira. Tente técnicas de respiração e foque no que você pode controlar.",
];

const ANSIOSO_GENERIC: [&str; 4] = [
    "A ansiedade pode ser difícil. Que tal técnicas de respiração ou uma caminhada? É normal sentir-se assim.",
    "Entendo que a ansiedade é desafiadora. Tente fazer uma pausa e praticar algo que te acalme.",
    "A ansiedade pode ser intensa. Respire fundo, faça uma caminhada ou ouça uma música relaxante.",
    "É normal sentir ansiedade. Tente técnicas de respiração profunda ou uma atividade que te distraia.",
];

const ESTRESSADO_REINFORCED: [&str; 4] = [
    "O estresse pode ser esgotante. Faça uma pausa, pratique algo relaxante ou converse com alguém.",
    "O estresse é desgastante. Pare um momento, respire fundo e faça algo que te traga tranquilidade.",
    "Entendo que o estresse está pesado. Dê-se uma pausa, pratique algo que relaxe ou busque apoio.",
    "O estresse pode ser opressor. Tente fazer uma pausa, respirar fundo e fazer algo que te acalme.",
];

const ESTRESSADO_GENERIC: [&str; 4] = [
    "Entendo que está estressado. Tente identificar a causa e dê pequenos passos para aliviar a pressão.",
    "O estresse pode ser difícil. Faça uma pausa, identifique o que está causando e cuide-se.",
    "Entendo seu estresse. Tente fazer uma pausa, respirar fundo e dar pequenos passos para se sentir melhor.",
    "O estresse é desafiador. Identifique a causa, faça uma pausa e pratique algo que te relaxe.",
];

const CANSADO_REINFORCED: [&str; 4] = [
    "O cansaço pode ser um sinal de que precisa descansar. Priorize seu bem-estar e permita-se pausar.",
    "O cansaço é um aviso do seu corpo. Dê-se permissão para descansar e recarregar suas energias.",
    "Entendo que está cansado. O descanso é essencial - permita-se ter momentos de pausa e recuperação.",
    "O cansaço merece atenção. Priorize seu descanso e não se cobre tanto - você precisa recarregar.",
];

const CANSADO_GENERIC: [&str; 4] = [
    "É importante respeitar quando está cansado. Tente descansar adequadamente - o descanso é essencial.",
    "O cansaço é válido. Priorize seu descanso e não se cobre - você merece recarregar suas energias.",
    "É normal sentir cansaço. Dê-se permissão para descansar e cuidar do seu bem-estar físico e mental.",
    "O cansaço precisa ser respeitado. Tente descansar adequadamente e não se pressione tanto.",
];

/// True when any of the keywords occurs as a substring of `text`.
/// `text` must already be lower-cased; the keyword lists are.
pub(crate) fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

/// The keyword group whose presence in the text reinforces this emotion's
/// response. Feliz and Calmo share the positive-affect group.
fn reinforcing_keywords(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Feliz | Emotion::Calmo => &POSITIVE_WORDS,
        Emotion::Ansioso => &ANXIETY_WORDS,
        Emotion::Estressado => &STRESS_WORDS,
        Emotion::Cansado => &FATIGUE_WORDS,
    }
}

fn template_pool(emotion: Emotion, reinforced: bool) -> &'static [&'static str; 4] {
    match (emotion, reinforced) {
        (Emotion::Feliz, true) => &FELIZ_REINFORCED,
        (Emotion::Feliz, false) => &FELIZ_GENERIC,
        (Emotion::Calmo, true) => &CALMO_REINFORCED,
        (Emotion::Calmo, false) => &CALMO_GENERIC,
        (Emotion::Ansioso, true) => &ANSIOSO_REINFORCED,
        (Emotion::Ansioso, false) => &ANSIOSO_GENERIC,
        (Emotion::Estressado, true) => &ESTRESSADO_REINFORCED,
        (Emotion::Estressado, false) => &ESTRESSADO_GENERIC,
        (Emotion::Cansado, true) => &CANSADO_REINFORCED,
        (Emotion::Cansado, false) => &CANSADO_GENERIC,
    }
}

/// Generate the personalized reply for one check-in.
///
/// The random source is injected so callers can seed it: handlers pass
/// `rand::thread_rng()`, tests pass a seeded `StdRng` for reproducible
/// selection. Template sentences are fixed strings and carry no length
/// guarantee; callers needing a hard cap must truncate.
pub fn generate_response<R: Rng>(emotion: Emotion, text: &str, rng: &mut R) -> String {
    let lowered = text.to_lowercase();
    let reinforced = contains_any(&lowered, reinforcing_keywords(emotion));
    let pool = template_pool(emotion, reinforced);
    pool[rng.gen_range(0..pool.len())].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_rng_makes_selection_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = generate_response(Emotion::Feliz, "dia comum", &mut a);
        let second = generate_response(Emotion::Feliz, "dia comum", &mut b);
        assert_eq!(first, second);
    }

    #[test]
    fn keyword_hit_selects_the_reinforced_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let reply = generate_response(Emotion::Feliz, "Hoje foi um dia ÓTIMO", &mut rng);
            assert!(FELIZ_REINFORCED.contains(&reply.as_str()), "got: {reply}");
        }
    }

    #[test]
    fn no_keyword_hit_selects_the_generic_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let reply = generate_response(Emotion::Ansioso, "semana qualquer", &mut rng);
            assert!(ANSIOSO_GENERIC.contains(&reply.as_str()), "got: {reply}");
        }
    }

    #[test]
    fn calmo_reinforces_on_positive_words() {
        let mut rng = StdRng::seed_from_u64(3);
        let reply = generate_response(Emotion::Calmo, "me sinto bem e em paz", &mut rng);
        assert!(CALMO_REINFORCED.contains(&reply.as_str()));
    }

    #[test]
    fn detection_is_case_insensitive_substring() {
        assert!(contains_any("estou SEM ENERGIA hoje".to_lowercase().as_str(), &FATIGUE_WORDS));
        assert!(!contains_any("tudo tranquilo", &STRESS_WORDS));
    }

    #[test]
    fn every_pool_has_four_alternatives() {
        for emotion in Emotion::ALL {
            assert_eq!(template_pool(emotion, true).len(), 4);
            assert_eq!(template_pool(emotion, false).len(), 4);
        }
    }
}
