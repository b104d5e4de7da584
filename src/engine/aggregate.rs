//! Weekly aggregation: collapse a 7-day window of check-ins into a single
//! predominant emotion.

use super::emotion::{Emotion, Predominant};

/// Compute the predominant emotion of a check-in window.
///
/// - Empty window → `Calmo` (the neutral default).
/// - A full tie (every distinct emotion in the window at the same maximum
///   count) is reported as [`Predominant::Mixed`].
/// - A partial tie resolves to the first tied emotion in [`Emotion`]
///   declaration order, so the result depends only on the multiset of
///   emotions and never on input ordering.
pub fn predominant(emotions: &[Emotion]) -> Predominant {
    if emotions.is_empty() {
        return Predominant::Emotion(Emotion::Calmo);
    }

    let mut counts = [0usize; Emotion::ALL.len()];
    for emotion in emotions {
        counts[*emotion as usize] += 1;
    }

    let max = counts.iter().copied().max().unwrap_or(0);
    let distinct = counts.iter().filter(|&&c| c > 0).count();
    let tied = counts.iter().filter(|&&c| c == max).count();

    if tied > 1 && tied == distinct {
        return Predominant::Mixed;
    }

    Emotion::ALL
        .iter()
        .zip(counts.iter())
        .find(|(_, &count)| count == max)
        .map(|(emotion, _)| Predominant::Emotion(*emotion))
        .unwrap_or(Predominant::Emotion(Emotion::Calmo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Emotion::*;

    #[test]
    fn empty_window_defaults_to_calmo() {
        assert_eq!(predominant(&[]), Predominant::Emotion(Calmo));
    }

    #[test]
    fn clear_majority_wins() {
        assert_eq!(
            predominant(&[Feliz, Feliz, Calmo]),
            Predominant::Emotion(Feliz)
        );
    }

    #[test]
    fn full_tie_across_all_present_emotions_is_mixed() {
        assert_eq!(
            predominant(&[Feliz, Calmo, Ansioso, Cansado, Estressado]),
            Predominant::Mixed
        );
        // Two distinct emotions, both tied: also a full tie.
        assert_eq!(predominant(&[Feliz, Calmo]), Predominant::Mixed);
    }

    #[test]
    fn partial_tie_resolves_by_declaration_order() {
        // Calmo and Estressado tie at 2, Ansioso trails with 1; not all
        // distinct emotions are tied, so declaration order picks Calmo.
        assert_eq!(
            predominant(&[Estressado, Calmo, Ansioso, Calmo, Estressado]),
            Predominant::Emotion(Calmo)
        );
    }

    #[test]
    fn result_is_order_independent() {
        let a = predominant(&[Feliz, Cansado, Feliz, Cansado, Ansioso]);
        let b = predominant(&[Ansioso, Cansado, Cansado, Feliz, Feliz]);
        assert_eq!(a, b);
        assert_eq!(a, Predominant::Emotion(Feliz));
    }

    #[test]
    fn single_checkin_wins_outright() {
        assert_eq!(predominant(&[Estressado]), Predominant::Emotion(Estressado));
    }
}
