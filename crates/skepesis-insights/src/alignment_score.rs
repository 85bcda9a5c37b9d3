use skepesis_core::Response;

use crate::util::mean;

/// Continuous confidence/accuracy alignment in [0, 100].
///
/// Each response contributes its confidence when correct and
/// `100 − confidence` when wrong; the score is the mean. Unlike the boolean
/// alignment predicate there is no threshold. Empty input scores 0.
pub fn confidence_accuracy_alignment(responses: &[Response]) -> f64 {
    mean(responses.iter().map(|r| {
        if r.is_correct {
            r.confidence
        } else {
            100.0 - r.confidence
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_alignment() {
        let responses = [Response::new(100.0, true), Response::new(0.0, false)];
        assert_eq!(confidence_accuracy_alignment(&responses), 100.0);
    }

    #[test]
    fn inverted_alignment() {
        let responses = [Response::new(0.0, true), Response::new(100.0, false)];
        assert_eq!(confidence_accuracy_alignment(&responses), 0.0);
    }
}
