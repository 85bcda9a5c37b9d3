/// Errors raised while scoring a set of responses.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    /// Confidence outside [0, 100], or not a finite number.
    #[error("invalid confidence value {value} at {}: expected a value in [0, 100]", describe_index(.index))]
    InvalidConfidenceValue { index: Option<usize>, value: f64 },
}

impl ScoringError {
    /// Attach the position of the offending response.
    pub fn at_index(self, index: usize) -> Self {
        match self {
            Self::InvalidConfidenceValue { value, .. } => Self::InvalidConfidenceValue {
                index: Some(index),
                value,
            },
        }
    }
}

fn describe_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("response #{i}"),
        None => "unknown position".to_string(),
    }
}
