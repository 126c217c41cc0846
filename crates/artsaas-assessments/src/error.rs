use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// One or more required questions are unanswered. Recoverable: surfaced
    /// to the caller as a validation message, nothing is scored.
    #[error("incomplete assessment: expected {expected} responses, got {answered}")]
    Incomplete { expected: usize, answered: usize },

    /// A response value is outside [0, 3] or not a whole number.
    #[error(
        "invalid response value {value} for question '{question_id}': \
         must be an integer from 0 to 3"
    )]
    InvalidResponseValue { question_id: String, value: f64 },

    /// A subscale score landed outside the instrument's banding table.
    /// Unreachable from validated responses; treated as an
    /// internal-consistency fault, never silently corrected.
    #[error("score {score} is out of range for {instrument} (maximum {max})")]
    ScoreOutOfRange {
        instrument: String,
        score: u32,
        max: u32,
    },
}
