use std::sync::LazyLock;

use crate::scoring::{Question, Severity, SeverityBand};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, nine-item depression screen.
/// Each item rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            let items = [
                (
                    "phq1",
                    "Little interest or pleasure in doing things",
                    "Interest/Pleasure",
                ),
                ("phq2", "Feeling down, depressed, or hopeless", "Mood"),
                (
                    "phq3",
                    "Trouble falling or staying asleep, or sleeping too much",
                    "Sleep",
                ),
                ("phq4", "Feeling tired or having little energy", "Energy"),
                ("phq5", "Poor appetite or overeating", "Appetite"),
                (
                    "phq6",
                    "Feeling bad about yourself — or that you are a failure or \
                     have let yourself or your family down",
                    "Self-esteem",
                ),
                (
                    "phq7",
                    "Trouble concentrating on things, such as reading the \
                     newspaper or watching television",
                    "Concentration",
                ),
                (
                    "phq8",
                    "Moving or speaking so slowly that other people could have \
                     noticed? Or the opposite — being so fidgety or restless \
                     that you have been moving around a lot more than usual",
                    "Psychomotor",
                ),
                (
                    "phq9",
                    "Thoughts that you would be better off dead or of hurting \
                     yourself in some way",
                    "Suicidal ideation",
                ),
            ];

            items.iter().map(|(id, text, category)| question(id, text, category)).collect()
        });
        &QUESTIONS
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: LazyLock<Vec<SeverityBand>> = LazyLock::new(|| {
            vec![
                band(0, 4, Severity::None, "Minimal depression"),
                band(5, 9, Severity::Mild, "Mild depression"),
                band(10, 14, Severity::Moderate, "Moderate depression"),
                band(15, 19, Severity::ModeratelySevere, "Moderately severe depression"),
                band(20, 27, Severity::Severe, "Severe depression"),
            ]
        });
        &BANDS
    }
}

fn question(id: &str, text: &str, category: &str) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        category: category.to_string(),
    }
}

fn band(min: u32, max: u32, severity: Severity, label: &str) -> SeverityBand {
    SeverityBand {
        min,
        max,
        severity,
        label: label.to_string(),
    }
}
