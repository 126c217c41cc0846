use std::sync::LazyLock;

use crate::scoring::{Question, Severity, SeverityBand};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder seven-item screen.
/// Each item rated 0–3 over the last two weeks. Total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            let items = [
                ("gad1", "Feeling nervous, anxious, or on edge", "Nervousness"),
                (
                    "gad2",
                    "Not being able to stop or control worrying",
                    "Control",
                ),
                (
                    "gad3",
                    "Worrying too much about different things",
                    "Worry",
                ),
                ("gad4", "Trouble relaxing", "Relaxation"),
                (
                    "gad5",
                    "Being so restless that it is hard to sit still",
                    "Restlessness",
                ),
                (
                    "gad6",
                    "Becoming easily annoyed or irritable",
                    "Irritability",
                ),
                (
                    "gad7",
                    "Feeling afraid as if something awful might happen",
                    "Fear",
                ),
            ];

            items
                .iter()
                .map(|(id, text, category)| Question {
                    id: id.to_string(),
                    text: text.to_string(),
                    category: category.to_string(),
                })
                .collect()
        });
        &QUESTIONS
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: LazyLock<Vec<SeverityBand>> = LazyLock::new(|| {
            [
                (0, 4, Severity::None, "Minimal anxiety"),
                (5, 9, Severity::Mild, "Mild anxiety"),
                (10, 14, Severity::Moderate, "Moderate anxiety"),
                (15, 21, Severity::Severe, "Severe anxiety"),
            ]
            .iter()
            .map(|(min, max, severity, label)| SeverityBand {
                min: *min,
                max: *max,
                severity: *severity,
                label: label.to_string(),
            })
            .collect()
        });
        &BANDS
    }
}
