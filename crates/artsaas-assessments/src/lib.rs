//! artsaas-assessments
//!
//! Mental-health screening instruments (PHQ-9, GAD-7). Pure data and
//! arithmetic — no storage or HTTP dependency. Defines the fixed question
//! catalogs, severity banding tables, and the scoring pipeline that turns a
//! completed questionnaire into a stored assessment record.

pub mod error;
pub mod instruments;
pub mod record;
pub mod scoring;
pub mod submit;

use scoring::{Question, SeverityBand};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9", "gad7").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9", "GAD-7").
    fn name(&self) -> &str;

    /// The fixed question catalog, in presentation order.
    fn questions(&self) -> &[Question];

    /// Severity banding table. Bands are inclusive, non-overlapping, and
    /// partition [0, max_score] with no gaps.
    fn bands(&self) -> &[SeverityBand];

    /// Highest achievable subscale score.
    fn max_score(&self) -> u32 {
        self.questions().len() as u32 * u32::from(scoring::MAX_RESPONSE_VALUE)
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
