use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use artsaas_assessments::scoring::{response_options, Question, ResponseOption, SeverityBand};
use artsaas_assessments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
    question_count: usize,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    max_score: u32,
    questions: Vec<Question>,
    bands: Vec<SeverityBand>,
    response_options: Vec<ResponseOption>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
            question_count: i.questions().len(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        max_score: instrument.max_score(),
        questions: instrument.questions().to_vec(),
        bands: instrument.bands().to_vec(),
        response_options: response_options().to_vec(),
    }))
}
