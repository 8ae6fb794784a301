//! Shared request and response types for REST API handlers.

use serde::{Deserialize, Serialize};

use crate::domain::ProcurementRecord;

/// Request body for record creation.
///
/// All fields are optional at the deserialization stage so that presence can
/// be validated in the handler with the required-fields error message, rather
/// than rejected by the JSON extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    pub produce_name: Option<String>,
    pub tonnage: Option<f64>,
    pub cost: Option<f64>,
}

/// Response for successful record creation.
#[derive(Debug, Serialize)]
pub struct CreateRecordResponse {
    pub message: &'static str,
    pub record: ProcurementRecord,
}
