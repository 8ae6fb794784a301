//! Procurement record handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;

use crate::api::types::{CreateRecordRequest, CreateRecordResponse};
use crate::api::ApiError;
use crate::domain::ProcurementRecord;
use crate::server::AppState;

/// GET /kgl/procurement - List all procurement records.
pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProcurementRecord>>, ApiError> {
    match state.store.read_all().await {
        Ok(records) => Ok(Json(records)),
        Err(e) => {
            error!(error = %e, "Failed to load procurement data");
            Err(ApiError::load_failed())
        }
    }
}

/// POST /kgl/procurement - Create a procurement record.
///
/// The extractor result is taken as a `Result` so that an unparseable body
/// is answered with the fixed invalid-payload message before any validation
/// or storage access.
pub async fn create_record(
    State(state): State<AppState>,
    payload: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateRecordResponse>), ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::invalid_payload())?;

    let produce_name = match request.produce_name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::missing_fields()),
    };
    let (Some(tonnage), Some(cost)) = (request.tonnage, request.cost) else {
        return Err(ApiError::missing_fields());
    };

    let record = ProcurementRecord::new(state.record_ids.next(), produce_name, tonnage, cost);

    if let Err(e) = state.store.append(record.clone()).await {
        error!(error = %e, "Failed to persist procurement record");
        return Err(ApiError::storage(e.to_string()));
    }

    Ok((
        StatusCode::CREATED,
        Json(CreateRecordResponse {
            message: "Procurement record added successfully",
            record,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;
    use std::sync::Arc;

    use crate::domain::RecordIdGenerator;
    use crate::store::{MockProcurementStore, StoreError};

    use super::*;

    fn state_with(store: MockProcurementStore) -> AppState {
        AppState {
            store: Arc::new(store),
            record_ids: Arc::new(RecordIdGenerator::new()),
        }
    }

    fn valid_request() -> CreateRecordRequest {
        CreateRecordRequest {
            produce_name: Some("Maize".to_string()),
            tonnage: Some(50.0),
            cost: Some(1200.0),
        }
    }

    #[tokio::test]
    async fn create_surfaces_write_failure_as_storage_error() {
        let mut store = MockProcurementStore::new();
        store.expect_append().returning(|_| {
            Err(StoreError::Write(std::io::Error::new(
                ErrorKind::PermissionDenied,
                "permission denied",
            )))
        });

        let result = create_record(State(state_with(store)), Ok(Json(valid_request()))).await;

        let error = result.err().unwrap();
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.message().contains("failed to write procurement data"));
    }

    #[tokio::test]
    async fn create_skips_storage_when_a_field_is_missing() {
        // No expectations registered: any store call would panic the mock.
        let store = MockProcurementStore::new();
        let request = CreateRecordRequest {
            produce_name: None,
            ..valid_request()
        };

        let result = create_record(State(state_with(store)), Ok(Json(request))).await;

        let error = result.err().unwrap();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "produceName, tonnage, and cost are required");
    }

    #[tokio::test]
    async fn create_rejects_empty_produce_name() {
        let store = MockProcurementStore::new();
        let request = CreateRecordRequest {
            produce_name: Some(String::new()),
            ..valid_request()
        };

        let result = create_record(State(state_with(store)), Ok(Json(request))).await;

        assert_eq!(result.err().unwrap().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_hides_read_failure_behind_fixed_message() {
        let mut store = MockProcurementStore::new();
        store.expect_read_all().returning(|| {
            Err(StoreError::Read(std::io::Error::new(
                ErrorKind::PermissionDenied,
                "permission denied",
            )))
        });

        let result = list_records(State(state_with(store))).await;

        let error = result.err().unwrap();
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Failed to load procurement data");
    }
}
