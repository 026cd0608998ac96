use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::info;

use service::visit::domain::{NewVisit, VisitDetails};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/api/visits/{id}", tag = "visits",
    params(("id" = i32, Path, description = "Visit id")),
    responses(
        (status = 200, description = "Visit with client, mechanic and services", body = crate::openapi::VisitDoc),
        (status = 404, description = "Visit not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_visit(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<VisitDetails>, JsonApiError> {
    let Path(id) = id?;
    let visit = state.visits.get_visit(id).await?;
    Ok(Json(visit))
}

#[utoipa::path(
    post, path = "/api/visits", tag = "visits",
    request_body = crate::openapi::NewVisitDoc,
    responses(
        (status = 201, description = "Visit created", headers(("Location" = String, description = "URI of the new visit"))),
        (status = 400, description = "Invalid request or empty service list", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Client, mechanic or service not found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Visit id already exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_visit(
    State(state): State<ServerState>,
    body: Result<Json<NewVisit>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(new_visit) = body?;
    let visit_id = new_visit.visit_id;
    info!(visit_id, mechanic = %new_visit.mechanic_licence_number, "visit_create_request");
    state.visits.create_visit(new_visit).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/api/visits/{}", visit_id))]))
}
