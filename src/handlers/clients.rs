use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};

use super::common::{validate_input, ApiJson};
use crate::dto::client::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::errors::ServiceError;
use crate::AppState;

pub fn clients_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client))
        .route("/", get(list_clients))
        .route("/:id", get(get_client))
        .route("/:id", put(update_client))
        .route("/:id", delete(delete_client))
}

/// Register a new client
#[utoipa::path(
    post,
    path = "/api/v1/clients",
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client created", body = ClientResponse),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::errors::ErrorResponse)
    ),
    tag = "Clients"
)]
pub(crate) async fn create_client(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateClientRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let created = state.clients.create_client(payload).await?;
    Ok((StatusCode::CREATED, Json(ClientResponse::from(created))))
}

/// List all clients
#[utoipa::path(
    get,
    path = "/api/v1/clients",
    responses(
        (status = 200, description = "Clients listed", body = [ClientResponse]),
        (status = 500, description = "Store failure", body = crate::errors::ErrorResponse)
    ),
    tag = "Clients"
)]
pub(crate) async fn list_clients(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let clients = state.clients.list_clients().await?;
    let responses: Vec<ClientResponse> = clients.into_iter().map(ClientResponse::from).collect();
    Ok(Json(responses))
}

/// Fetch a client by id
#[utoipa::path(
    get,
    path = "/api/v1/clients/{id}",
    params(("id" = i32, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client found", body = ClientResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Client not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Clients"
)]
pub(crate) async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let client = state.clients.get_client(id).await?;
    Ok(Json(ClientResponse::from(client)))
}

/// Merge the supplied fields into an existing client
#[utoipa::path(
    put,
    path = "/api/v1/clients/{id}",
    params(("id" = i32, Path, description = "Client id")),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Client updated", body = ClientResponse),
        (status = 400, description = "Invalid id or payload", body = crate::errors::ErrorResponse),
        (status = 404, description = "Client not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::errors::ErrorResponse)
    ),
    tag = "Clients"
)]
pub(crate) async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateClientRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let updated = state.clients.update_client(id, payload).await?;
    Ok(Json(ClientResponse::from(updated)))
}

/// Soft-delete a client
#[utoipa::path(
    delete,
    path = "/api/v1/clients/{id}",
    params(("id" = i32, Path, description = "Client id")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Client not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::errors::ErrorResponse)
    ),
    tag = "Clients"
)]
pub(crate) async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.clients.delete_client(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
