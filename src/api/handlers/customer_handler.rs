//! Customer handlers.
//!
//! Thin translation between HTTP and [`CustomerService`](crate::services::CustomerService).

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use crate::api::extractors::{JsonBody, PathParam};
use crate::api::AppState;
use crate::domain::Customer;
use crate::errors::AppResult;

/// Create customer routes
///
/// `GET` and `DELETE` share the `/api/customers/:key` pattern: the segment
/// is a user name for lookups and a numeric ID for deletes.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/customers",
            get(list_customers).post(create_customer).put(update_customer),
        )
        .route(
            "/api/customers/:key",
            get(get_customer_by_user_name).delete(delete_customer),
        )
}

/// List all customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "All customers", body = Vec<Customer>),
        (status = 500, description = "Store error")
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.customer_service.list_customers().await?;
    Ok(Json(customers))
}

/// Get customer by user name
#[utoipa::path(
    get,
    path = "/api/customers/{userName}",
    tag = "Customers",
    params(
        ("userName" = String, Path, description = "Customer user name")
    ),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 204, description = "No customer with that user name"),
        (status = 500, description = "Store error")
    )
)]
pub async fn get_customer_by_user_name(
    State(state): State<AppState>,
    PathParam(user_name): PathParam<String>,
) -> AppResult<Response> {
    let response = match state.customer_service.get_by_user_name(&user_name).await? {
        Some(customer) => Json(customer).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };

    Ok(response)
}

/// Create a customer
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Customers",
    request_body = Customer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Malformed body"),
        (status = 409, description = "User name already taken"),
        (status = 500, description = "Store error")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    JsonBody(customer): JsonBody<Customer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let created = state.customer_service.create_customer(customer).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a customer (matched by `id` in the body)
#[utoipa::path(
    put,
    path = "/api/customers",
    tag = "Customers",
    request_body = Customer,
    responses(
        (status = 200, description = "Affected record count", body = u64),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "No customer with that id"),
        (status = 500, description = "Store error")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    JsonBody(customer): JsonBody<Customer>,
) -> AppResult<Json<u64>> {
    let affected = state.customer_service.update_customer(customer).await?;
    Ok(Json(affected))
}

/// Delete a customer by ID
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Affected record count", body = u64),
        (status = 400, description = "ID is not an integer"),
        (status = 404, description = "No customer with that id"),
        (status = 500, description = "Store error")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<u64>> {
    let affected = state.customer_service.delete_customer(id).await?;
    Ok(Json(affected))
}
