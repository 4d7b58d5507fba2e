//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI in development only.

use utoipa::OpenApi;

use crate::api::handlers::customer_handler;
use crate::domain::Customer;

/// OpenAPI documentation for the Customer API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer API",
        version = "0.1.0",
        description = "Customer CRUD over a generic repository and unit of work",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        customer_handler::list_customers,
        customer_handler::get_customer_by_user_name,
        customer_handler::create_customer,
        customer_handler::update_customer,
        customer_handler::delete_customer,
    ),
    components(schemas(Customer)),
    tags(
        (name = "Customers", description = "Customer management operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_customer_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/customers"));
        assert!(doc.paths.paths.contains_key("/api/customers/{userName}"));
        assert!(doc.paths.paths.contains_key("/api/customers/{id}"));
    }
}
