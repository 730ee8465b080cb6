use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::client::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::dto::product::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::entities::client::ClientStatus;
use crate::errors::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Oficina API",
        version = "0.1.0",
        description = "Client registry and product catalog for the shop backend."
    ),
    paths(
        crate::handlers::clients::create_client,
        crate::handlers::clients::list_clients,
        crate::handlers::clients::get_client,
        crate::handlers::clients::update_client,
        crate::handlers::clients::delete_client,
        crate::handlers::products::create_product,
        crate::handlers::products::list_products,
        crate::handlers::products::get_product,
        crate::handlers::products::update_product,
        crate::handlers::products::delete_product,
    ),
    components(schemas(
        CreateClientRequest,
        UpdateClientRequest,
        ClientResponse,
        ClientStatus,
        CreateProductRequest,
        UpdateProductRequest,
        ProductResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Clients", description = "Client registry"),
        (name = "Products", description = "Product catalog")
    )
)]
pub struct ApiDoc;

/// Swagger UI mounted at /docs, serving the document at
/// /api-docs/openapi.json.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
