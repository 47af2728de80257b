//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for every resource.
///
/// All three resources share one handler stack, so each nest re-uses the
/// documents domain's path set under its own mount point.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Store API",
        version = "0.1.0",
        description = "REST API for managing products, courses, and users over MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/products", api = domain_documents::ApiDoc),
        (path = "/courses", api = domain_documents::ApiDoc),
        (path = "/users", api = domain_documents::ApiDoc)
    ),
    tags(
        (name = "documents", description = "Schemaless document CRUD shared by every resource")
    )
)]
pub struct ApiDoc;
