use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI document. The customers section doubles as the reference for the
/// record-management pattern shared by every other section.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hanbai-api",
        description = "Record-management API for sales operations: customers, suppliers, projects, quotes, sales orders, invoices and delivery notes.",
    ),
    paths(
        crate::handlers::auth::login,
        crate::handlers::auth::logout,
        crate::handlers::auth::me,
        crate::handlers::customers::list_customers,
        crate::handlers::customers::get_customer,
        crate::handlers::customers::create_customer,
        crate::handlers::customers::update_customer,
        crate::handlers::customers::delete_customer,
    ),
    components(schemas(
        crate::auth::LoginRequest,
        crate::auth::LoginResponse,
        crate::auth::UserInfo,
        crate::entities::customer::Model,
        crate::errors::ErrorResponse,
        crate::services::customers::CustomerInput,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Session management"),
        (name = "customers", description = "Customer master records"),
    )
)]
pub struct ApiDoc;

/// Swagger UI mounted at `/docs`, serving the document at
/// `/api-docs/openapi.json`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
