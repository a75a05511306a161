use axum_helpers::SESSION_COOKIE;
use domain_users::handlers::COOKIE_AUTH;
use std::path::Path;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Accounts API",
        version = "0.1.0",
        description = "API exposing the authenticated user's account"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_users::handlers::URL, api = domain_users::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

/// Registers the session cookie as the `cookie_auth` security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            COOKIE_AUTH,
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

/// Write the pretty-printed OpenAPI document to `output`, creating parent
/// directories as needed.
pub fn write_openapi(output: &Path) -> eyre::Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&ApiDoc::openapi())?;
    std::fs::write(output, json)?;
    Ok(())
}
