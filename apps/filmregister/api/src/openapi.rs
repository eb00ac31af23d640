use domain_catalog::{movies, reviews, watchlist};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Film Register API",
        version = "0.1.0",
        description = "Catalogue of movies and TV series with user reviews and watchlists"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/auth", api = domain_users::handlers::ApiDoc)
    ),
    modifiers(&CatalogDocs, &BearerAuth)
)]
pub struct ApiDoc;

/// Catalog paths are already absolute, so their docs are merged rather than nested.
struct CatalogDocs;

impl Modify for CatalogDocs {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.merge(movies::handlers::ApiDoc::openapi());
        openapi.merge(reviews::handlers::ApiDoc::openapi());
        openapi.merge(watchlist::handlers::ApiDoc::openapi());
    }
}

/// Registers the `bearerAuth` scheme referenced by protected operations.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/auth/register",
            "/auth/login",
            "/auth/me",
            "/movies",
            "/movies/search",
            "/movies/{id}",
            "/movies/{id}/reviews",
            "/reviews/{id}",
            "/users/me/reviews",
            "/watchlist",
            "/watchlist/movies/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearerAuth"));
    }
}
