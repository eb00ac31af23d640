use axum_helpers::JwtAuth;
use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_catalog::PgCatalogRepository;
use domain_users::PgUserRepository;
use filmregister_api::{api, config::Config, openapi, seed::Seeder, state::AppState};
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before any fallible operation, so startup errors are reported in color
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name).await?;

    let jwt = JwtAuth::new(&config.jwt);

    if let Some(profile) = config.seed_profile {
        let seeder = Seeder::new(
            PgCatalogRepository::new(db.clone()),
            PgUserRepository::new(db.clone()),
            jwt.clone(),
        );
        // Best effort: a failed seed leaves the service usable
        if let Err(e) = seeder.run(profile).await {
            warn!("Sample data loading failed: {:#}", e);
        }
    }

    let state = AppState { config, db, jwt };

    let api_routes = api::routes(&state);

    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &state.config.cors);

    // /health: liveness with app name/version
    // /ready: readiness with a database round trip
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!("Starting Film Register API (30s graceful shutdown timeout)");

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            match state.db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Film Register API shutdown complete");
    Ok(())
}
