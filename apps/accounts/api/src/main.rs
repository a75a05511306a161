use accounts_api::{api, build_app, config::Config, state::AppState};
use axum_helpers::{JwtAuth, create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::PostgresUserQueryGateway;
use migration::Migrator;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

    let cors = config.cors.clone().into_layer()?;
    let jwt_auth = JwtAuth::new(&config.jwt);

    let state = AppState {
        config,
        db,
        jwt_auth,
    };

    let gateway = PostgresUserQueryGateway::new(state.db.clone());
    let app = build_app(
        gateway,
        state.jwt_auth.clone(),
        cors,
        state.config.app,
        api::ready_router(state.clone()),
    );

    info!(
        "Starting {} v{}",
        state.config.app.name, state.config.app.version
    );

    let server = state.config.server.clone();
    create_production_app(app, &server, async move {
        info!("Shutting down: closing database connections");
        if let Err(e) = database::postgres::close(state.db).await {
            tracing::error!("Error closing PostgreSQL: {}", e);
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Accounts API shutdown complete");
    Ok(())
}
