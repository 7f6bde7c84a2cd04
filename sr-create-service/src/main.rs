use sr_create_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    tracing::info!(
        environment = %config.service.environment,
        base_path = %config.service.base_path,
        "Configuration loaded"
    );

    let state = AppState::remote(config.clone())?;
    let app = router(state);

    let result = Server::new(config).serve(app).await;
    shutdown_tracing();
    result
}
