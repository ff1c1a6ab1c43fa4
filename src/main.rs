use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use hotel_ops::{db, handlers, AppConfig, GuestLifecycle, RoomRegistry};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    log::info!("Connecting to database at {}...", config.database.url);
    let pool = db::get_db_pool(&config.database).await.map_err(|e| {
        log::error!("Failed to open database: {}", e);
        e
    })?;

    log::info!("Running migrations...");
    db::run_migrations(&pool).await.map_err(|e| {
        log::error!("Failed to create schema: {}", e);
        e
    })?;

    let lifecycle = web::Data::new(GuestLifecycle::new(pool.clone(), config.occupancy_policy));
    let registry = web::Data::new(RoomRegistry::new(pool));

    log::info!(
        "Starting server at http://{}:{} (occupancy policy: {:?})",
        config.host,
        config.port,
        config.occupancy_policy
    );

    HttpServer::new(move || {
        App::new()
            .app_data(lifecycle.clone())
            .app_data(registry.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
