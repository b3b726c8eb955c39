use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use hospital_booking::{assets, database::Store, settings::Settings};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;
    let store = web::Data::new(Store::seeded()?);

    match &settings.static_dir {
        Some(dir) => log::info!("Serving front end from {}", dir.display()),
        None => log::info!("No front-end directory, serving the API only"),
    }

    let bind = settings.bind_addr();
    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(hospital_booking::config);
        match assets::files(&settings) {
            Some(files) => app.service(files),
            None => app,
        }
    })
    .bind(bind.clone())
    .with_context(|| format!("Failed to bind {}:{}", bind.0, bind.1))?;

    log::info!("Server running on {}:{}", bind.0, bind.1);
    server.run().await.context("Server error")
}
