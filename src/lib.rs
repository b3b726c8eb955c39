mod appointment;
mod doctor;

pub mod assets;
pub mod database;
pub mod error;
pub mod models;
pub mod protocol;
pub mod settings;
pub mod utils;
pub mod wizard;

use actix_web::web;

use crate::error::ApiError;

/// Mounts the JSON API under `/api`. The caller provides `web::Data<Store>`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .configure(doctor::config)
            .configure(appointment::config),
    );
}
