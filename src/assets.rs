use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};

use crate::settings::Settings;

pub const INDEX_FILE: &str = "index.html";

/// Static front end mounted at `/`, register it after the API scope. Paths
/// with no file behind them get the index page.
pub fn files(settings: &Settings) -> Option<Files> {
    let dir = settings.static_dir.clone()?;
    let index = dir.join(INDEX_FILE);

    let files = Files::new("/", &dir)
        .index_file(INDEX_FILE)
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(index).await?;
                let res = file.into_response(&req);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }));
    Some(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use actix_web::{http::StatusCode, test, App};

    use super::*;

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let dir = std::env::temp_dir().join(format!("hospital-booking-assets-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(INDEX_FILE), "<h1>booking</h1>").unwrap();
        let settings = Settings {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: Some(dir.clone()),
        };

        let app = test::init_service(App::new().service(files(&settings).unwrap())).await;
        for uri in ["/", "/book/step-2"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(test::read_body(resp).await, "<h1>booking</h1>");
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[::core::prelude::v1::test]
    fn nothing_to_mount_without_directory() {
        let settings = Settings {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: None,
        };
        assert!(files(&settings).is_none());
    }
}
