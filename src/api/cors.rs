//! Cross-origin policy for the browser client

use actix_cors::Cors;
use actix_web::http::{header, Method, Uri};
use tracing::warn;

/// Origins the server accepts cross-origin requests from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

/// Normalize configured origins.
///
/// Entries are trimmed; blank and unparseable ones are dropped with a
/// warning. No configured entries, or a `*` entry, means any origin.
pub fn parse_origins(origins: &[String]) -> CorsOrigins {
    let mut allowed = Vec::new();
    let mut configured = false;

    for origin in origins.iter().map(|o| o.trim()).filter(|o| !o.is_empty()) {
        configured = true;
        if origin == "*" {
            return CorsOrigins::Any;
        }
        match origin.parse::<Uri>() {
            Ok(_) => allowed.push(origin.to_string()),
            Err(e) => warn!("CORS: ignoring invalid origin {:?}: {}", origin, e),
        }
    }

    if configured {
        CorsOrigins::List(allowed)
    } else {
        CorsOrigins::Any
    }
}

/// Build the CORS middleware from the configured origin list
pub fn build_cors(origins: &[String]) -> Cors {
    match parse_origins(origins) {
        CorsOrigins::Any => Cors::permissive(),
        CorsOrigins::List(allowed) => allowed
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec![Method::GET, Method::POST])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(3600),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    fn origins(list: &[&str]) -> Vec<String> {
        list.iter().map(|o| o.to_string()).collect()
    }

    #[::core::prelude::v1::test]
    fn test_parse_origins() {
        assert_eq!(parse_origins(&[]), CorsOrigins::Any);
        assert_eq!(parse_origins(&origins(&["  "])), CorsOrigins::Any);
        assert_eq!(parse_origins(&origins(&["http://a", "*"])), CorsOrigins::Any);
        assert_eq!(
            parse_origins(&origins(&["http://a", " http://b", "not a uri"])),
            CorsOrigins::List(origins(&["http://a", "http://b"]))
        );
    }

    #[actix_rt::test]
    async fn test_untrimmed_and_invalid_origins_still_start() {
        let cors = build_cors(&origins(&["http://a", " http://b", "not a uri"]));
        let app = test::init_service(
            App::new()
                .wrap(cors)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://b"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://b"
        );
    }
}
