//! Request middleware.

pub mod trace;

use actix_web::middleware::DefaultHeaders;

pub use trace::Trace;

/// Headers letting browser clients on any origin call the API and read
/// resource timing.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::middleware::cross_origin_headers;
///
/// let app = App::new().wrap(cross_origin_headers());
/// ```
pub fn cross_origin_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Timing-Allow-Origin", "*"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use rstest::rstest;

    #[rstest]
    #[actix_web::test]
    async fn responses_carry_cross_origin_headers() {
        let app = actix_test::init_service(
            App::new()
                .wrap(cross_origin_headers())
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().to_request()).await;

        let headers = res.headers();
        assert_eq!(
            headers
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
        assert_eq!(
            headers.get("timing-allow-origin").and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}
