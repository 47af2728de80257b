//! Root banner endpoint

use axum::{Router, routing::get};

/// Create the root banner router
pub fn router() -> Router {
    Router::new().route("/", get(welcome))
}

/// Plain-text greeting kept for clients probing the API root.
async fn welcome() -> &'static str {
    "Welcome to the Product API"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn root_returns_banner() {
        let response = router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Welcome to the Product API");
    }
}
