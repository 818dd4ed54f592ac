use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::chat::handlers::handle_chat;
use crate::contact::handlers::handle_contact;
use crate::middleware::{api_log_middleware, handle_panic};
use crate::resume::handlers::handle_resume_download;
use crate::state::AppState;

/// The three API routes, without layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(handle_chat))
        .route("/api/contact", post(handle_contact))
        .route("/api/resume/download", get(handle_resume_download))
        .with_state(state)
}

/// Full application: API routes first, the asset router as fallback. Layers
/// go on after the merge so requests answered by the assets, unknown `/api`
/// paths included, are logged too.
pub fn build_app(state: AppState, assets: Router) -> Router {
    build_router(state)
        .merge(assets)
        // Layers wrap bottom-up: panics are turned into responses before the
        // request log sees them.
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(api_log_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::assets::{build_asset_router, AssetMode};
    use crate::config::Config;
    use crate::test_support::{capture_logs, FakeCompletion, FakeReply};

    #[tokio::test]
    async fn test_non_api_paths_reach_asset_router() {
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "<html>spa</html>").unwrap();
        let assets = build_asset_router(AssetMode::Production, dist.path(), dist.path()).unwrap();
        let state = AppState {
            llm: FakeCompletion::new(FakeReply::Text("")),
            config: Config::for_tests(dist.path().to_path_buf()),
        };
        let app = build_app(state, assets);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/contact").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>spa</html>");

        // API routes still win over the fallback.
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_logged() {
        let logs = capture_logs();
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "<html>spa</html>").unwrap();
        let assets = build_asset_router(AssetMode::Production, dist.path(), dist.path()).unwrap();
        let state = AppState {
            llm: FakeCompletion::new(FakeReply::Text("")),
            config: Config::for_tests(dist.path().to_path_buf()),
        };

        let response = build_app(state, assets)
            .oneshot(Request::builder().uri("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(logs.contents().contains("GET /api/unknown 200 in"));
    }
}
