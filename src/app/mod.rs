//! 应用层：用户 CRUD 与路由

pub mod users;

use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};

use crate::config::HttpConfig;
use crate::core::middleware::request_logging_middleware;
use users::{handler, AppState};

/// 创建路由并挂载中间件
pub fn build_router(state: AppState, http: &HttpConfig) -> Router {
    let router = Router::new()
        .route("/", get(handler::home))
        .route("/users", get(handler::list_users).post(handler::create_user))
        .route(
            "/users/:id",
            get(handler::get_user)
                .put(handler::update_user)
                .delete(handler::delete_user),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)));

    let router = if http.enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}
