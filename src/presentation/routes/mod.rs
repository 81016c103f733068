// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::page_service::PageService;
use crate::presentation::handlers::page_handler;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `service` - 所有请求共享的页面文本服务
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(service: Arc<PageService>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let page_routes = Router::new()
        .route("/", get(page_handler::get_page_text))
        .route("/v1/page", get(page_handler::get_page))
        .layer(Extension(service));

    Router::new()
        .merge(public_routes)
        .merge(page_routes)
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
