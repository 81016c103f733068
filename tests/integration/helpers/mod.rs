// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use pagetext::config::settings::Settings;
use pagetext::domain::services::page_service::PageService;
use pagetext::presentation::routes;
use std::sync::Arc;

/// 使用默认配置创建测试服务器
pub fn create_test_server() -> TestServer {
    let mut settings = Settings::defaults().expect("default settings");
    // Keep failing fetches from hanging the suite
    settings.fetch.timeout_secs = Some(10);
    let service = Arc::new(PageService::from_settings(&settings));
    TestServer::new(routes::routes(service)).expect("Failed to start test server")
}
