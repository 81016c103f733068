// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use pagetext::config::settings::Settings;
use pagetext::domain::services::page_service::PageService;
use pagetext::presentation::routes;
use pagetext::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化日志、加载配置并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting pagetext...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(
        output_format = ?settings.extraction.output_format,
        timeout_secs = ?settings.fetch.timeout_secs,
        "Configuration loaded"
    );

    // 3. Build the page service shared by all requests
    let service = Arc::new(PageService::from_settings(&settings));
    let app = routes::routes(service);

    // 4. Start HTTP server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
