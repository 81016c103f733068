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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::services::extraction_service::OutputFormat;

/// 应用程序配置设置
///
/// 包含服务器、页面抓取和正文提取的所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 页面抓取配置
    pub fetch: FetchSettings,
    /// 正文提取配置
    pub extraction: ExtractionSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 页面抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 请求超时时间（秒），未设置时使用 HTTP 客户端默认值
    pub timeout_secs: Option<u64>,
}

impl FetchSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// 正文提取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    /// 输出格式 (markdown, formatted, raw)
    pub output_format: OutputFormat,
    /// 最多解析的元素数量，未设置时不限制
    pub max_elements: Option<usize>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载代码默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 以及 `PAGETEXT__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PAGETEXT").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 仅使用代码内默认值构建配置
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default(
                "fetch.user_agent",
                concat!("Mozilla/5.0 (compatible; pagetext/", env!("CARGO_PKG_VERSION"), ")"),
            )?
            .set_default("extraction.output_format", "markdown")
    }
}
