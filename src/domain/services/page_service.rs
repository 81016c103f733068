// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::settings::Settings;
use crate::domain::models::page_result::PageResult;
use crate::domain::services::extraction_service::{
    ContentExtractor, OutputFormat, ReadabilityExtractor,
};
use crate::engines::reqwest_engine::ReqwestEngine;
use crate::engines::traits::{FetchEngine, FetchRequest};
use crate::utils::url_utils::normalize_url;

/// 页面文本服务
///
/// 规范化URL、抓取页面并提取正文。服务本身不可变，
/// 可以在并发请求之间共享；每次抓取都由引擎单独创建 HTTP 客户端。
pub struct PageService {
    engine: Arc<dyn FetchEngine>,
    extractor: Arc<dyn ContentExtractor>,
    format: OutputFormat,
    user_agent: String,
    timeout: Option<Duration>,
}

impl PageService {
    pub fn new(
        engine: Arc<dyn FetchEngine>,
        extractor: Arc<dyn ContentExtractor>,
        format: OutputFormat,
        user_agent: String,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            engine,
            extractor,
            format,
            user_agent,
            timeout,
        }
    }

    /// 按配置组装 reqwest 引擎与可读性提取器
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Arc::new(ReqwestEngine),
            Arc::new(ReadabilityExtractor::new(settings.extraction.max_elements)),
            settings.extraction.output_format,
            settings.fetch.user_agent.clone(),
            settings.fetch.timeout(),
        )
    }

    /// 加载页面文本
    ///
    /// # 参数
    ///
    /// * `url` - 用户输入的URL，可能为空或缺少协议
    ///
    /// # 返回值
    ///
    /// 始终返回 `PageResult`；非 2xx 状态码与网络错误都转换为失败描述
    pub async fn load(&self, url: Option<&str>) -> PageResult {
        let Some(url) = normalize_url(url) else {
            debug!("No URL supplied, skipping fetch");
            return PageResult::empty();
        };

        let request = FetchRequest {
            url: url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: self.timeout,
        };

        info!(url = %url, engine = self.engine.name(), "Fetching page");
        let response = match self.engine.fetch(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, timeout = e.is_timeout(), error = %e, "Fetch failed");
                return PageResult::transport_failed(url, e);
            }
        };

        if !response.is_success() {
            warn!(url = %url, status_code = response.status_code, "Target returned error status");
            return PageResult::status_failed(url, response.status_code);
        }

        let text = self.extractor.extract(&response.content, self.format);
        match &text {
            Some(text) => info!(url = %url, chars = text.len(), "Extracted page text"),
            None => debug!(url = %url, "No content extracted"),
        }

        PageResult::extracted(url, text)
    }
}
