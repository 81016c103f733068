// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 页面内容
///
/// 一次请求只会产生其中一种结果，正文与错误信息不会同时出现
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// 未提供URL，未发起网络请求
    Empty,
    /// 请求成功（2xx），携带提取出的正文；提取不到内容时为 None
    Extracted(Option<String>),
    /// 请求失败（非 2xx 或网络错误）的可读描述
    Failed(String),
}

/// 页面结果
///
/// 每次调用创建，不持久化
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// 规范化后的URL，未提供时为 None
    pub url: Option<String>,
    /// 页面内容
    pub content: PageContent,
}

impl PageResult {
    pub fn empty() -> Self {
        Self {
            url: None,
            content: PageContent::Empty,
        }
    }

    pub fn extracted(url: String, text: Option<String>) -> Self {
        Self {
            url: Some(url),
            content: PageContent::Extracted(text),
        }
    }

    pub fn failed(url: String, message: String) -> Self {
        Self {
            url: Some(url),
            content: PageContent::Failed(message),
        }
    }

    /// 目标站点返回非 2xx 状态码
    pub fn status_failed(url: String, status_code: u16) -> Self {
        Self::failed(
            url,
            format!("Request failed with status code: {}", status_code),
        )
    }

    /// 连接、DNS、超时等网络层错误
    pub fn transport_failed(url: String, reason: impl std::fmt::Display) -> Self {
        Self::failed(url, format!("Request failed: {}", reason))
    }
}
