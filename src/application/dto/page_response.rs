// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::page_result::{PageContent, PageResult};

/// 兼容格式的页面响应
///
/// 成功时正文放在 `html` 字段，失败或未提供URL时放在 `text` 字段：
///
/// ```json
/// {"url": "https://example.com", "html": "..."}
/// {"url": "https://example.com/missing", "text": "Request failed with status code: 404"}
/// {"url": null, "text": null}
/// ```
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LegacyPageResponseDto {
    /// 抓取成功
    Html {
        url: Option<String>,
        html: Option<String>,
    },
    /// 失败描述或空结果
    Text {
        url: Option<String>,
        text: Option<String>,
    },
}

impl From<PageResult> for LegacyPageResponseDto {
    fn from(result: PageResult) -> Self {
        let url = result.url;
        match result.content {
            PageContent::Empty => Self::Text { url, text: None },
            PageContent::Extracted(html) => Self::Html { url, html },
            PageContent::Failed(message) => Self::Text {
                url,
                text: Some(message),
            },
        }
    }
}

/// 带类型标签的页面结果
#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageOutcomeDto {
    /// 提取出的正文，可能为空
    Content { value: Option<String> },
    /// 失败描述
    Error { message: String },
    /// 未提供URL
    Empty,
}

/// 带类型标签的页面响应
///
/// `{"url": "...", "result": {"kind": "content", "value": "..."}}`
#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageResponseDto {
    pub url: Option<String>,
    pub result: PageOutcomeDto,
}

impl From<PageResult> for PageResponseDto {
    fn from(result: PageResult) -> Self {
        let outcome = match result.content {
            PageContent::Empty => PageOutcomeDto::Empty,
            PageContent::Extracted(value) => PageOutcomeDto::Content { value },
            PageContent::Failed(message) => PageOutcomeDto::Error { message },
        };
        Self {
            url: result.url,
            result: outcome,
        }
    }
}
