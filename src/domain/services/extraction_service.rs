// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dom_smoothie::{Config, Readability, TextMode};
use html2text::render::text_renderer::TrivialDecorator;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::utils::html_text;

/// 超过该嵌套深度的文档不交给可读性算法与渲染器，直接收集纯文本
pub const MAX_NESTING_DEPTH: usize = 512;

/// 回退渲染的行宽，配合 `allow_width_overflow` 基本不折行
const RENDER_WIDTH: usize = 10_000;

/// 正文输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 带标题、列表等标记的 markdown 文本
    #[default]
    Markdown,
    /// 保留段落分隔的纯文本
    Formatted,
    /// 可读性算法给出的原始文本内容，空白合并为单个空格
    Raw,
}

impl From<OutputFormat> for TextMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => TextMode::Markdown,
            OutputFormat::Formatted => TextMode::Formatted,
            OutputFormat::Raw => TextMode::Raw,
        }
    }
}

/// 提取错误类型
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// 可读性算法失败
    #[error("readability failed: {0}")]
    Readability(String),
    /// HTML 转文本失败
    #[error("render failed: {0}")]
    Render(String),
}

/// 正文提取器特质
///
/// 输入原始 HTML，返回去除导航、广告等样板内容后的正文。
/// 找不到正文与提取失败不做区分，均返回 `None`。
pub trait ContentExtractor: Send + Sync {
    fn extract(&self, html: &str, format: OutputFormat) -> Option<String>;
}

/// 基于可读性算法的正文提取器
///
/// 算法无法定位正文时，去除样板元素后把整个文档渲染为纯文本
#[derive(Debug, Clone, Default)]
pub struct ReadabilityExtractor {
    /// 最多解析的元素数量，None 表示不限制
    pub max_elements: Option<usize>,
}

impl ReadabilityExtractor {
    pub fn new(max_elements: Option<usize>) -> Self {
        Self { max_elements }
    }

    fn readability(&self, html: &str, format: OutputFormat) -> Result<String, ExtractionError> {
        let mut config = Config {
            text_mode: format.into(),
            ..Default::default()
        };
        if let Some(max) = self.max_elements {
            config.max_elements_to_parse = max;
        }

        let mut readability = Readability::new(html, None, Some(config))
            .map_err(|e| ExtractionError::Readability(e.to_string()))?;
        let article = readability
            .parse()
            .map_err(|e| ExtractionError::Readability(e.to_string()))?;

        let text = article.text_content.to_string();
        Ok(match format {
            OutputFormat::Raw => html_text::collapse_whitespace(&text),
            _ => text,
        })
    }

    fn render(html: &str) -> Result<String, ExtractionError> {
        html2text::config::with_decorator(TrivialDecorator::new())
            .allow_width_overflow()
            .string_from_read(html_text::strip_boilerplate(html).as_bytes(), RENDER_WIDTH)
            .map_err(|e| ExtractionError::Render(e.to_string()))
    }

    fn fallback(&self, html: &str, format: OutputFormat) -> String {
        let text = Self::render(html).unwrap_or_else(|e| {
            debug!(error = %e, "Rendering failed, collecting flat text");
            html_text::flat_text(html)
        });
        match format {
            OutputFormat::Raw => html_text::collapse_whitespace(&text),
            OutputFormat::Markdown | OutputFormat::Formatted => text,
        }
    }
}

impl ContentExtractor for ReadabilityExtractor {
    fn extract(&self, html: &str, format: OutputFormat) -> Option<String> {
        let depth = html_text::nesting_depth(html);
        let text = if depth > MAX_NESTING_DEPTH {
            warn!(depth, "Document nested too deeply, collecting flat text");
            html_text::flat_text(html)
        } else {
            match self.readability(html, format) {
                Ok(text) if !text.trim().is_empty() => text,
                Ok(_) => {
                    debug!("Readability returned no text, falling back to body rendering");
                    self.fallback(html, format)
                }
                Err(e) => {
                    debug!(error = %e, "Readability failed, falling back to body rendering");
                    self.fallback(html, format)
                }
            }
        };

        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

/// 以默认 markdown 格式提取正文
pub fn extract_text(raw_html: &str) -> Option<String> {
    ReadabilityExtractor::default().extract(raw_html, OutputFormat::Markdown)
}
