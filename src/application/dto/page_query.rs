// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 页面文本查询参数
///
/// `url` 可以缺失或为空，此时不发起请求
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PageQueryDto {
    /// 要加载的网页URL，可省略协议
    pub url: Option<String>,
}
