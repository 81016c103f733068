// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缺少协议时补全的前缀
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// 规范化输入的URL
///
/// 空字符串或缺失返回 `None`；不以 `http` 开头的输入补全 `https://` 前缀，
/// 其余原样返回。这里不做进一步校验，格式错误的URL会在请求阶段失败。
pub fn normalize_url(input: Option<&str>) -> Option<String> {
    let url = input.filter(|u| !u.is_empty())?;
    if url.starts_with("http") {
        Some(url.to_string())
    } else {
        Some(format!("{}{}", DEFAULT_SCHEME_PREFIX, url))
    }
}
