// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 提取服务（extraction_service）：从 HTML 中提取正文
/// - 页面服务（page_service）：规范化URL、抓取页面并提取正文
pub mod extraction_service;
pub mod page_service;
