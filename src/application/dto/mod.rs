// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 页面查询参数以及兼容格式、带标签格式两种响应
pub mod page_query;
pub mod page_response;
