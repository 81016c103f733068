// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 页面结果（page_result）：一次请求的URL与正文或失败描述
pub mod page_result;
