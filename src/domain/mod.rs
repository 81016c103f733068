// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// - 领域模型（models）：页面结果
/// - 服务（services）：正文提取与页面文本加载流程
pub mod models;
pub mod services;
