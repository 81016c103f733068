// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::{rejection::QueryRejection, Extension, Json, Query};
use std::sync::Arc;

use crate::{
    application::dto::{
        page_query::PageQueryDto,
        page_response::{LegacyPageResponseDto, PageResponseDto},
    },
    domain::services::page_service::PageService,
    presentation::errors::AppError,
};

/// 加载指定URL的页面文本
///
/// `GET /?url=...`，返回兼容格式：成功时为 `html` 字段，
/// 失败或未提供URL时为 `text` 字段。目标站点的错误同样以 200 返回。
pub async fn get_page_text(
    Extension(service): Extension<Arc<PageService>>,
    query: Result<Query<PageQueryDto>, QueryRejection>,
) -> Result<Json<LegacyPageResponseDto>, AppError> {
    let Query(query) = query?;
    let result = service.load(query.url.as_deref()).await;
    Ok(Json(result.into()))
}

/// 加载指定URL的页面文本（带类型标签的结果）
///
/// `GET /v1/page?url=...`
pub async fn get_page(
    Extension(service): Extension<Arc<PageService>>,
    query: Result<Query<PageQueryDto>, QueryRejection>,
) -> Result<Json<PageResponseDto>, AppError> {
    let Query(query) = query?;
    let result = service.load(query.url.as_deref()).await;
    Ok(Json(result.into()))
}
