// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::application::dto::task_request::TaskRequestDto;
use crate::application::usecases::route_task::TaskRouter;

/// 任务路由端点
///
/// 响应就是路由器的结果：未知任务类型（含空白名称）和委托失败
/// 都以HTTP 200返回success:false，失败是数据而不是HTTP错误；
/// 只有无法解析的请求体走axum的JSON拒绝路径
pub async fn route_task(
    Extension(router): Extension<Arc<TaskRouter>>,
    Json(payload): Json<TaskRequestDto>,
) -> Json<Value> {
    Json(router.route(&payload.task_type, payload.task_data).await)
}
