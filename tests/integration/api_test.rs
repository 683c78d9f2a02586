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

use axum::Extension;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use routrs::application::usecases::route_task::TaskRouter;
use routrs::config::settings::Settings;
use routrs::engines::reqwest_fetcher::ReqwestFetcher;
use routrs::engines::traits::PageFetcher;
use routrs::presentation::routes;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

fn app() -> Router {
    let settings = Settings::default();
    let fetcher: Arc<dyn PageFetcher> =
        Arc::new(ReqwestFetcher::new(settings.fetcher.user_agent.clone()));
    let router = Arc::new(TaskRouter::new(fetcher, &settings));

    routes::routes().layer(Extension(router))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// 健康检查测试
#[tokio::test]
async fn health_check_works() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn version_returns_crate_version() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// 未知任务类型以HTTP 200返回结构化失败
#[tokio::test]
async fn unknown_task_type_is_a_data_level_failure() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/tasks")
                .method("POST")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"task_type": "heavy_browser", "task_data": {}}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Unknown task type: heavy_browser");
    assert_eq!(body["available_types"].as_array().unwrap().len(), 3);
}

/// 空白任务类型不是HTTP错误：走标准的未知类型结果
#[tokio::test]
async fn blank_task_type_is_a_data_level_failure() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/tasks")
                .method("POST")
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"task_type": " ", "task_data": {}}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Unknown task type:  ");
    assert!(body["available_types"].as_array().is_some());
}

#[tokio::test]
async fn data_processing_round_trip_over_http() {
    let payload = json!({
        "task_type": "data_processing",
        "task_data": {"data": [2, 4, 6], "operation": "analyze"},
    });

    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/tasks")
                .method("POST")
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["task_type"], "data_processing");
    assert_eq!(body["result"]["result"]["mean"], 4.0);
    assert!(body["routing_info"]["processing_time"].as_f64().is_some());
}

#[tokio::test]
async fn missing_task_data_defaults_to_null_and_fails_in_the_delegate() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/tasks")
                .method("POST")
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"task_type": "url_analysis"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["task_type"], "url_analysis");
}
