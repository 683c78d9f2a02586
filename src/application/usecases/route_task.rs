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

use anyhow::Result;
use metrics::counter;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use validator::Validate;

use crate::application::dto::task_request::{
    DataProcessingPayload, UrlAnalysisPayload, WebScrapingPayload,
};
use crate::config::settings::Settings;
use crate::domain::models::task::TaskKind;
use crate::domain::services::aggregation_service::AggregationService;
use crate::domain::services::data_service::DataAnalysisService;
use crate::domain::services::scraping_service::ScrapingService;
use crate::engines::traits::PageFetcher;

/// 任务路由器
///
/// 将任务描述分发到对应的处理函数并包装路由元数据。调用间无
/// 状态；协作方在构造时显式注入，库代码不触碰进程级环境。
/// 路由失败和委托失败都以success:false的结果返回，绝不向调用方
/// 抛出错误
pub struct TaskRouter {
    scraping: ScrapingService,
}

impl TaskRouter {
    pub fn new(fetcher: Arc<dyn PageFetcher>, settings: &Settings) -> Self {
        Self {
            scraping: ScrapingService::new(fetcher, settings),
        }
    }

    /// 路由任务
    ///
    /// 总是返回带success布尔字段的结构化结果，并记录委托调用的
    /// 墙钟耗时（秒，毫秒精度）
    pub async fn route(&self, task_type: &str, task_data: Value) -> Value {
        let Some(kind) = TaskKind::parse(task_type) else {
            warn!("Unknown task type: {}", task_type);
            counter!("routing_failures_total").increment(1);
            return json!({
                "success": false,
                "error": format!("Unknown task type: {}", task_type),
                "task_type": task_type,
                "available_types": TaskKind::AVAILABLE,
            });
        };

        let started = Instant::now();
        let outcome = match kind {
            TaskKind::WebScraping => self.run_web_scraping(task_data).await,
            TaskKind::DataProcessing => self.run_data_processing(task_data).await,
            TaskKind::UrlAnalysis => self.run_url_analysis(task_data).await,
        };
        let processing_time = round3(started.elapsed().as_secs_f64());

        match outcome {
            Ok(result) => {
                info!(
                    "Task {} routed to {} in {}s",
                    kind.as_str(),
                    kind.routed_to(),
                    processing_time
                );
                counter!("tasks_routed_total", "task_type" => kind.as_str()).increment(1);
                json!({
                    "success": true,
                    "task_type": kind.as_str(),
                    "result": result,
                    "routing_info": {
                        "processing_time": processing_time,
                        "routed_to": kind.routed_to(),
                    },
                })
            }
            Err(e) => {
                warn!("Task {} failed: {}", kind.as_str(), e);
                counter!("routing_failures_total").increment(1);
                json!({
                    "success": false,
                    "error": e.to_string(),
                    "task_type": kind.as_str(),
                    "processing_time": processing_time,
                })
            }
        }
    }

    async fn run_web_scraping(&self, task_data: Value) -> Result<Value> {
        let payload: WebScrapingPayload = serde_json::from_value(task_data)?;
        payload.validate()?;

        let total_urls = payload.urls.len();
        let records = self
            .scraping
            .extract_all(payload.urls, payload.extract_type)
            .await;
        let successful_extractions = records.iter().filter(|r| r.success).count();

        Ok(json!({
            "success": true,
            "results": records,
            "total_urls": total_urls,
            "successful_extractions": successful_extractions,
            "processing_info": {
                "extract_type": payload.extract_type.as_str(),
                "max_workers": self.scraping.max_workers(),
            },
        }))
    }

    async fn run_data_processing(&self, task_data: Value) -> Result<Value> {
        let payload: DataProcessingPayload = serde_json::from_value(task_data)?;
        payload.validate()?;

        let result = DataAnalysisService::process(&payload.data, payload.operation)?;

        Ok(json!({
            "success": true,
            "operation": payload.operation.as_str(),
            "result": result,
            "processing_info": {
                "timestamp": chrono::Utc::now().to_rfc3339(),
            },
        }))
    }

    async fn run_url_analysis(&self, task_data: Value) -> Result<Value> {
        let payload: UrlAnalysisPayload = serde_json::from_value(task_data)?;
        payload.validate()?;

        let records = self
            .scraping
            .analyze_all(payload.urls, payload.analysis_type)
            .await;
        let stats = AggregationService::aggregate(&records);

        Ok(json!({
            "success": true,
            "analysis_type": payload.analysis_type.as_str(),
            "aggregated_stats": stats,
            "detailed_results": records,
            "processing_info": {
                "parallel_processing": true,
                "max_workers": self.scraping.max_workers(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            },
        }))
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
