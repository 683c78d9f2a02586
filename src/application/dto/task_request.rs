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

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::models::task::{AnalysisType, DataOperation, ExtractMode};

/// 任务请求数据传输对象
///
/// 用于封装客户端提交的任务类型和任务载荷
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaskRequestDto {
    /// 任务类型名称
    pub task_type: String,
    /// 任务载荷，按任务类型解释
    #[serde(default)]
    pub task_data: Value,
}

/// web_scraping任务载荷
#[derive(Debug, Deserialize, Validate)]
pub struct WebScrapingPayload {
    /// 要提取的URL列表
    #[validate(length(min = 1, message = "At least one URL is required"))]
    pub urls: Vec<String>,
    /// 提取模式
    #[serde(default)]
    pub extract_type: ExtractMode,
}

/// data_processing任务载荷
#[derive(Debug, Deserialize, Validate)]
pub struct DataProcessingPayload {
    /// 待统计的数据批次
    #[validate(length(min = 1, message = "data must not be empty"))]
    pub data: Vec<Value>,
    /// 统计操作
    #[serde(default)]
    pub operation: DataOperation,
}

/// url_analysis任务载荷
#[derive(Debug, Deserialize, Validate)]
pub struct UrlAnalysisPayload {
    /// 要分析的URL列表
    #[validate(length(min = 1, message = "At least one URL is required"))]
    pub urls: Vec<String>,
    /// 分析深度
    #[serde(default)]
    pub analysis_type: AnalysisType,
}
