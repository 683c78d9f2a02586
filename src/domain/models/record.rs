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
use std::collections::HashMap;

/// 提取内容
///
/// 文本类模式（text/title/raw）产出字符串，列表类模式（links/images）
/// 产出字符串序列；序列化时不带标签，直接落入content字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedContent {
    Text(String),
    Entries(Vec<String>),
}

impl ExtractedContent {
    /// 内容长度：文本为字符数，列表为条目数
    pub fn len(&self) -> usize {
        match self {
            Self::Text(s) => s.chars().count(),
            Self::Entries(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 单URL提取记录
///
/// 创建后不再修改；失败记录只携带url和error，不携带content
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionRecord {
    pub url: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ExtractedContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionRecord {
    pub fn ok(
        url: String,
        content: ExtractedContent,
        status_code: u16,
        content_type: String,
    ) -> Self {
        Self {
            url,
            success: true,
            content: Some(content),
            status_code: Some(status_code),
            content_type: Some(content_type),
            error: None,
        }
    }

    pub fn failed(url: String, error: String) -> Self {
        Self {
            url,
            success: false,
            content: None,
            status_code: None,
            content_type: None,
            error: Some(error),
        }
    }
}

/// 标题层级计数（comprehensive模式）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
}

/// 单URL分析记录
///
/// 成功记录携带完整页面指标；失败记录只携带url、error和load_time=0。
/// 聚合器消费后即丢弃，不做任何保留
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    pub url: String,
    pub success: bool,
    /// 页面加载耗时（秒，保留3位小数；失败时为0）
    pub load_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// 响应体字节数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forms_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts_count: Option<usize>,
    /// 提取文本的字符数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headings: Option<HeadingCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_links: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisRecord {
    pub fn failed(url: String, error: String) -> Self {
        Self {
            url,
            success: false,
            load_time: 0.0,
            status_code: None,
            content_length: None,
            title: None,
            meta_description: None,
            links_count: None,
            images_count: None,
            forms_count: None,
            scripts_count: None,
            text_length: None,
            headings: None,
            external_links: None,
            has_ssl: None,
            response_headers: None,
            error: Some(error),
        }
    }
}
