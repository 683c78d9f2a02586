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

/// 任务类型
///
/// 封闭枚举，路由时穷尽匹配；新增任务类型是编译期检查的变更
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// 批量网页内容提取
    WebScraping,
    /// 通用数据统计分析
    DataProcessing,
    /// 批量URL分析与聚合
    UrlAnalysis,
}

impl TaskKind {
    /// 对外公布的任务类型名称列表
    pub const AVAILABLE: [&'static str; 3] = ["web_scraping", "data_processing", "url_analysis"];

    /// 按名称解析任务类型，未知名称返回None
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "web_scraping" => Some(Self::WebScraping),
            "data_processing" => Some(Self::DataProcessing),
            "url_analysis" => Some(Self::UrlAnalysis),
            _ => None,
        }
    }

    /// 任务类型名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebScraping => "web_scraping",
            Self::DataProcessing => "data_processing",
            Self::UrlAnalysis => "url_analysis",
        }
    }

    /// 路由目标名称，写入routing_info
    pub fn routed_to(&self) -> &'static str {
        match self {
            Self::WebScraping => "web_scraping_function",
            Self::DataProcessing => "data_processing_function",
            Self::UrlAnalysis => "url_analysis_function",
        }
    }
}

/// 内容提取模式
///
/// 未知模式一律解析为Raw：返回截断后的原始文档
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ExtractMode {
    /// 页面可见文本
    #[default]
    Text,
    /// 链接列表 (a[href])
    Links,
    /// 图片列表 (img[src])
    Images,
    /// 页面标题
    Title,
    /// 原始文档回退
    Raw,
}

impl From<String> for ExtractMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "text" => Self::Text,
            "links" => Self::Links,
            "images" => Self::Images,
            "title" => Self::Title,
            _ => Self::Raw,
        }
    }
}

impl ExtractMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Links => "links",
            Self::Images => "images",
            Self::Title => "title",
            Self::Raw => "raw",
        }
    }
}

/// URL分析深度
///
/// 未知名称解析为Basic（路由器的原始默认值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AnalysisType {
    /// 基础指标
    #[default]
    Basic,
    /// 基础指标加标题层级、外链数、SSL标记和响应头
    Comprehensive,
}

impl From<String> for AnalysisType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "comprehensive" => Self::Comprehensive,
            _ => Self::Basic,
        }
    }
}

impl AnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Comprehensive => "comprehensive",
        }
    }
}

/// 数据处理操作
///
/// 显式操作枚举，不做首元素类型嗅探分发。`Analyze`仅在批次中
/// 全部元素均为JSON数字时走数值统计分支，否则走文本统计分支；
/// 混合类型批次因此确定性地按文本处理。未知操作名解析为Sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DataOperation {
    /// 描述性统计
    #[default]
    Analyze,
    /// 有界转换回显：元素计数、类型分布和数值摘要
    Transform,
    /// 有界回显
    Sample,
}

impl From<String> for DataOperation {
    fn from(value: String) -> Self {
        match value.as_str() {
            "analyze" => Self::Analyze,
            "transform" => Self::Transform,
            _ => Self::Sample,
        }
    }
}

impl DataOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analyze => "analyze",
            Self::Transform => "transform",
            Self::Sample => "sample",
        }
    }
}
