// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 批量分析聚合统计
///
/// 每批次全新计算，不做增量更新。无任何成功记录时返回独立的
/// NoSuccess形态：数值字段整体缺席，而不是置零或NaN
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AggregateStats {
    Computed {
        total_urls: usize,
        successful_analyses: usize,
        failed_analyses: usize,
        avg_load_time: f64,
        fastest_load_time: f64,
        slowest_load_time: f64,
        avg_content_length: f64,
        total_content_analyzed: f64,
    },
    NoSuccess {
        total_urls: usize,
        successful_analyses: usize,
        failed_analyses: usize,
        error: String,
    },
}

impl AggregateStats {
    pub fn total(&self) -> usize {
        match self {
            Self::Computed { total_urls, .. } | Self::NoSuccess { total_urls, .. } => *total_urls,
        }
    }

    pub fn successful(&self) -> usize {
        match self {
            Self::Computed {
                successful_analyses,
                ..
            }
            | Self::NoSuccess {
                successful_analyses,
                ..
            } => *successful_analyses,
        }
    }

    pub fn failed(&self) -> usize {
        match self {
            Self::Computed {
                failed_analyses, ..
            }
            | Self::NoSuccess {
                failed_analyses, ..
            } => *failed_analyses,
        }
    }
}
