// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含内容提取、页面分析、数据统计、批量聚合等核心业务逻辑
pub mod aggregation_service;
pub mod analysis_service;
pub mod data_service;
pub mod extraction_service;
pub mod scraping_service;
