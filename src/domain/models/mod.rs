// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 定义任务类型、提取记录和聚合统计等核心数据结构
pub mod record;
pub mod stats;
pub mod task;
