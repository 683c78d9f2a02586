// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::stream::{self, StreamExt};
use std::future::Future;

/// 有界并发映射
///
/// 以min(批次大小, max_workers)的并发度执行操作，输出顺序与输入
/// 顺序一致（按位置回填，而不是按完成顺序）。各操作相互独立，
/// 单项失败不影响其他项
pub async fn map_bounded<I, T, F, Fut>(inputs: Vec<I>, max_workers: usize, op: F) -> Vec<T>
where
    F: FnMut(I) -> Fut,
    Fut: Future<Output = T>,
{
    if inputs.is_empty() {
        return Vec::new();
    }

    let limit = inputs.len().min(max_workers.max(1));
    stream::iter(inputs.into_iter().map(op))
        .buffered(limit)
        .collect()
        .await
}
