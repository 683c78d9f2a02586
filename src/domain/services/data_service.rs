use anyhow::{bail, Result};
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashSet};

use crate::domain::models::task::DataOperation;

/// Sample操作回显的最大元素数
const SAMPLE_CAP: usize = 10;

/// Transform操作回显的最大元素数
const TRANSFORM_CAP: usize = 100;

/// 数据统计服务
///
/// 对通用数据批次执行描述性统计；纯函数，无I/O
pub struct DataAnalysisService;

impl DataAnalysisService {
    /// 执行数据处理操作
    ///
    /// Analyze在批次元素全部为JSON数字时产出数值统计，否则产出
    /// 文本长度统计；Transform产出有界回显加类型分布和数值摘要；
    /// Sample产出有界回显。空批次返回错误
    pub fn process(data: &[Value], operation: DataOperation) -> Result<Value> {
        if data.is_empty() {
            bail!("data must not be empty");
        }

        match operation {
            DataOperation::Analyze => {
                let numbers: Option<Vec<f64>> = data.iter().map(Value::as_f64).collect();
                match numbers {
                    Some(numbers) => Ok(numeric_stats(&numbers)),
                    None => Ok(text_stats(data)),
                }
            }
            DataOperation::Transform => {
                let numbers: Option<Vec<f64>> = data.iter().map(Value::as_f64).collect();
                // Summary covers numeric batches only
                let summary = match numbers {
                    Some(numbers) => numeric_stats(&numbers),
                    None => json!("No numeric data"),
                };

                Ok(json!({
                    "original_count": data.len(),
                    "processed_data": &data[..data.len().min(TRANSFORM_CAP)],
                    "data_types": type_counts(data),
                    "summary": summary,
                }))
            }
            DataOperation::Sample => Ok(json!({
                "operation": DataOperation::Sample.as_str(),
                "data_count": data.len(),
                "sample": &data[..data.len().min(SAMPLE_CAP)],
            })),
        }
    }
}

/// 按JSON类型统计元素分布，键序稳定
fn type_counts(data: &[Value]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for value in data {
        let name = match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        *counts.entry(name).or_insert(0) += 1;
    }
    counts
}

fn numeric_stats(numbers: &[f64]) -> Value {
    let total: f64 = numbers.iter().sum();
    let mean = total / numbers.len() as f64;
    let variance =
        numbers.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / numbers.len() as f64;
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    json!({
        "mean": mean,
        "std": variance.sqrt(),
        "min": min,
        "max": max,
        "median": median(numbers),
        "total": total,
    })
}

fn median(numbers: &[f64]) -> f64 {
    let mut sorted = numbers.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn text_stats(data: &[Value]) -> Value {
    let rendered: Vec<String> = data.iter().map(normalize).collect();
    let lengths: Vec<usize> = rendered.iter().map(|s| s.chars().count()).collect();
    let total_characters: usize = lengths.iter().sum();
    let unique: HashSet<&String> = rendered.iter().collect();

    json!({
        "total_items": data.len(),
        "avg_length": total_characters as f64 / data.len() as f64,
        "total_characters": total_characters,
        "unique_items": unique.len(),
    })
}

/// 字符串归一化：字符串取其内容，其余类型取JSON序列化形式
fn normalize(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
