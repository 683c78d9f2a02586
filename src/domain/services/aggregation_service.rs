use crate::domain::models::record::AnalysisRecord;
use crate::domain::models::stats::AggregateStats;

/// 聚合服务
///
/// 将一批分析记录归约为汇总统计；纯函数，给定相同输入必然产出
/// 相同结果，记录顺序不影响统计值
pub struct AggregationService;

impl AggregationService {
    pub fn aggregate(records: &[AnalysisRecord]) -> AggregateStats {
        let total_urls = records.len();
        let successes: Vec<&AnalysisRecord> = records.iter().filter(|r| r.success).collect();
        let failed_analyses = total_urls - successes.len();

        if successes.is_empty() {
            return AggregateStats::NoSuccess {
                total_urls,
                successful_analyses: 0,
                failed_analyses,
                error: "No successful analyses".to_string(),
            };
        }

        let load_times: Vec<f64> = successes.iter().map(|r| r.load_time).collect();
        let content_lengths: Vec<f64> = successes
            .iter()
            .map(|r| r.content_length.unwrap_or(0) as f64)
            .collect();

        let total_content: f64 = content_lengths.iter().sum();
        AggregateStats::Computed {
            total_urls,
            successful_analyses: successes.len(),
            failed_analyses,
            avg_load_time: load_times.iter().sum::<f64>() / load_times.len() as f64,
            fastest_load_time: load_times.iter().copied().fold(f64::INFINITY, f64::min),
            slowest_load_time: load_times.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            avg_content_length: total_content / content_lengths.len() as f64,
            total_content_analyzed: total_content,
        }
    }
}
