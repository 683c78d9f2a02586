// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use routrs::domain::models::record::AnalysisRecord;
use routrs::domain::models::stats::AggregateStats;
use routrs::domain::services::aggregation_service::AggregationService;

fn ok_record(url: &str, load_time: f64, content_length: u64) -> AnalysisRecord {
    AnalysisRecord {
        url: url.to_string(),
        success: true,
        load_time,
        status_code: Some(200),
        content_length: Some(content_length),
        title: Some("Example".to_string()),
        meta_description: None,
        links_count: Some(4),
        images_count: Some(1),
        forms_count: Some(0),
        scripts_count: Some(2),
        text_length: Some(120),
        headings: None,
        external_links: None,
        has_ssl: None,
        response_headers: None,
        error: None,
    }
}

/// 分区不变量：成功数加失败数恒等于总数
#[test]
fn partition_counts_always_add_up() {
    let records = vec![
        ok_record("https://a.test", 0.2, 1000),
        AnalysisRecord::failed("https://b.test".into(), "timeout".into()),
        ok_record("https://c.test", 0.6, 3000),
        AnalysisRecord::failed("https://d.test".into(), "dns".into()),
    ];

    let stats = AggregationService::aggregate(&records);
    assert_eq!(stats.total(), 4);
    assert_eq!(stats.successful() + stats.failed(), stats.total());
    assert_eq!(stats.successful(), 2);
}

#[test]
fn average_stays_within_the_extremes() {
    let records = vec![
        ok_record("https://a.test", 0.1, 500),
        ok_record("https://b.test", 0.9, 1500),
        ok_record("https://c.test", 0.5, 1000),
    ];

    match AggregationService::aggregate(&records) {
        AggregateStats::Computed {
            avg_load_time,
            fastest_load_time,
            slowest_load_time,
            avg_content_length,
            total_content_analyzed,
            ..
        } => {
            assert!(fastest_load_time <= avg_load_time);
            assert!(avg_load_time <= slowest_load_time);
            assert_eq!(fastest_load_time, 0.1);
            assert_eq!(slowest_load_time, 0.9);
            assert_eq!(avg_content_length, 1000.0);
            assert_eq!(total_content_analyzed, 3000.0);
        }
        AggregateStats::NoSuccess { .. } => panic!("expected computed stats"),
    }
}

/// 聚合是纯函数：同一输入两次调用产出相同结果
#[test]
fn aggregation_is_deterministic() {
    let records = vec![
        ok_record("https://a.test", 0.25, 800),
        AnalysisRecord::failed("https://b.test".into(), "refused".into()),
    ];

    let first = AggregationService::aggregate(&records);
    let second = AggregationService::aggregate(&records);
    assert_eq!(first, second);
}

#[test]
fn no_success_shape_omits_numeric_fields() {
    let records = vec![
        AnalysisRecord::failed("https://a.test".into(), "timeout".into()),
        AnalysisRecord::failed("https://b.test".into(), "timeout".into()),
    ];

    let stats = AggregationService::aggregate(&records);
    let value = serde_json::to_value(&stats).unwrap();

    assert_eq!(value["total_urls"], 2);
    assert_eq!(value["successful_analyses"], 0);
    assert_eq!(value["failed_analyses"], 2);
    assert_eq!(value["error"], "No successful analyses");
    assert!(value.get("avg_load_time").is_none());
    assert!(value.get("fastest_load_time").is_none());
}
