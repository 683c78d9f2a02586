use scraper::{Html, Selector};

use crate::domain::models::record::{AnalysisRecord, HeadingCounts};
use crate::domain::models::task::AnalysisType;
use crate::engines::traits::FetchResponse;

use super::extraction_service::{page_text, page_title, truncate_chars};

/// meta_description截断上限（字符数）
const META_DESCRIPTION_CAP: usize = 200;

/// 页面分析服务
///
/// 将抓取响应转换为单URL分析记录；纯函数，无I/O
pub struct AnalysisService;

impl AnalysisService {
    /// 分析单个页面
    ///
    /// basic模式产出基础指标；comprehensive模式追加标题层级、
    /// 外链数、SSL标记和响应头
    pub fn analyze_page(
        url: &str,
        response: &FetchResponse,
        analysis_type: AnalysisType,
    ) -> AnalysisRecord {
        let document = Html::parse_document(&response.content);
        let text = page_text(&document);

        let mut record = AnalysisRecord {
            url: url.to_string(),
            success: true,
            load_time: round3(response.response_time_ms as f64 / 1000.0),
            status_code: Some(response.status_code),
            content_length: Some(response.content_length),
            title: Some(page_title(&document).unwrap_or_else(|| "No title".to_string())),
            meta_description: Some(meta_description(&document)),
            links_count: Some(count(&document, "a")),
            images_count: Some(count(&document, "img")),
            forms_count: Some(count(&document, "form")),
            scripts_count: Some(count(&document, "script")),
            text_length: Some(text.chars().count()),
            headings: None,
            external_links: None,
            has_ssl: None,
            response_headers: None,
            error: None,
        };

        if analysis_type == AnalysisType::Comprehensive {
            record.headings = Some(HeadingCounts {
                h1: count(&document, "h1"),
                h2: count(&document, "h2"),
                h3: count(&document, "h3"),
            });
            record.external_links = Some(external_links(&document, url));
            record.has_ssl = Some(url.starts_with("https"));
            record.response_headers = Some(response.headers.clone());
        }

        record
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn count(document: &Html, selector: &str) -> usize {
    Selector::parse(selector)
        .map(|s| document.select(&s).count())
        .unwrap_or(0)
}

fn meta_description(document: &Html) -> String {
    let selector = match Selector::parse("meta[name=\"description\"]") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| truncate_chars(content, META_DESCRIPTION_CAP))
        .unwrap_or_default()
}

/// 绝对http(s)链接中不指向当前页面的数量
fn external_links(document: &Html, url: &str) -> usize {
    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return 0,
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| href.starts_with("http") && !href.contains(url))
        .count()
}
