use scraper::{Html, Selector};

use crate::config::settings::ExtractionSettings;
use crate::domain::models::record::ExtractedContent;
use crate::domain::models::task::ExtractMode;

/// 提取服务
///
/// 负责从HTML内容中按模式提取有界结果；纯函数，无I/O
pub struct ExtractionService;

impl ExtractionService {
    /// 按模式提取内容
    ///
    /// 所有输出都受配置上限约束，与页面大小无关
    pub fn extract_content(
        html: &str,
        mode: ExtractMode,
        limits: &ExtractionSettings,
    ) -> ExtractedContent {
        match mode {
            ExtractMode::Text => {
                let document = Html::parse_document(html);
                ExtractedContent::Text(truncate_chars(&page_text(&document), limits.text_cap))
            }
            ExtractMode::Links => {
                let document = Html::parse_document(html);
                ExtractedContent::Entries(collect_attr(
                    &document,
                    "a[href]",
                    "href",
                    limits.entry_cap,
                ))
            }
            ExtractMode::Images => {
                let document = Html::parse_document(html);
                ExtractedContent::Entries(collect_attr(
                    &document,
                    "img[src]",
                    "src",
                    limits.entry_cap,
                ))
            }
            ExtractMode::Title => {
                let document = Html::parse_document(html);
                ExtractedContent::Text(
                    page_title(&document).unwrap_or_else(|| "No title found".to_string()),
                )
            }
            // Unknown modes land here via ExtractMode::from
            ExtractMode::Raw => ExtractedContent::Text(truncate_chars(html, limits.raw_cap)),
        }
    }
}

/// 页面标题，缺失时返回None
pub fn page_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let element = document.select(&selector).next()?;
    let title = element.text().collect::<Vec<_>>().join(" ").trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// 页面可见文本，空白节点剔除后以空格连接
pub fn page_text(document: &Html) -> String {
    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 按字符数截断，避免切断多字节字符
pub fn truncate_chars(s: &str, cap: usize) -> String {
    match s.char_indices().nth(cap) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

fn collect_attr(document: &Html, selector: &str, attr: &str, cap: usize) -> Vec<String> {
    let selector = match Selector::parse(selector) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr(attr))
        .map(|v| v.to_string())
        .take(cap)
        .collect()
}
