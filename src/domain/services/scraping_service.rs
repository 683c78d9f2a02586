use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::settings::{ExtractionSettings, Settings};
use crate::domain::models::record::{AnalysisRecord, ExtractionRecord};
use crate::domain::models::task::{AnalysisType, ExtractMode};
use crate::domain::services::analysis_service::AnalysisService;
use crate::domain::services::extraction_service::ExtractionService;
use crate::engines::batch;
use crate::engines::traits::{FetchRequest, PageFetcher};

/// 抓取服务
///
/// 组合页面抓取器与提取/分析逻辑，提供单URL和有界并发批量两种
/// 入口。传输和解析失败一律转为记录中的错误数据，不跨边界抛出
pub struct ScrapingService {
    fetcher: Arc<dyn PageFetcher>,
    timeout: Duration,
    limits: ExtractionSettings,
    max_workers: usize,
}

impl ScrapingService {
    pub fn new(fetcher: Arc<dyn PageFetcher>, settings: &Settings) -> Self {
        Self {
            fetcher,
            timeout: Duration::from_secs(settings.fetcher.timeout_secs),
            limits: settings.extraction.clone(),
            max_workers: settings.concurrency.max_workers,
        }
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// 提取单个URL
    pub async fn extract(&self, url: String, mode: ExtractMode) -> ExtractionRecord {
        let request = FetchRequest {
            url: url.clone(),
            timeout: self.timeout,
        };

        match self.fetcher.fetch(&request).await {
            Ok(response) => {
                let content =
                    ExtractionService::extract_content(&response.content, mode, &self.limits);
                ExtractionRecord::ok(url, content, response.status_code, response.content_type)
            }
            Err(e) => {
                debug!("Extraction failed for {}: {}", url, e);
                ExtractionRecord::failed(url, e.to_string())
            }
        }
    }

    /// 批量提取，输出顺序与输入URL顺序一致
    pub async fn extract_all(
        &self,
        urls: Vec<String>,
        mode: ExtractMode,
    ) -> Vec<ExtractionRecord> {
        batch::map_bounded(urls, self.max_workers, |url| self.extract(url, mode)).await
    }

    /// 分析单个URL
    pub async fn analyze(&self, url: String, analysis_type: AnalysisType) -> AnalysisRecord {
        let request = FetchRequest {
            url: url.clone(),
            timeout: self.timeout,
        };

        match self.fetcher.fetch(&request).await {
            Ok(response) => AnalysisService::analyze_page(&url, &response, analysis_type),
            Err(e) => {
                debug!("Analysis failed for {}: {}", url, e);
                AnalysisRecord::failed(url, e.to_string())
            }
        }
    }

    /// 批量分析，输出顺序与输入URL顺序一致
    pub async fn analyze_all(
        &self,
        urls: Vec<String>,
        analysis_type: AnalysisType,
    ) -> Vec<AnalysisRecord> {
        batch::map_bounded(urls, self.max_workers, |url| self.analyze(url, analysis_type)).await
    }
}
