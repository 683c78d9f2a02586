// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、抓取器、内容提取、并发控制和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 抓取器配置
    pub fetcher: FetcherSettings,
    /// 内容提取配置
    pub extraction: ExtractionSettings,
    /// 并发控制配置
    pub concurrency: ConcurrencySettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 抓取器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherSettings {
    /// 单次抓取超时时间（秒）
    pub timeout_secs: u64,
    /// 请求User-Agent
    pub user_agent: String,
}

/// 内容提取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    /// 文本内容截断上限（字符数）
    pub text_cap: usize,
    /// 原始文档回退截断上限（字符数）
    pub raw_cap: usize,
    /// 链接/图片列表截断上限（条目数）
    pub entry_cap: usize,
}

/// 并发控制配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ConcurrencySettings {
    /// 批处理工作器上限
    pub max_workers: usize,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用Prometheus导出器
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default fetcher settings
            .set_default("fetcher.timeout_secs", 10)?
            .set_default("fetcher.user_agent", "Mozilla/5.0 (compatible; routrs/1.0)")?
            // Default extraction settings
            .set_default("extraction.text_cap", 2000)?
            .set_default("extraction.raw_cap", 1000)?
            .set_default("extraction.entry_cap", 50)?
            // Default concurrency settings
            .set_default("concurrency.max_workers", 10)?
            // Default metrics settings
            .set_default("metrics.enabled", true)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("ROUTRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            fetcher: FetcherSettings {
                timeout_secs: 10,
                user_agent: "Mozilla/5.0 (compatible; routrs/1.0)".to_string(),
            },
            extraction: ExtractionSettings {
                text_cap: 2000,
                raw_cap: 1000,
                entry_cap: 50,
            },
            concurrency: ConcurrencySettings { max_workers: 10 },
            metrics: MetricsSettings {
                enabled: true,
                listen_addr: "0.0.0.0:9000".to_string(),
            },
        }
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
