// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 验证URL是否可抓取
///
/// 检查URL非空、可解析、scheme为http(s)且包含主机名
pub fn validate_url(url_str: &str) -> anyhow::Result<()> {
    if url_str.trim().is_empty() {
        return Err(anyhow::anyhow!("URL cannot be empty"));
    }

    let url = Url::parse(url_str)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow::anyhow!("Unsupported URL scheme: {}", url.scheme()));
    }

    if url.host_str().is_none() {
        return Err(anyhow::anyhow!("Missing host"));
    }

    Ok(())
}
