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

use crate::engines::traits::{EngineError, FetchEngine, FetchedPage};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use url::Url;

/// 抓取引擎
///
/// 基于reqwest实现的基本HTTP抓取引擎。
/// 单次GET请求，不重试，不做传输层之外的重定向处理。
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 创建新的抓取引擎实例
    ///
    /// # 参数
    ///
    /// * `timeout` - 单次请求的总超时
    /// * `user_agent` - 请求使用的User-Agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FetchEngine for ReqwestEngine {
    /// 执行HTTP抓取
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchedPage)` - 状态码为200的响应
    /// * `Err(EngineError)` - URL非法、非200状态或I/O失败
    async fn fetch(&self, url: &str) -> Result<FetchedPage, EngineError> {
        // Reject candidates that cannot be parsed as a request target
        let parsed = Url::parse(url).map_err(|e| EngineError::InvalidUrl(e.to_string()))?;

        let start = Instant::now();
        let response = self.client.get(parsed).send().await?;

        // Only 200 counts as success, matching the reference behavior
        if response.status() != StatusCode::OK {
            return Err(EngineError::HttpStatus(response.status().as_u16()));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        // Ensure content_type is not empty
        let content_type = if content_type.trim().is_empty() {
            "text/html".to_string()
        } else {
            content_type
        };

        // Body is always decoded as text; binary payloads are not special-cased
        let content = response.text().await?;

        Ok(FetchedPage {
            content,
            content_type,
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
