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

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
///
/// 单个URL抓取的失败分类。任何变体都只影响当前任务，
/// 以`FetchError`事件上报后任务被丢弃，不重试也不终止会话。
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败（网络或I/O错误）
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非成功状态码
    #[error("HTTP status {0}")]
    HttpStatus(u16),
    /// URL无法解析为请求目标
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// 抓取到的页面
///
/// 引擎返回的原始结果：正文按文本读取，外加Content-Type和耗时
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// 页面内容
    pub content: String,
    /// 响应的Content-Type
    pub content_type: String,
    /// 请求耗时（毫秒）
    pub response_time_ms: u64,
}

/// 抓取引擎特质
///
/// 对单个URL执行一次GET请求。实现必须在有界时间内返回，
/// 使停止信号能在一个超时窗口内被观察到。
#[async_trait]
pub trait FetchEngine: Send + Sync {
    /// 抓取单个URL
    ///
    /// 仅HTTP 200视为成功；其他状态码或I/O失败返回`EngineError`
    async fn fetch(&self, url: &str) -> Result<FetchedPage, EngineError>;

    /// 获取引擎名称
    fn name(&self) -> &'static str;
}
