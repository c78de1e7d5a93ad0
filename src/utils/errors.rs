// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 爬取服务错误类型
#[derive(Error, Debug)]
pub enum CrawlError {
    /// 参数校验失败，爬取不会开始
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 已有会话在运行，不允许重叠会话
    #[error("A crawl session is already running")]
    AlreadyRunning,

    /// 引擎构建失败
    #[error("Engine error: {0}")]
    Engine(#[from] crate::engines::traits::EngineError),
}
