// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// 爬取事件
///
/// 核心向外部表示层发布的三类事件。表示层订阅事件流并负责渲染，
/// 爬取并发与渲染由此解耦。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CrawlEvent {
    /// 页面抓取成功，每个被认领且抓取成功的页面恰好发出一次
    PageCrawled { url: String, depth: u32 },
    /// 单个URL抓取失败，每次失败的抓取尝试发出一次
    FetchError { url: String, message: String },
    /// 进度快照，会话运行期间约每秒发出一次
    ProgressTick {
        elapsed_seconds: u64,
        pages_crawled: u64,
    },
}

/// 事件发送端
pub type EventSender = mpsc::UnboundedSender<CrawlEvent>;

/// 事件接收端
pub type EventReceiver = mpsc::UnboundedReceiver<CrawlEvent>;

/// 创建一条事件通道
///
/// 通道无界；接收端被丢弃时发送失败会被静默忽略，
/// 表示层消失不会使爬取阻塞或终止。
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
