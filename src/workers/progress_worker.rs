// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::event::{CrawlEvent, EventSender};
use crate::domain::models::session::CrawlSession;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// 进度报告工作器
///
/// 独立于工作池运行，在会话存续期间按固定周期读取已运行时长
/// 和原子页面计数并发出`ProgressTick`事件。除读取原子计数器外
/// 不做任何同步，快照允许轻微滞后。
pub struct ProgressWorker {
    session: Arc<CrawlSession>,
    events: EventSender,
    interval: Duration,
}

impl ProgressWorker {
    pub fn new(session: Arc<CrawlSession>, events: EventSender, interval: Duration) -> Self {
        Self {
            session,
            events,
            interval,
        }
    }

    /// 运行报告循环
    ///
    /// 先等待一个周期再发出快照；运行标志清除后至多延迟一个周期退出，
    /// 取消令牌触发时立即退出
    pub async fn run(&self) {
        debug!("Progress reporter started");

        loop {
            tokio::select! {
                _ = self.session.cancel_token().cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }

            if !self.session.is_running() {
                break;
            }

            let _ = self.events.send(CrawlEvent::ProgressTick {
                elapsed_seconds: self.session.elapsed().as_secs(),
                pages_crawled: self.session.pages_crawled(),
            });
        }

        debug!("Progress reporter stopped");
    }
}
