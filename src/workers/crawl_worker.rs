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

use crate::domain::models::event::{CrawlEvent, EventSender};
use crate::domain::models::page::PageResult;
use crate::domain::models::session::CrawlSession;
use crate::domain::models::task::CrawlTask;
use crate::domain::services::link_extractor::LinkExtractor;
use crate::engines::traits::{FetchEngine, FetchedPage};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// 爬取工作器
///
/// 固定规模工作池中的单个成员。在会话生命周期内重复执行同一循环：
/// 限时出队、校验、抓取、提取链接、记录结果、发布事件、回填子任务。
/// 单个任务的任何失败都被就地隔离上报，不会终止工作器或会话。
pub struct CrawlWorker {
    session: Arc<CrawlSession>,
    engine: Arc<dyn FetchEngine>,
    extractor: Arc<dyn LinkExtractor>,
    events: EventSender,
    pop_timeout: Duration,
    worker_id: Uuid,
}

impl CrawlWorker {
    /// 创建新的爬取工作器实例
    pub fn new(
        session: Arc<CrawlSession>,
        engine: Arc<dyn FetchEngine>,
        extractor: Arc<dyn LinkExtractor>,
        events: EventSender,
        pop_timeout: Duration,
    ) -> Self {
        Self {
            session,
            engine,
            extractor,
            events,
            pop_timeout,
            worker_id: Uuid::new_v4(),
        }
    }

    /// 运行工作器循环
    ///
    /// 直到运行标志被清除或取消令牌触发为止；
    /// 出队超时用于周期性地重新检查运行标志
    pub async fn run(&self) {
        debug!("Crawl worker {} started", self.worker_id);

        loop {
            if !self.session.is_running() {
                break;
            }

            let popped = tokio::select! {
                _ = self.session.cancel_token().cancelled() => break,
                task = self.session.queue.pop(self.pop_timeout) => task,
            };

            match popped {
                Some(task) => self.process_task(task).await,
                // Timed out, loop around to re-check the running flag
                None => continue,
            }
        }

        debug!("Crawl worker {} exited", self.worker_id);
    }

    /// 处理单个任务
    ///
    /// 深度超限、域名过滤不匹配或认领失败时静默丢弃（无任何副作用）；
    /// 抓取失败以`FetchError`事件上报后丢弃，不重试
    pub async fn process_task(&self, task: CrawlTask) {
        if task.depth > self.session.max_depth() {
            return;
        }
        if !task.url.contains(self.session.domain_filter()) {
            return;
        }
        if !self.session.visited.try_claim(&task.url) {
            return;
        }

        let fetched = tokio::select! {
            _ = self.session.cancel_token().cancelled() => return,
            result = self.engine.fetch(&task.url) => result,
        };

        match fetched {
            Ok(page) => self.record_success(&task, page),
            Err(e) => {
                warn!(url = %task.url, error = %e, "Fetch failed");
                self.emit(CrawlEvent::FetchError {
                    url: task.url.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    fn record_success(&self, task: &CrawlTask, page: FetchedPage) {
        let links = self.extractor.extract(&page.content);

        let result = PageResult {
            url: task.url.clone(),
            content: page.content,
            links: links.clone(),
            content_type: page.content_type,
            fetched_at: Utc::now(),
            response_time_ms: page.response_time_ms,
        };

        let total = self.session.record_page(result);
        info!(url = %task.url, depth = task.depth, total, "Crawled page");

        self.emit(CrawlEvent::PageCrawled {
            url: task.url.clone(),
            depth: task.depth,
        });

        // Children are pushed unconditionally; depth, filter and dedup
        // gating all happen when they are later popped
        for link in links {
            self.session.queue.push(task.child(link));
        }
    }

    fn emit(&self, event: CrawlEvent) {
        // A dropped receiver must never stall or kill the crawl
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
#[path = "crawl_worker_test.rs"]
mod tests;
