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

use crate::application::dto::crawl_request::CrawlRequestDto;
use crate::config::settings::CrawlerSettings;
use crate::domain::models::event::EventSender;
use crate::domain::models::session::CrawlSession;
use crate::domain::services::link_extractor::{HrefLinkExtractor, LinkExtractor};
use crate::engines::reqwest_engine::ReqwestEngine;
use crate::engines::traits::FetchEngine;
use crate::utils::errors::CrawlError;
use crate::workers::manager::WorkerManager;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;
use validator::Validate;

/// 正在运行的会话及其托管任务
struct ActiveCrawl {
    session: Arc<CrawlSession>,
    manager: WorkerManager,
}

/// 爬取服务
///
/// 会话生命周期状态机：Idle → Running → Stopping → Idle。
/// `start`校验参数、构造全新会话并启动工作池和进度报告器；
/// `stop`发出取消信号、硬取消仍在途的抓取并丢弃全部会话状态。
/// 任意时刻最多一个会话在运行，后续`start`观察不到前一会话的任何痕迹。
pub struct CrawlService {
    engine: Arc<dyn FetchEngine>,
    extractor: Arc<dyn LinkExtractor>,
    settings: CrawlerSettings,
    active: Mutex<Option<ActiveCrawl>>,
}

impl CrawlService {
    /// 创建新的爬取服务实例
    ///
    /// 使用默认的reqwest引擎和字面href提取器
    pub fn new(settings: CrawlerSettings) -> Result<Self, CrawlError> {
        let engine = Arc::new(ReqwestEngine::new(
            Duration::from_secs(settings.fetch_timeout_secs),
            &settings.user_agent,
        )?);
        Ok(Self::new_with_parts(engine, Arc::new(HrefLinkExtractor), settings))
    }

    /// 使用自定义引擎和提取器创建实例
    pub fn new_with_parts(
        engine: Arc<dyn FetchEngine>,
        extractor: Arc<dyn LinkExtractor>,
        settings: CrawlerSettings,
    ) -> Self {
        Self {
            engine,
            extractor,
            settings,
            active: Mutex::new(None),
        }
    }

    /// 启动一次爬取会话
    ///
    /// # 参数
    ///
    /// * `request` - 种子URL、域名过滤子串和最大深度
    /// * `events` - 事件发送端，表示层持有对应接收端
    ///
    /// # 返回值
    ///
    /// * `Err(CrawlError::Validation)` - 种子或过滤子串为空、深度越界
    /// * `Err(CrawlError::AlreadyRunning)` - 已有会话在运行
    pub async fn start(
        &self,
        request: CrawlRequestDto,
        events: EventSender,
    ) -> Result<(), CrawlError> {
        request
            .validate()
            .map_err(|e| CrawlError::Validation(e.to_string()))?;

        let mut active = self.active.lock().await;
        if active.is_some() {
            return Err(CrawlError::AlreadyRunning);
        }

        info!(
            seed = %request.seed_url,
            filter = %request.domain_filter,
            max_depth = request.max_depth,
            "Starting crawl session"
        );

        let session = Arc::new(CrawlSession::new(
            &request.seed_url,
            &request.domain_filter,
            request.max_depth,
        ));

        let mut manager = WorkerManager::new();
        manager.start_workers(
            self.settings.workers,
            session.clone(),
            self.engine.clone(),
            self.extractor.clone(),
            events.clone(),
            Duration::from_secs(self.settings.pop_timeout_secs),
        );
        manager.start_reporter(
            session.clone(),
            events,
            Duration::from_secs(self.settings.progress_interval_secs),
        );

        *active = Some(ActiveCrawl { session, manager });
        Ok(())
    }

    /// 停止当前会话
    ///
    /// 幂等：空闲时调用是无操作。清除运行标志并触发取消令牌，
    /// 中止所有托管任务（解除在途抓取的阻塞），等待退出后丢弃会话状态。
    /// 返回时间有界，与抓取延迟无关。
    pub async fn stop(&self) {
        let taken = self.active.lock().await.take();

        if let Some(active) = taken {
            info!("Stopping crawl session");
            active.session.shutdown();
            active.manager.shutdown().await;
            info!(
                pages = active.session.pages_crawled(),
                "Crawl session stopped"
            );
        }
        // Dropping ActiveCrawl discards queue, visited set and results
    }

    /// 是否有会话在运行
    pub async fn is_running(&self) -> bool {
        self.active.lock().await.is_some()
    }

    /// 当前会话的共享句柄（若在运行）
    pub async fn session(&self) -> Option<Arc<CrawlSession>> {
        self.active.lock().await.as_ref().map(|a| a.session.clone())
    }
}

#[cfg(test)]
#[path = "crawl_service_test.rs"]
mod tests;
