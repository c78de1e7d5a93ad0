// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::event::EventSender;
use crate::domain::models::session::CrawlSession;
use crate::domain::services::link_extractor::LinkExtractor;
use crate::engines::traits::FetchEngine;
use crate::workers::crawl_worker::CrawlWorker;
use crate::workers::progress_worker::ProgressWorker;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

/// 工作管理器
///
/// 为一个会话启动固定数量的爬取工作器和一个进度报告器，
/// 持有全部任务句柄并在关闭时中止它们。
/// 中止是对协作式退出的硬取消兜底，保证停止延迟与抓取延迟无关。
pub struct WorkerManager {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerManager {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// 启动工作进程
    ///
    /// 创建并启动指定数量的爬取工作器，每个工作器运行在独立的tokio任务上
    ///
    /// # 参数
    ///
    /// * `count` - 要启动的工作器数量
    #[allow(clippy::too_many_arguments)]
    pub fn start_workers(
        &mut self,
        count: usize,
        session: Arc<CrawlSession>,
        engine: Arc<dyn FetchEngine>,
        extractor: Arc<dyn LinkExtractor>,
        events: EventSender,
        pop_timeout: Duration,
    ) {
        for _ in 0..count {
            let worker = CrawlWorker::new(
                session.clone(),
                engine.clone(),
                extractor.clone(),
                events.clone(),
                pop_timeout,
            );

            let handle = tokio::spawn(async move {
                worker.run().await;
            });
            self.handles.push(handle);
        }

        info!("Started {} crawl workers", count);
    }

    /// 启动进度报告器
    pub fn start_reporter(
        &mut self,
        session: Arc<CrawlSession>,
        events: EventSender,
        interval: Duration,
    ) {
        let reporter = ProgressWorker::new(session, events, interval);
        let handle = tokio::spawn(async move {
            reporter.run().await;
        });
        self.handles.push(handle);
    }

    /// 已托管的任务数量
    pub fn task_count(&self) -> usize {
        self.handles.len()
    }

    /// 关闭全部工作器
    ///
    /// 中止所有句柄（硬取消仍阻塞在抓取中的工作器），
    /// 随后尽力等待任务结束
    pub async fn shutdown(mut self) {
        for handle in &self.handles {
            handle.abort();
        }
        let _ = join_all(self.handles.drain(..)).await;

        info!("Workers shut down");
    }
}

impl Default for WorkerManager {
    fn default() -> Self {
        Self::new()
    }
}
