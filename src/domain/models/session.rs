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

use crate::domain::models::page::PageResult;
use crate::domain::models::task::CrawlTask;
use crate::queue::task_queue::TaskQueue;
use crate::queue::visited_set::VisitedSet;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// 爬取会话
///
/// 聚合一次爬取运行的全部共享可变状态：任务队列、已访问集合、
/// 结果映射、页面计数器和运行标志。每次start()构造一个全新实例，
/// 由所有工作器和进度报告器并发访问，stop()时整体丢弃。
/// 任意时刻最多存在一个活动会话。
pub struct CrawlSession {
    /// 待处理任务队列（无界）
    pub queue: TaskQueue,
    /// URL去重门卫
    pub visited: VisitedSet,
    results: DashMap<String, PageResult>,
    pages_crawled: AtomicU64,
    running: AtomicBool,
    cancel: CancellationToken,
    started_at: Instant,
    domain_filter: String,
    max_depth: u32,
}

impl CrawlSession {
    /// 创建新会话并以深度0的种子任务初始化队列
    pub fn new(seed_url: &str, domain_filter: &str, max_depth: u32) -> Self {
        let queue = TaskQueue::new();
        queue.push(CrawlTask::seed(seed_url));

        Self {
            queue,
            visited: VisitedSet::new(),
            results: DashMap::new(),
            pages_crawled: AtomicU64::new(0),
            running: AtomicBool::new(true),
            cancel: CancellationToken::new(),
            started_at: Instant::now(),
            domain_filter: domain_filter.to_string(),
            max_depth,
        }
    }

    /// 会话是否仍在运行
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// 发出停止信号
    ///
    /// 清除运行标志并触发取消令牌，工作器在下一个挂起点观察到信号后退出
    pub fn shutdown(&self) {
        self.running.store(false, Ordering::Release);
        self.cancel.cancel();
    }

    /// 取消令牌，供工作器在pop和fetch处监听
    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// 记录一个抓取成功的页面并返回更新后的计数
    ///
    /// 仅对已通过`try_claim`认领的URL调用，因此插入必然是首次插入，
    /// `pages_crawled`与结果数量在静止点保持一致
    pub fn record_page(&self, result: PageResult) -> u64 {
        self.results.insert(result.url.clone(), result);
        self.pages_crawled.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// 已抓取页面数
    pub fn pages_crawled(&self) -> u64 {
        self.pages_crawled.load(Ordering::Acquire)
    }

    /// 结果映射中的条目数
    pub fn results_len(&self) -> usize {
        self.results.len()
    }

    /// 按URL读取结果副本
    pub fn result(&self, url: &str) -> Option<PageResult> {
        self.results.get(url).map(|r| r.clone())
    }

    /// 会话启动以来的时长
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// 域名过滤子串
    pub fn domain_filter(&self) -> &str {
        &self.domain_filter
    }

    /// 最大爬取深度
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}
