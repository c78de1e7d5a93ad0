// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::CrawlTask;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};

/// 任务队列
///
/// 无界的内存工作队列。`push`永不阻塞也永不拒绝；
/// `pop`在给定超时内等待任务，超时返回`None`，
/// 使工作器能够周期性地重新检查运行标志并在停止时及时退出。
///
/// 并发push/pop下不保证严格FIFO，仅保证活性：
/// 每个已入队的任务最终可被某次`pop`观察到。
/// 无界队列在宽而深的爬取下存在容量风险，属已知限制。
pub struct TaskQueue {
    tx: mpsc::UnboundedSender<CrawlTask>,
    rx: Mutex<mpsc::UnboundedReceiver<CrawlTask>>,
}

impl TaskQueue {
    /// 创建空队列
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Mutex::new(rx),
        }
    }

    /// 非阻塞入队
    pub fn push(&self, task: CrawlTask) {
        // The receiver lives as long as self, so this cannot fail
        let _ = self.tx.send(task);
    }

    /// 限时出队
    ///
    /// 最多阻塞`timeout`等待任务；超时返回`None`。
    /// 超时覆盖取锁和接收两个阶段，因此总等待时间有界。
    pub async fn pop(&self, timeout: Duration) -> Option<CrawlTask> {
        tokio::time::timeout(timeout, async {
            self.rx.lock().await.recv().await
        })
        .await
        .ok()
        .flatten()
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "task_queue_test.rs"]
mod tests;
