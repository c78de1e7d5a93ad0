// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dashmap::DashSet;

/// 已访问URL集合
///
/// 线程安全的成员集合，保证每个URL至多被处理一次。
/// `try_claim`是系统中唯一的去重机制：成员检查与插入在单次
/// 原子操作中完成，同一URL的并发认领恰好有一个调用者胜出。
pub struct VisitedSet {
    inner: DashSet<String>,
}

impl VisitedSet {
    /// 创建空集合
    pub fn new() -> Self {
        Self {
            inner: DashSet::new(),
        }
    }

    /// 原子地认领URL
    ///
    /// 若URL不在集合中则插入并返回`true`；已存在返回`false`。
    /// 工作器必须在抓取前调用，返回`false`时整体跳过该任务。
    pub fn try_claim(&self, url: &str) -> bool {
        self.inner.insert(url.to_string())
    }

    /// 集合中URL的数量
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// 集合是否为空
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// URL是否已被认领
    pub fn contains(&self, url: &str) -> bool {
        self.inner.contains(url)
    }
}

impl Default for VisitedSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "visited_set_test.rs"]
mod tests;
