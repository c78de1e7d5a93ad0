// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 爬取任务
///
/// 表示一个待处理的工作单元：目标URL及其相对种子URL的发现深度。
/// 任务一旦创建即不可变，由种子步骤或链接发现产生，
/// 并由某个工作器恰好消费一次。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlTask {
    /// 目标URL
    pub url: String,
    /// 发现深度，种子任务为0
    pub depth: u32,
}

impl CrawlTask {
    /// 创建种子任务（深度为0）
    pub fn seed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            depth: 0,
        }
    }

    /// 为发现的链接派生子任务，深度加一
    pub fn child(&self, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            depth: self.depth + 1,
        }
    }
}
