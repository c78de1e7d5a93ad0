// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 页面抓取结果
///
/// 由抓取引擎和链接提取器共同产生，随后归属于会话的结果映射。
/// 结果一旦创建即不可变。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    /// 页面URL
    pub url: String,
    /// 页面内容，始终按文本解码（二进制响应不做特殊处理）
    pub content: String,
    /// 按首次出现顺序提取的出站链接，允许重复
    pub links: Vec<String>,
    /// 响应的Content-Type
    pub content_type: String,
    /// 抓取完成时间
    pub fetched_at: DateTime<Utc>,
    /// 请求耗时（毫秒）
    pub response_time_ms: u64,
}
