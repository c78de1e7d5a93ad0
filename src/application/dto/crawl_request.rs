// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 爬取请求参数
///
/// 由外部表示层提供的三个输入。种子URL和域名过滤子串不允许为空，
/// 最大深度限定在1到10之间。
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CrawlRequestDto {
    /// 起始URL
    #[validate(length(min = 1, message = "seed URL must not be empty"))]
    pub seed_url: String,
    /// 域名过滤子串，候选URL的字符串形式必须包含它才有抓取资格
    #[validate(length(min = 1, message = "domain filter must not be empty"))]
    pub domain_filter: String,
    /// 最大爬取深度
    #[validate(range(min = 1, max = 10))]
    pub max_depth: u32,
}
