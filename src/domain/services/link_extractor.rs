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

use once_cell::sync::Lazy;
use regex::Regex;

static HREF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"href="(http[s]?://.*?)""#).expect("href pattern is valid"));

/// 链接提取器特质
///
/// 纯函数能力：页面内容到候选URL序列。
/// 抽象为独立策略，便于以后换用更严格的HTML感知提取器
/// 而不触及工作器循环。
pub trait LinkExtractor: Send + Sync {
    /// 从页面内容中按首次出现顺序提取候选URL，保留重复项
    fn extract(&self, content: &str) -> Vec<String>;
}

/// 基于href属性的字面提取器
///
/// 仅匹配双引号包裹的绝对http(s)链接：`href="http(s)://…"`。
/// 相对URL、单引号属性和非href来源一律不发现。
/// 该匹配行为是兼容性要求，不做泛化。
pub struct HrefLinkExtractor;

impl LinkExtractor for HrefLinkExtractor {
    fn extract(&self, content: &str) -> Vec<String> {
        HREF_PATTERN
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

#[cfg(test)]
#[path = "link_extractor_test.rs"]
mod tests;
