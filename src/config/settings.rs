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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 爬虫配置
    pub crawler: CrawlerSettings,
}

/// 爬虫配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerSettings {
    /// 工作器数量
    pub workers: usize,
    /// 单次抓取的总超时（秒）
    pub fetch_timeout_secs: u64,
    /// 队列出队超时（秒），决定停止信号的最大观察延迟
    pub pop_timeout_secs: u64,
    /// 进度快照周期（秒）
    pub progress_interval_secs: u64,
    /// 请求使用的User-Agent
    pub user_agent: String,
}

impl Default for CrawlerSettings {
    fn default() -> Self {
        Self {
            workers: 10,
            fetch_timeout_secs: 30,
            pop_timeout_secs: 1,
            progress_interval_secs: 1,
            user_agent: "Mozilla/5.0 (compatible; deepcrawl/0.1; +https://github.com/Kirky-X)"
                .to_string(),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let defaults = CrawlerSettings::default();
        let builder = Config::builder()
            // Start with default settings
            .set_default("crawler.workers", defaults.workers as u64)?
            .set_default("crawler.fetch_timeout_secs", defaults.fetch_timeout_secs)?
            .set_default("crawler.pop_timeout_secs", defaults.pop_timeout_secs)?
            .set_default(
                "crawler.progress_interval_secs",
                defaults.progress_interval_secs,
            )?
            .set_default("crawler.user_agent", defaults.user_agent)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("DEEPCRAWL").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
