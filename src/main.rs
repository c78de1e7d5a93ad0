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

use anyhow::{bail, Context};
use deepcrawl::application::dto::crawl_request::CrawlRequestDto;
use deepcrawl::config::settings::Settings;
use deepcrawl::domain::models::event::{event_channel, CrawlEvent};
use deepcrawl::domain::services::crawl_service::CrawlService;
use deepcrawl::utils::telemetry;
use tracing::{info, warn};

/// 主函数
///
/// 薄控制台外壳，代替图形表示层：解析参数、订阅事件流、
/// 以日志形式呈现事件，收到Ctrl-C后停止会话
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting deepcrawl...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Read crawl parameters
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        bail!("usage: deepcrawl <seed-url> <domain-filter> [max-depth]");
    }
    let max_depth = match args.get(3) {
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("invalid max depth: {}", raw))?,
        None => 3,
    };
    let request = CrawlRequestDto {
        seed_url: args[1].clone(),
        domain_filter: args[2].clone(),
        max_depth,
    };

    // 4. Start the crawl session
    let (events_tx, mut events_rx) = event_channel();
    let service = CrawlService::new(settings.crawler)?;
    service.start(request, events_tx).await?;
    info!("Crawl session started, press Ctrl-C to stop");

    // 5. Render events until shutdown
    loop {
        tokio::select! {
            event = events_rx.recv() => match event {
                Some(CrawlEvent::PageCrawled { url, depth }) => {
                    info!(%url, depth, "Crawled");
                }
                Some(CrawlEvent::FetchError { url, message }) => {
                    warn!(%url, %message, "Fetch error");
                }
                Some(CrawlEvent::ProgressTick { elapsed_seconds, pages_crawled }) => {
                    info!(elapsed_seconds, pages_crawled, "Progress");
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    // 6. Tear down the session
    service.stop().await;
    info!("deepcrawl stopped");
    Ok(())
}
