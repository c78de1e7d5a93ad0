// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务：
/// - 爬取服务（crawl_service）：会话生命周期状态机，负责启动、
///   停止和丢弃爬取会话
/// - 链接提取（link_extractor)：从页面内容中发现候选URL的可替换策略
pub mod crawl_service;
pub mod link_extractor;
