// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 爬取任务（task）：URL与发现深度构成的工作单元
/// - 页面结果（page）：抓取成功页面的内容和出站链接
/// - 爬取事件（event）：向表示层发布的事件流
/// - 爬取会话（session）：一次运行的全部共享可变状态
pub mod event;
pub mod page;
pub mod session;
pub mod task;
