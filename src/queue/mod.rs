// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 队列模块
///
/// 提供爬取任务的排队和去重功能
/// 包括限时出队的任务队列和原子认领的已访问集合
pub mod task_queue;
pub mod visited_set;
