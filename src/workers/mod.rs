// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 提供请求分发工作器与运行协调器
/// 包括静态划分后的并行执行和按序号的结果合并
pub mod dispatch_worker;
pub mod manager;

#[cfg(test)]
mod test_support;

pub use dispatch_worker::{DispatchContext, DispatchWorker, WorkerEvent, WorkerOutput};
pub use manager::{RunCoordinator, RunPlan, RunReport, RunState};
