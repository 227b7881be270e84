// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::join_all;
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::config::settings::{RunConfig, Settings};
use crate::domain::models::{endpoints_from_lines, Endpoint, Finding};
use crate::domain::services::{partition, ResponseClassifier};
use crate::engines::traits::Transport;
use crate::utils::errors::{ConfigurationError, WorkerError};
use crate::workers::dispatch_worker::{DispatchContext, DispatchWorker, WorkerEvent, WorkerOutput};

/// 运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Validating,
    Dispatching,
    /// 等待指定数量的工作器完成
    Awaiting(usize),
    Merging,
    Done,
    /// 配置被拒绝，不会发出任何请求
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Awaiting(n) => write!(f, "awaiting({n})"),
            other => write!(f, "{}", format!("{other:?}").to_lowercase()),
        }
    }
}

/// 校验完成、可以执行的运行计划
#[derive(Debug, Clone)]
pub struct RunPlan {
    config: Arc<RunConfig>,
    endpoints: Vec<Endpoint>,
}

impl RunPlan {
    pub fn new(config: RunConfig, endpoints: Vec<Endpoint>) -> Self {
        Self {
            config: Arc::new(config),
            endpoints,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// 计划发出的请求总数
    pub fn request_count(&self) -> usize {
        self.config.base_urls.len() * self.endpoints.len() * self.config.methods.len()
    }
}

/// 放弃了部分工作的工作器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbortedWorker {
    pub base_url: String,
    pub index: usize,
    pub reason: String,
}

/// 合并后的运行结果
///
/// 事件按基础URL的配置顺序、再按工作器序号排列
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub events: Vec<WorkerEvent>,
    pub aborted: Vec<AbortedWorker>,
}

impl RunReport {
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.events.iter().flat_map(|event| match event {
            WorkerEvent::Response { classification, .. } => classification.findings.as_slice(),
            _ => &[][..],
        })
    }

    pub fn timeouts(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, WorkerEvent::Timeout { .. }))
            .count()
    }
}

/// 运行协调器
///
/// 负责工作器池的生命周期：校验、划分、启动、等待、按序合并
pub struct RunCoordinator {
    transport: Arc<dyn Transport>,
    state: RunState,
}

impl RunCoordinator {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    fn transition(&mut self, next: RunState) {
        debug!(from = %self.state, to = %next, "run state transition");
        self.state = next;
    }

    /// 校验配置并加载端点
    ///
    /// # 参数
    ///
    /// * `settings` - 加载后的配置
    /// * `lines` - 字典原始行
    ///
    /// # 返回值
    ///
    /// * `Ok(RunPlan)` - 运行计划
    /// * `Err(ConfigurationError)` - 配置被拒绝，进入`Failed`状态
    pub fn prepare<I, S>(&mut self, settings: &Settings, lines: I) -> Result<RunPlan, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.transition(RunState::Validating);

        let config = match settings.validate() {
            Ok(config) => config,
            Err(e) => {
                self.transition(RunState::Failed);
                return Err(e);
            }
        };
        let endpoints = endpoints_from_lines(lines);
        info!(
            endpoints = endpoints.len(),
            methods = %config.methods,
            workers = config.workers,
            targets = config.base_urls.len(),
            "run validated"
        );

        Ok(RunPlan::new(config, endpoints))
    }

    /// 执行运行计划
    ///
    /// 每个基础URL依次启动恰好N个工作器，等待全部完成后按工作器序号合并结果，
    /// 与完成顺序无关
    pub async fn execute(&mut self, plan: RunPlan) -> RunReport {
        let config = plan.config.clone();
        let context = Arc::new(DispatchContext {
            methods: config.methods.clone(),
            classifier: ResponseClassifier::new(config.classifier.clone()),
            timeout: config.timeout,
            verify_tls: config.verify_tls,
        });

        let mut report = RunReport::default();

        for base_url in &config.base_urls {
            self.transition(RunState::Dispatching);
            let chunks = partition(&plan.endpoints, config.workers);

            let handles: Vec<JoinHandle<WorkerOutput>> = chunks
                .into_iter()
                .map(|chunk| {
                    let worker = DispatchWorker::new(
                        base_url.clone(),
                        chunk,
                        self.transport.clone(),
                        context.clone(),
                    );
                    tokio::spawn(worker.run())
                })
                .collect();

            self.transition(RunState::Awaiting(handles.len()));
            // join_all yields results in spawn order, not completion order
            let joined = join_all(handles).await;

            self.transition(RunState::Merging);
            for (index, result) in joined.into_iter().enumerate() {
                match result {
                    Ok(output) => {
                        if output.aborted {
                            let reason = output
                                .events
                                .iter()
                                .rev()
                                .find_map(|e| match e {
                                    WorkerEvent::Aborted { reason, .. } => Some(reason.clone()),
                                    _ => None,
                                })
                                .unwrap_or_default();
                            report.aborted.push(AbortedWorker {
                                base_url: base_url.clone(),
                                index,
                                reason,
                            });
                        }
                        report.events.extend(output.events);
                    }
                    Err(join_error) => {
                        let e = if join_error.is_panic() {
                            WorkerError::Panicked { index }
                        } else {
                            WorkerError::Cancelled { index }
                        };
                        error!(base_url = %base_url, "{}", e);
                        report.aborted.push(AbortedWorker {
                            base_url: base_url.clone(),
                            index,
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        self.transition(RunState::Done);
        info!(
            events = report.events.len(),
            findings = report.findings().count(),
            timeouts = report.timeouts(),
            aborted = report.aborted.len(),
            "run complete"
        );

        report
    }

    /// 校验并执行一次完整运行
    pub async fn run<I, S>(
        &mut self,
        settings: &Settings,
        lines: I,
    ) -> Result<RunReport, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let plan = self.prepare(settings, lines)?;
        Ok(self.execute(plan).await)
    }
}

#[cfg(test)]
#[path = "manager_test.rs"]
mod tests;
