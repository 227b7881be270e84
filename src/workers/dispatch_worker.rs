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

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::domain::models::{HttpMethod, MethodSet, RequestTarget, ResponseRecord};
use crate::domain::services::{Classification, ResponseClassifier, WorkChunk};
use crate::engines::traits::{Transport, TransportRequest};

/// 所有工作器共享的只读上下文
#[derive(Debug, Clone)]
pub struct DispatchContext {
    pub methods: MethodSet,
    pub classifier: ResponseClassifier,
    pub timeout: Duration,
    pub verify_tls: bool,
}

/// 工作器记录的单个工作单元结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerEvent {
    /// 收到响应并完成分类
    Response {
        method: HttpMethod,
        url: String,
        length: usize,
        classification: Classification,
    },
    /// 请求超时，该工作单元被丢弃
    Timeout { method: HttpMethod, url: String },
    /// 传输失败，工作器放弃片段中剩余的工作
    Aborted {
        worker: usize,
        method: HttpMethod,
        url: String,
        reason: String,
    },
}

impl WorkerEvent {
    /// 由请求结果和分类结果构造事件
    pub fn from_record(record: ResponseRecord, classification: Classification) -> Self {
        match record {
            ResponseRecord::Exchange {
                method,
                url,
                length,
                ..
            } => WorkerEvent::Response {
                method,
                url,
                length,
                classification,
            },
            ResponseRecord::Timeout { method, url } => WorkerEvent::Timeout { method, url },
        }
    }
}

/// 单个工作器的输出
#[derive(Debug, Clone)]
pub struct WorkerOutput {
    pub index: usize,
    pub events: Vec<WorkerEvent>,
    pub aborted: bool,
}

/// 分发工作器
///
/// 独占一个片段，针对一个基础URL按片段顺序发出请求
pub struct DispatchWorker {
    base_url: String,
    chunk: WorkChunk,
    transport: Arc<dyn Transport>,
    context: Arc<DispatchContext>,
}

impl DispatchWorker {
    pub fn new(
        base_url: impl Into<String>,
        chunk: WorkChunk,
        transport: Arc<dyn Transport>,
        context: Arc<DispatchContext>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            chunk,
            transport,
            context,
        }
    }

    /// 运行工作器直到片段处理完毕或发生传输失败
    #[instrument(skip(self), fields(worker = self.chunk.index, base_url = %self.base_url, transport = self.transport.name()))]
    pub async fn run(self) -> WorkerOutput {
        let index = self.chunk.index;
        let mut events = Vec::with_capacity(self.chunk.len() * self.context.methods.len());
        let mut aborted = false;

        debug!(endpoints = self.chunk.len(), "worker started");

        for target in
            RequestTarget::for_chunk(&self.base_url, &self.chunk.endpoints, &self.context.methods)
        {
            let request = TransportRequest {
                method: target.method,
                url: target.url(),
                timeout: self.context.timeout,
                verify_tls: self.context.verify_tls,
            };

            let record = match self.transport.send(&request).await {
                Ok(response) => ResponseRecord::exchange(
                    response.method,
                    response.url,
                    response.status,
                    response.body,
                ),
                Err(e) if e.is_timeout() => {
                    debug!(method = %request.method, url = %request.url, "request timed out");
                    ResponseRecord::Timeout {
                        method: request.method,
                        url: request.url,
                    }
                }
                Err(e) => {
                    error!(method = %request.method, url = %request.url, "request failed, aborting chunk: {}", e);
                    events.push(WorkerEvent::Aborted {
                        worker: index,
                        method: request.method,
                        url: request.url,
                        reason: e.to_string(),
                    });
                    aborted = true;
                    break;
                }
            };

            let classification = self.context.classifier.classify(&record);
            if !classification.findings.is_empty() {
                debug!(
                    url = record.url(),
                    status = record.status(),
                    findings = classification.findings.len(),
                    "response flagged"
                );
            }
            events.push(WorkerEvent::from_record(record, classification));
        }

        debug!(events = events.len(), aborted, "worker finished");

        WorkerOutput {
            index,
            events,
            aborted,
        }
    }
}

#[cfg(test)]
#[path = "dispatch_worker_test.rs"]
mod tests;
