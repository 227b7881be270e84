// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::domain::models::{HttpMethod, MethodSet};
use crate::domain::services::{ClassifierSettings, ResponseClassifier};
use crate::engines::traits::{Transport, TransportError, TransportRequest, TransportResponse};
use crate::workers::dispatch_worker::DispatchContext;

/// 脚本化的响应行为
#[derive(Debug, Clone)]
pub enum Behavior {
    Body(String),
    Delayed(Duration, String),
    Timeout,
    Fail(String),
}

/// 按URL返回预设结果的传输，未配置的URL返回空响应体
#[derive(Default)]
pub struct MockTransport {
    behaviors: HashMap<String, Behavior>,
    calls: Mutex<Vec<(HttpMethod, String)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, behavior: Behavior) -> Self {
        self.behaviors.insert(url.to_string(), behavior);
        self
    }

    pub async fn calls(&self) -> Vec<(HttpMethod, String)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, TransportError> {
        self.calls
            .lock()
            .await
            .push((request.method, request.url.clone()));

        let body = match self.behaviors.get(&request.url).cloned() {
            None => String::new(),
            Some(Behavior::Body(body)) => body,
            Some(Behavior::Delayed(delay, body)) => {
                tokio::time::sleep(delay).await;
                body
            }
            Some(Behavior::Timeout) => return Err(TransportError::Timeout),
            Some(Behavior::Fail(reason)) => return Err(TransportError::Other(reason)),
        };

        Ok(TransportResponse {
            method: request.method,
            url: request.url.clone(),
            status: 200,
            body,
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

pub fn context(methods: &str, classifier: ClassifierSettings) -> Arc<DispatchContext> {
    Arc::new(DispatchContext {
        methods: MethodSet::parse(methods).expect("valid methods"),
        classifier: ResponseClassifier::new(classifier),
        timeout: Duration::from_secs(5),
        verify_tls: true,
    })
}
