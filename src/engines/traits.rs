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

use crate::domain::models::HttpMethod;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 传输错误类型
#[derive(Error, Debug)]
pub enum TransportError {
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 请求失败
    #[error("Request failed: {0}")]
    Failed(reqwest::Error),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Failed(e)
        }
    }
}

impl TransportError {
    /// 超时在工作器内部恢复，其他错误终止该工作器的片段
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout)
    }
}

/// 传输请求
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP方法
    pub method: HttpMethod,
    /// 目标URL
    pub url: String,
    /// 超时时间
    pub timeout: Duration,
    /// 是否校验TLS证书
    pub verify_tls: bool,
}

/// 传输响应
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// 实际使用的方法
    pub method: HttpMethod,
    /// 跟随重定向后的最终URL
    pub url: String,
    /// HTTP状态码
    pub status: u16,
    /// 响应文本
    pub body: String,
}

/// 传输层特质
#[async_trait]
pub trait Transport: Send + Sync {
    /// 发送一个请求
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, TransportError>;

    /// 传输名称
    fn name(&self) -> &'static str;
}
