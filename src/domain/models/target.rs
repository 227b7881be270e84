// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::endpoint::Endpoint;
use super::method_set::{HttpMethod, MethodSet};

/// 一个工作单元：(基础URL, 端点, 方法)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    pub base_url: String,
    pub endpoint: Endpoint,
    pub method: HttpMethod,
}

impl RequestTarget {
    pub fn new(base_url: impl Into<String>, endpoint: Endpoint, method: HttpMethod) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint,
            method,
        }
    }

    /// 绝对URL，格式为 `{base}/{endpoint}`
    pub fn url(&self) -> String {
        format!("{}/{}", self.base_url, self.endpoint)
    }

    /// 按端点顺序、再按方法顺序展开单个基础URL下的工作单元
    pub fn for_chunk<'a>(
        base_url: &'a str,
        endpoints: &'a [Endpoint],
        methods: &'a MethodSet,
    ) -> impl Iterator<Item = RequestTarget> + 'a {
        endpoints.iter().flat_map(move |endpoint| {
            methods
                .iter()
                .map(move |method| RequestTarget::new(base_url, endpoint.clone(), method))
        })
    }

    /// 基础URL × 端点 × 方法 的完整笛卡尔积
    pub fn product(
        base_urls: &[String],
        endpoints: &[Endpoint],
        methods: &MethodSet,
    ) -> Vec<RequestTarget> {
        base_urls
            .iter()
            .flat_map(|base| Self::for_chunk(base, endpoints, methods))
            .collect()
    }
}

/// 一次请求的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseRecord {
    /// 完成的HTTP交换
    Exchange {
        method: HttpMethod,
        /// 跟随重定向后的最终URL
        url: String,
        status: u16,
        body: String,
        /// 响应体字符数
        length: usize,
    },
    /// 请求超时
    Timeout { method: HttpMethod, url: String },
}

impl ResponseRecord {
    pub fn exchange(method: HttpMethod, url: impl Into<String>, status: u16, body: String) -> Self {
        let length = body.chars().count();
        ResponseRecord::Exchange {
            method,
            url: url.into(),
            status,
            body,
            length,
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            ResponseRecord::Exchange { method, .. } | ResponseRecord::Timeout { method, .. } => {
                *method
            }
        }
    }

    /// HTTP状态码，超时记录没有状态码
    pub fn status(&self) -> Option<u16> {
        match self {
            ResponseRecord::Exchange { status, .. } => Some(*status),
            ResponseRecord::Timeout { .. } => None,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ResponseRecord::Exchange { url, .. } | ResponseRecord::Timeout { url, .. } => url,
        }
    }
}

/// 分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// 响应体中出现了配置的匹配字符串
    MatchDetected {
        needle: String,
        method: HttpMethod,
        url: String,
    },
    /// 响应体长度与基线不同
    LengthAnomaly {
        length: usize,
        method: HttpMethod,
        url: String,
    },
}

/// 详细模式下的跟踪行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerboseTrace {
    pub method: HttpMethod,
    pub length: usize,
    pub url: String,
}
