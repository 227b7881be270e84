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
use crate::engines::traits::{Transport, TransportError, TransportRequest, TransportResponse};
use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{Client, Method, Response, StatusCode, Url};
use tokio::time::Instant;
use tracing::trace;

const USER_AGENT: &str = concat!("fuzzrs/", env!("CARGO_PKG_VERSION"));

/// 与reqwest默认策略一致的最大重定向次数
const MAX_REDIRECTS: usize = 10;

/// 基于reqwest的HTTP传输
///
/// 持有两个连接池客户端，分别对应校验与跳过TLS证书校验。
/// 重定向由传输自身跟随，以便报告最终请求实际使用的方法
pub struct ReqwestTransport {
    verifying: Client,
    insecure: Client,
}

impl ReqwestTransport {
    /// 创建传输实例
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestTransport)` - 传输实例
    /// * `Err(TransportError)` - 客户端构建失败
    pub fn new() -> Result<Self, TransportError> {
        let verifying = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(Policy::none())
            .build()?;
        let insecure = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(Policy::none())
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            verifying,
            insecure,
        })
    }

    fn client(&self, verify_tls: bool) -> &Client {
        if verify_tls {
            &self.verifying
        } else {
            &self.insecure
        }
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// 重定向后使用的方法
///
/// 303对非GET请求改为GET，301/302对POST改为GET，其余保持不变
fn redirected_method(status: StatusCode, method: HttpMethod) -> HttpMethod {
    match status.as_u16() {
        303 if method != HttpMethod::Get => HttpMethod::Get,
        301 | 302 if method == HttpMethod::Post => HttpMethod::Get,
        _ => method,
    }
}

/// 解析重定向目标，没有可用的`Location`时返回`None`
fn redirect_target(response: &Response) -> Option<Url> {
    if !response.status().is_redirection() {
        return None;
    }
    let location = response.headers().get(LOCATION)?.to_str().ok()?;
    response.url().join(location).ok()
}

#[async_trait]
impl Transport for ReqwestTransport {
    /// 发送HTTP请求
    ///
    /// # 参数
    ///
    /// * `request` - 传输请求，超时对整个请求（包括重定向和读取响应体）生效
    ///
    /// # 返回值
    ///
    /// * `Ok(TransportResponse)` - 任意状态码的响应，方法和URL为最终请求的值
    /// * `Err(TransportError)` - 超时或其他传输错误
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, TransportError> {
        trace!(method = %request.method, url = %request.url, "sending request");

        let deadline = Instant::now() + request.timeout;
        let client = self.client(request.verify_tls);
        let mut method = request.method;
        let mut url = Url::parse(&request.url)
            .map_err(|e| TransportError::Other(format!("invalid url {}: {}", request.url, e)))?;
        let mut hops = 0;

        loop {
            let remaining = deadline
                .checked_duration_since(Instant::now())
                .filter(|d| !d.is_zero())
                .ok_or(TransportError::Timeout)?;

            let response = client
                .request(to_reqwest_method(method), url.clone())
                .timeout(remaining)
                .send()
                .await?;

            if let Some(next) = redirect_target(&response) {
                if hops == MAX_REDIRECTS {
                    return Err(TransportError::Other(format!(
                        "too many redirects starting at {}",
                        request.url
                    )));
                }
                hops += 1;
                method = redirected_method(response.status(), method);
                trace!(status = response.status().as_u16(), %method, to = %next, "following redirect");
                url = next;
                continue;
            }

            let status = response.status().as_u16();
            let url = response.url().to_string();
            let body = response.text().await?;

            return Ok(TransportResponse {
                method,
                url,
                status,
                body,
            });
        }
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
