// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::ConfigurationError;
use std::fmt;
use std::str::FromStr;

/// HTTP请求方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// `all`展开后的完整方法集合，顺序固定
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    /// 小写规范名称
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }

    /// 线上传输使用的大写名称
    pub fn as_upper(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_upper())
    }
}

impl FromStr for HttpMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// 方法集合
///
/// 有序、非空、无重复，构造后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSet {
    methods: Vec<HttpMethod>,
}

impl MethodSet {
    /// 包含全部四种方法的集合
    pub fn all() -> Self {
        Self {
            methods: HttpMethod::ALL.to_vec(),
        }
    }

    /// 解析逗号分隔的方法描述
    ///
    /// # 参数
    ///
    /// * `specifier` - 例如 `get,post` 或 `all`
    ///
    /// # 返回值
    ///
    /// * `Ok(MethodSet)` - 去重后保持首次出现顺序的方法集合
    /// * `Err(ConfigurationError)` - 包含无法识别的方法
    pub fn parse(specifier: &str) -> Result<Self, ConfigurationError> {
        let mut tokens: Vec<String> = Vec::new();
        for token in specifier.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let token = token.to_ascii_lowercase();
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }

        // `all` only short-circuits in first position
        match tokens.first() {
            None => {
                return Err(ConfigurationError::InvalidMethods {
                    rejected: vec![specifier.to_string()],
                })
            }
            Some(first) if first == "all" => return Ok(Self::all()),
            Some(_) => {}
        }

        let mut methods = Vec::with_capacity(tokens.len());
        let mut rejected = Vec::new();
        for token in &tokens {
            match token.parse::<HttpMethod>() {
                Ok(method) => methods.push(method),
                Err(()) => rejected.push(token.clone()),
            }
        }

        if !rejected.is_empty() {
            return Err(ConfigurationError::InvalidMethods { rejected });
        }

        Ok(Self { methods })
    }

    pub fn iter(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        self.methods.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl fmt::Display for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.methods.iter().map(HttpMethod::as_upper).collect();
        f.write_str(&names.join(","))
    }
}

#[cfg(test)]
#[path = "method_set_test.rs"]
mod tests;
