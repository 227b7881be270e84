// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 候选端点
///
/// 字典中的一行路径片段，已去除首尾空白，且不为空、不以`#`或`/`开头
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    /// 从原始行构造端点，被过滤的行返回`None`
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        match trimmed.chars().next() {
            None | Some('#') | Some('/') => None,
            Some(_) => Some(Self(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 端点来源
///
/// 将字典的原始行按文件顺序转换为端点序列
///
/// # 参数
///
/// * `lines` - 原始文本行
///
/// # 返回值
///
/// 过滤掉注释行、空行和以`/`开头的行之后的端点列表
pub fn endpoints_from_lines<I, S>(lines: I) -> Vec<Endpoint>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| Endpoint::parse(line.as_ref()))
        .collect()
}
