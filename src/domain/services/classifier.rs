// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{Finding, ResponseRecord, VerboseTrace};

/// 分类参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifierSettings {
    /// 预期的“无意义”响应长度，默认0表示所有非空响应都会被标记
    pub baseline_length: usize,
    /// 需要匹配的字符串，`None`表示不执行匹配规则
    pub match_strings: Option<Vec<String>>,
    /// 详细模式
    pub verbose: bool,
}

/// 单个响应的分类结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub findings: Vec<Finding>,
    pub trace: Option<VerboseTrace>,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty() && self.trace.is_none()
    }
}

/// 响应分类器
///
/// 纯函数式地检查响应体，不产生任何副作用
#[derive(Debug, Clone)]
pub struct ResponseClassifier {
    settings: ClassifierSettings,
}

impl ResponseClassifier {
    pub fn new(settings: ClassifierSettings) -> Self {
        Self { settings }
    }

    /// 对一次响应进行分类
    ///
    /// # 参数
    ///
    /// * `record` - 响应记录，超时记录不产生任何结果
    ///
    /// # 返回值
    ///
    /// 匹配结果在前，长度异常在后；详细模式下附带跟踪行
    pub fn classify(&self, record: &ResponseRecord) -> Classification {
        let ResponseRecord::Exchange {
            method,
            url,
            body,
            length,
            ..
        } = record
        else {
            return Classification::default();
        };

        let mut findings = Vec::new();

        if let Some(needles) = &self.settings.match_strings {
            for needle in needles {
                if body.contains(needle.as_str()) {
                    findings.push(Finding::MatchDetected {
                        needle: needle.clone(),
                        method: *method,
                        url: url.clone(),
                    });
                }
            }
        }

        if *length != self.settings.baseline_length {
            findings.push(Finding::LengthAnomaly {
                length: *length,
                method: *method,
                url: url.clone(),
            });
        }

        let trace = self.settings.verbose.then(|| VerboseTrace {
            method: *method,
            length: *length,
            url: url.clone(),
        });

        Classification { findings, trace }
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
