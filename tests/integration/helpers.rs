// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use fuzzrs::config::settings::{Settings, SettingsOverrides};
use fuzzrs::presentation::reporter::Reporter;
use fuzzrs::workers::RunReport;

/// 以给定基础URL构造配置，超时缩短到500毫秒
pub fn settings_for(urls: Vec<String>, overrides: SettingsOverrides) -> Settings {
    Settings::load(SettingsOverrides {
        urls: Some(urls),
        timeout_secs: Some(0.5),
        ..overrides
    })
    .expect("settings should load")
}

/// 渲染运行结果为输出行
pub fn render(report: &RunReport) -> Vec<String> {
    let mut reporter = Reporter::new(Vec::new());
    reporter.report(report).expect("write to memory");
    String::from_utf8(reporter.into_inner())
        .expect("utf-8 output")
        .lines()
        .map(str::to_string)
        .collect()
}
