// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 未设置`RUST_LOG`时的过滤规则
///
/// 只显示警告及以上，扫描结果与超时提示由stdout输出负责
pub const DEFAULT_FILTER: &str = "warn";

/// 初始化日志
///
/// 日志写入stderr，stdout只保留扫描结果
pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
