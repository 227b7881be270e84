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

use anyhow::Context;
use clap::Parser;
use fuzzrs::config::settings::Settings;
use fuzzrs::engines::reqwest_engine::ReqwestTransport;
use fuzzrs::infrastructure::wordlist;
use fuzzrs::presentation::cli::Cli;
use fuzzrs::presentation::reporter::Reporter;
use fuzzrs::utils::errors::ConfigurationError;
use fuzzrs::utils::telemetry;
use fuzzrs::workers::RunCoordinator;
use std::sync::Arc;
use tracing::info;

/// 主函数
///
/// 解析参数、校验配置、执行扫描并输出结果。配置错误在发出任何请求前返回
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();

    let cli = Cli::parse();
    let mut reporter = Reporter::new(std::io::stdout());
    reporter.banner()?;

    // 2. Load configuration
    let settings = Settings::load(cli.overrides()).map_err(ConfigurationError::from)?;
    info!("Configuration loaded");

    // 3. Load the wordlist
    let path = settings
        .target
        .wordlist
        .clone()
        .ok_or(ConfigurationError::MissingWordlist)?;
    let lines = wordlist::read_lines(&path).await?;

    // 4. Validate and plan
    let transport = Arc::new(ReqwestTransport::new().context("failed to build http client")?);
    let mut coordinator = RunCoordinator::new(transport);
    let plan = coordinator.prepare(&settings, lines)?;
    reporter.header(plan.config())?;
    info!(requests = plan.request_count(), "Dispatching");

    // 5. Dispatch and report
    let report = coordinator.execute(plan).await;
    reporter.report(&report)?;

    Ok(())
}
