// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::Parser;
use std::path::PathBuf;

use crate::config::settings::SettingsOverrides;

/// 命令行参数
///
/// 未给出的参数沿用配置文件和环境变量中的值
#[derive(Parser, Debug, Clone)]
#[command(name = "fuzzrs", version, about = "API endpoint fuzzer", max_term_width = 100)]
pub struct Cli {
    /// Specify the target url(s)
    #[arg(short = 'u', long = "url", value_name = "URL", num_args = 1..)]
    pub urls: Vec<String>,

    /// Specify your chosen wordlist
    #[arg(short = 'w', long, value_name = "WORDLIST")]
    pub wordlist: Option<PathBuf>,

    /// Specify the desired request methods, accepted methods are get,post,put,delete or all
    #[arg(short = 'm', long = "method", value_name = "METHOD")]
    pub method: Option<String>,

    /// Specify the response length that is tested against
    #[arg(long = "default-testing-length", visible_alias = "dl", value_name = "LENGTH")]
    pub default_testing_length: Option<u64>,

    /// Match a specific string within the response text
    #[arg(long = "match-string", visible_alias = "ms", value_name = "STRING", num_args = 1..)]
    pub match_strings: Vec<String>,

    /// Seconds before a request times out [default: 5]
    #[arg(short = 't', long, value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Verbose mode
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Ignore SSL certificate verification
    #[arg(short = 'k', long)]
    pub ignore_certificates: bool,

    /// Number of threads to use
    #[arg(long, visible_alias = "th", value_name = "THREADS", conflicts_with = "processes")]
    pub threads: Option<u64>,

    /// Number of processes to use, equivalent to --threads
    #[arg(long, visible_alias = "mp", value_name = "PROCESSES")]
    pub processes: Option<u64>,
}

impl Cli {
    /// 转换为配置覆盖项
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            urls: (!self.urls.is_empty()).then(|| self.urls.clone()),
            wordlist: self
                .wordlist
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            methods: self.method.clone(),
            baseline_length: self.default_testing_length,
            match_strings: (!self.match_strings.is_empty()).then(|| self.match_strings.clone()),
            timeout_secs: self.timeout,
            verbose: self.verbose.then_some(true),
            verify_tls: self.ignore_certificates.then_some(false),
            workers: self.threads.or(self.processes),
        }
    }
}
