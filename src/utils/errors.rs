// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 配置错误类型
///
/// 在校验阶段产生，出现时不会发出任何请求
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error(
        "argument -m/--method: invalid choice(s): {rejected:?} (choose from 'get', 'post', 'put', 'delete' or choose 'all')"
    )]
    InvalidMethods { rejected: Vec<String> },

    #[error("at least one target url is required")]
    MissingUrl,

    #[error("invalid target url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported url scheme `{scheme}` in `{url}`")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("worker count must be at least 1")]
    ZeroWorkers,

    #[error("timeout must be a positive number of seconds, got {0}")]
    InvalidTimeout(f64),

    #[error("a wordlist is required")]
    MissingWordlist,

    #[error("could not read wordlist `{path}`: {source}")]
    Wordlist {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration source error: {0}")]
    Source(#[from] config::ConfigError),
}

/// Worker错误类型
#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("worker {index} panicked")]
    Panicked { index: usize },

    #[error("worker {index} was cancelled")]
    Cancelled { index: usize },
}
