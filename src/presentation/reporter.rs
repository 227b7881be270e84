// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::io::{self, Write};

use crate::config::settings::RunConfig;
use crate::domain::models::{Finding, VerboseTrace};
use crate::workers::{RunReport, WorkerEvent};

const RULE: &str = "_____________________________________________________________________";

/// 行式输出
///
/// 所有结果写入给定的writer，通常是stdout
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{RULE}")?;
        writeln!(
            self.out,
            "FUZZRS - API endpoint fuzzer v{}",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out)
    }

    /// 扫描开始前的参数摘要
    pub fn header(&mut self, config: &RunConfig) -> io::Result<()> {
        writeln!(self.out, "URL: {}", config.base_urls.join(","))?;
        writeln!(self.out, "Methods: {}", config.methods)?;
        if let Some(needles) = &config.classifier.match_strings {
            for needle in needles {
                writeln!(self.out, "Matching String: {needle}")?;
            }
        }

        if config.classifier.verbose {
            writeln!(self.out, "Length - URL\n")
        } else {
            writeln!(self.out, "\n")
        }
    }

    pub fn finding(&mut self, finding: &Finding) -> io::Result<()> {
        match finding {
            Finding::MatchDetected {
                needle,
                method,
                url,
            } => writeln!(self.out, "[+] {method} - \"{needle}\" detected: {url}"),
            Finding::LengthAnomaly {
                length,
                method,
                url,
            } => writeln!(
                self.out,
                "[+] {method} - Different response length: {length} - {url}"
            ),
        }
    }

    pub fn trace(&mut self, trace: &VerboseTrace) -> io::Result<()> {
        writeln!(
            self.out,
            "[VERBOSE] {} {}       {}",
            trace.method, trace.length, trace.url
        )
    }

    pub fn event(&mut self, event: &WorkerEvent) -> io::Result<()> {
        match event {
            WorkerEvent::Response { classification, .. } => {
                for finding in &classification.findings {
                    self.finding(finding)?;
                }
                if let Some(trace) = &classification.trace {
                    self.trace(trace)?;
                }
                Ok(())
            }
            WorkerEvent::Timeout { method, url } => {
                writeln!(self.out, "[Verbose] {method} - Connection timed out - {url}")
            }
            WorkerEvent::Aborted {
                worker,
                method,
                url,
                reason,
            } => writeln!(
                self.out,
                "[!] {method} - Request failed, worker {worker} aborted: {reason} - {url}"
            ),
        }
    }

    pub fn report(&mut self, report: &RunReport) -> io::Result<()> {
        for event in &report.events {
            self.event(event)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{HttpMethod, MethodSet};
    use crate::domain::services::{Classification, ClassifierSettings};
    use std::time::Duration;

    fn render(f: impl FnOnce(&mut Reporter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut reporter = Reporter::new(Vec::new());
        f(&mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    fn config(verbose: bool, needles: Option<Vec<String>>) -> RunConfig {
        RunConfig {
            base_urls: vec!["http://a".into(), "http://b".into()],
            methods: MethodSet::parse("get,delete").unwrap(),
            classifier: ClassifierSettings {
                baseline_length: 0,
                match_strings: needles,
                verbose,
            },
            timeout: Duration::from_secs(5),
            verify_tls: true,
            workers: 1,
        }
    }

    #[test]
    fn test_header() {
        let out = render(|r| r.header(&config(true, Some(vec!["admin".into()]))));
        assert_eq!(
            out,
            "URL: http://a,http://b\nMethods: GET,DELETE\nMatching String: admin\nLength - URL\n\n"
        );

        let out = render(|r| r.header(&config(false, None)));
        assert_eq!(out, "URL: http://a,http://b\nMethods: GET,DELETE\n\n\n");
    }

    #[test]
    fn test_response_lines_in_order() {
        let event = WorkerEvent::Response {
            method: HttpMethod::Post,
            url: "http://x/api".into(),
            length: 7,
            classification: Classification {
                findings: vec![
                    Finding::MatchDetected {
                        needle: "key".into(),
                        method: HttpMethod::Post,
                        url: "http://x/api".into(),
                    },
                    Finding::LengthAnomaly {
                        length: 7,
                        method: HttpMethod::Post,
                        url: "http://x/api".into(),
                    },
                ],
                trace: Some(VerboseTrace {
                    method: HttpMethod::Post,
                    length: 7,
                    url: "http://x/api".into(),
                }),
            },
        };

        let out = render(|r| r.event(&event));
        assert_eq!(
            out,
            "[+] POST - \"key\" detected: http://x/api\n\
             [+] POST - Different response length: 7 - http://x/api\n\
             [VERBOSE] POST 7       http://x/api\n"
        );
    }

    #[test]
    fn test_timeout_is_one_line() {
        let out = render(|r| {
            r.event(&WorkerEvent::Timeout {
                method: HttpMethod::Get,
                url: "http://x/slow".into(),
            })
        });
        assert_eq!(out, "[Verbose] GET - Connection timed out - http://x/slow\n");
    }

    #[test]
    fn test_aborted_line() {
        let out = render(|r| {
            r.event(&WorkerEvent::Aborted {
                worker: 1,
                method: HttpMethod::Put,
                url: "http://x/a".into(),
                reason: "Other error: refused".into(),
            })
        });
        assert_eq!(
            out,
            "[!] PUT - Request failed, worker 1 aborted: Other error: refused - http://x/a\n"
        );
    }

    #[test]
    fn test_banner_mentions_version() {
        let out = render(|r| r.banner());
        assert!(out.contains(env!("CARGO_PKG_VERSION")));
    }
}
