// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::utils::errors::ConfigurationError;

/// 读取字典文件的全部行
///
/// 非UTF-8字节按替换字符处理，过滤交给端点来源完成
///
/// # 参数
///
/// * `path` - 字典文件路径
///
/// # 返回值
///
/// * `Ok(Vec<String>)` - 按文件顺序排列的原始行
/// * `Err(ConfigurationError)` - 文件无法读取
pub async fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, ConfigurationError> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .await
        .map_err(|source| ConfigurationError::Wordlist {
            path: path.display().to_string(),
            source,
        })?;

    let lines: Vec<String> = String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect();
    debug!(path = %path.display(), lines = lines.len(), "wordlist loaded");

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_lines_keeps_raw_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# header\nadmin\r\n\nlogin\n").unwrap();

        let lines = read_lines(file.path()).await.unwrap();
        assert_eq!(lines, vec!["# header", "admin", "", "login"]);
    }

    #[tokio::test]
    async fn test_read_lines_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(dir.path().join("missing.txt")).await.unwrap_err();
        assert!(matches!(err, ConfigurationError::Wordlist { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
