//! 失败记录服务 - 业务能力层
//!
//! 只负责把失败写入日志文件，状态 "Error — check log" 指向的就是这里

use crate::error::{AppResult, FileError};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 失败记录服务
///
/// 职责：
/// - 追加写入单个单元的失败信息
/// - 不关心流程顺序
#[derive(Debug, Clone)]
pub struct ImportLogWriter {
    log_file_path: String,
}

impl ImportLogWriter {
    /// 使用默认文件路径创建
    pub fn new() -> Self {
        Self {
            log_file_path: "import_errors.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            log_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.log_file_path
    }

    /// 写入失败信息
    ///
    /// # 参数
    /// - `code`: 单元代码
    /// - `step`: 失败的步骤（rollover / add_staff / change_convenor）
    /// - `message`: 错误内容
    pub fn write(&self, code: &str, step: &str, message: &str) -> AppResult<()> {
        debug!("写入失败记录: 单元 {} | 步骤 {}", code, step);

        let write_failed = |source: std::io::Error| FileError::WriteFailed {
            path: self.log_file_path.clone(),
            source,
        };

        let line = format!(
            "{} | 单元 {} | 步骤 {} | {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            code,
            step,
            message
        );

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)
            .and_then(|mut file| file.write_all(line.as_bytes()))
            .map_err(write_failed)?;

        Ok(())
    }
}

impl Default for ImportLogWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_write_appends_lines() {
        let path = std::env::temp_dir().join(format!(
            "import_log_writer_{}.txt",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let writer = ImportLogWriter::with_path(path.to_string_lossy());
        writer.write("A101", "rollover", "boom").unwrap();
        writer.write("B202", "add_staff", "nope").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("单元 A101 | 步骤 rollover | boom"));
        assert!(lines[1].contains("单元 B202"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_failure_reports_path() {
        // 目录无法作为文件打开
        let dir = std::env::temp_dir();
        let writer = ImportLogWriter::with_path(dir.to_string_lossy());

        match writer.write("A101", "rollover", "boom").unwrap_err() {
            AppError::File(e @ FileError::WriteFailed { .. }) => {
                assert_eq!(e.path(), &*dir.to_string_lossy())
            }
            other => panic!("意外的错误: {:?}", other),
        }
    }
}
