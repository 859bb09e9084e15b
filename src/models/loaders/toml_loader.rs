use crate::error::{AppResult, FileError};
use crate::models::plan::ImportPlan;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载导入计划
pub async fn load_import_plan(toml_file_path: &Path) -> AppResult<ImportPlan> {
    let path = toml_file_path.display().to_string();
    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: path.clone(),
            source,
        })?;

    parse_import_plan(&content, &path)
}

/// 解析导入计划内容
///
/// `codes` 既可以是逗号分隔的字符串，也可以是字符串数组；
/// `path` 只用于错误信息
pub fn parse_import_plan(content: &str, path: &str) -> AppResult<ImportPlan> {
    let plan: ImportPlan = toml::from_str(content).map_err(|source| FileError::TomlParseFailed {
        path: path.to_string(),
        source,
    })?;
    if plan.codes.trim().is_empty() {
        tracing::warn!("导入计划中没有单元代码: {}", path);
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_parse_plan_with_string_codes() {
        let plan = parse_import_plan(
            r#"
            teaching_period_id = 42
            codes = "COS10001, COS20007"
            "#,
            "plan.toml",
        )
        .unwrap();
        assert_eq!(plan.teaching_period_id, 42);
        assert_eq!(plan.codes, "COS10001, COS20007");
    }

    #[test]
    fn test_parse_plan_with_array_codes() {
        let plan = parse_import_plan(
            r#"
            teaching_period_id = 7
            codes = ["A101", "B202"]
            "#,
            "plan.toml",
        )
        .unwrap();
        assert_eq!(plan.codes, "A101,B202");
    }

    #[test]
    fn test_parse_plan_missing_period_reports_path() {
        let err = parse_import_plan(r#"codes = "A101""#, "plans/t1.toml").unwrap_err();
        match err {
            AppError::File(FileError::TomlParseFailed { ref path, .. }) => {
                assert_eq!(path, "plans/t1.toml")
            }
            other => panic!("意外的错误: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_reports_path() {
        let err = load_import_plan(Path::new("definitely/not/here.toml"))
            .await
            .unwrap_err();
        match err {
            AppError::File(e @ FileError::ReadFailed { .. }) => {
                assert!(e.path().ends_with("here.toml"))
            }
            other => panic!("意外的错误: {:?}", other),
        }
    }
}
