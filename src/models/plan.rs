use serde::{Deserialize, Deserializer};

/// 导入计划（命令行使用的 TOML 文件）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImportPlan {
    /// 目标教学周期
    pub teaching_period_id: u64,
    /// 逗号分隔的单元代码
    #[serde(deserialize_with = "codes_from_string_or_list")]
    pub codes: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CodesField {
    Text(String),
    List(Vec<String>),
}

fn codes_from_string_or_list<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match CodesField::deserialize(deserializer)? {
        CodesField::Text(text) => text,
        CodesField::List(list) => list.join(","),
    })
}
