use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 返回错误响应
    #[error("API返回错误响应 ({endpoint}): status={status}, message={message:?}")]
    BadResponse {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },
    /// JSON 解析失败
    #[error("JSON解析失败: {source}")]
    JsonParseFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 无法构建 HTTP 客户端
    #[error("无法构建 HTTP 客户端: {0}")]
    HttpClient(String),
}

/// 导入队列错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    /// 队列中没有该代码
    #[error("队列中没有单元代码 {code}")]
    UnknownCode { code: String },
    /// 候选源单元索引越界
    #[error("单元 {code} 的候选索引 {index} 超出范围 [0, {len})")]
    MatchOutOfRange {
        code: String,
        index: usize,
        len: usize,
    },
    /// 结果已记录，不能再改变
    #[error("单元 {code} 的导入结果已记录")]
    AlreadyResolved { code: String },
    /// 不能把结果改回 Pending
    #[error("单元 {code} 的导入结果不能回到待处理状态")]
    InvalidTransition { code: String },
}

// ========== 外部调用错误 ==========
// 这些错误都只在调用点记录日志，不会向上传播

/// 滚动导入失败
#[derive(Debug, Error)]
#[error("单元 {code} 滚动到教学周期 {teaching_period_id} 失败: {message}")]
pub struct RolloverError {
    pub code: String,
    pub teaching_period_id: u64,
    pub message: String,
}

/// 添加员工失败
#[derive(Debug, Error)]
#[error("无法将 {user} 加入单元 {code}: {message}")]
pub struct StaffAssignError {
    pub code: String,
    pub user: String,
    pub message: String,
}

/// 设置主负责人失败
#[derive(Debug, Error)]
#[error("无法将 {user} 设为单元 {code} 的主负责人: {message}")]
pub struct ConvenorChangeError {
    pub code: String,
    pub user: String,
    pub message: String,
}

/// 加载单元目录失败
#[derive(Debug, Error)]
#[error("加载单元目录失败: {message}")]
pub struct CatalogLoadError {
    pub message: String,
}

// ========== 从常见错误类型转换 ==========

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err
            .url()
            .map(|u| u.path().to_string())
            .unwrap_or_default();
        AppError::Api(ApiError::RequestFailed {
            endpoint,
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API错误响应
    pub fn bad_response(endpoint: impl Into<String>, status: u16, message: Option<String>) -> Self {
        AppError::Api(ApiError::BadResponse {
            endpoint: endpoint.into(),
            status,
            message,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

impl FileError {
    pub fn path(&self) -> &str {
        match self {
            FileError::ReadFailed { path, .. }
            | FileError::WriteFailed { path, .. }
            | FileError::TomlParseFailed { path, .. } => path,
        }
    }
}
