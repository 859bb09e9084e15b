/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 服务端 API 地址
    pub api_base_url: String,
    /// 登录用户名（Username 请求头）
    pub api_username: String,
    /// 认证令牌（Auth-Token 请求头）
    pub api_auth_token: String,
    /// 导入计划文件
    pub import_plan_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 失败记录文件
    pub import_log_file: String,
    /// 单个请求超时（秒），None 表示不限制
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            api_username: String::new(),
            api_auth_token: String::new(),
            import_plan_file: "import_plan.toml".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            import_log_file: "import_errors.txt".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(default.api_base_url),
            api_username: std::env::var("API_USERNAME").unwrap_or(default.api_username),
            api_auth_token: std::env::var("API_AUTH_TOKEN").unwrap_or(default.api_auth_token),
            import_plan_file: std::env::var("IMPORT_PLAN_FILE").unwrap_or(default.import_plan_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            import_log_file: std::env::var("IMPORT_LOG_FILE").unwrap_or(default.import_log_file),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).or(default.request_timeout_secs),
        }
    }
}
