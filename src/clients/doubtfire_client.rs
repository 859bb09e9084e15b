//! 单元管理 API 客户端
//!
//! 封装所有与服务端 REST API 相关的调用逻辑，实现导入流程需要的能力接口

use crate::config::Config;
use crate::error::{
    AppError, AppResult, CatalogLoadError, ConfigError, ConvenorChangeError, RolloverError,
    StaffAssignError,
};
use crate::models::{TeachingPeriod, Unit, UnitRole, UserRef};
use crate::services::{CatalogLookup, PeriodLookup, StaffDirectory, UnitOperations};
use crate::utils::logging::truncate_text;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// API 客户端
#[derive(Clone)]
pub struct DoubtfireClient {
    http: Client,
    base_url: String,
    username: String,
    auth_token: String,
}

impl DoubtfireClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| AppError::Config(ConfigError::HttpClient(e.to_string())))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            username: config.api_username.clone(),
            auth_token: config.api_auth_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.endpoint(path))
            .header("Username", &self.username)
            .header("Auth-Token", &self.auth_token)
            .header("Accept", "application/json")
    }

    /// 发送请求并解析 JSON 响应
    ///
    /// # 参数
    /// - `method`: HTTP 方法
    /// - `path`: `/api/` 之后的路径
    /// - `body`: 请求体（可选）
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> AppResult<T> {
        debug!("{} {}", method, path);

        let mut request = self.request(method, path);
        if let Some(body) = body {
            debug!("Payload: {}", truncate_text(&body.to_string(), 200));
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.ok().filter(|t| !t.is_empty());
            return Err(AppError::bad_response(path, status.as_u16(), message));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send_empty(&self, method: Method, path: &str, body: &Value) -> AppResult<()> {
        let _: Value = self.send(method, path, Some(body)).await?;
        Ok(())
    }
}

impl CatalogLookup for DoubtfireClient {
    async fn all_units(&self) -> Result<Vec<Unit>, CatalogLoadError> {
        self.send(Method::GET, "units?include_in_active=true", None)
            .await
            .map_err(|e| CatalogLoadError {
                message: e.to_string(),
            })
    }
}

impl StaffDirectory for DoubtfireClient {
    async fn tutors(&self) -> Result<Vec<UserRef>, CatalogLoadError> {
        self.send(Method::GET, "users/tutors", None)
            .await
            .map_err(|e| CatalogLoadError {
                message: e.to_string(),
            })
    }
}

impl PeriodLookup for DoubtfireClient {
    async fn teaching_period(&self, teaching_period_id: u64) -> Result<TeachingPeriod, CatalogLoadError> {
        self.send(
            Method::GET,
            &format!("teaching_periods/{}", teaching_period_id),
            None,
        )
        .await
        .map_err(|e| CatalogLoadError {
            message: e.to_string(),
        })
    }
}

impl UnitOperations for DoubtfireClient {
    async fn rollover_to(&self, unit: &Unit, teaching_period_id: u64) -> Result<Unit, RolloverError> {
        let body = json!({ "teaching_period_id": teaching_period_id });
        self.send(
            Method::POST,
            &format!("units/{}/rollover", unit.id),
            Some(&body),
        )
        .await
        .map_err(|e| RolloverError {
            code: unit.code.clone(),
            teaching_period_id,
            message: e.to_string(),
        })
    }

    async fn create_unit(&self, code: &str, teaching_period_id: u64) -> Result<Unit, RolloverError> {
        let body = json!({
            "unit": {
                "code": code,
                "name": code,
                "teaching_period_id": teaching_period_id,
            }
        });
        self.send(Method::POST, "units", Some(&body))
            .await
            .map_err(|e| RolloverError {
                code: code.to_string(),
                teaching_period_id,
                message: e.to_string(),
            })
    }

    async fn add_staff(&self, unit: &Unit, user: &UserRef, role: &str) -> Result<UnitRole, StaffAssignError> {
        let body = json!({
            "unit_id": unit.id,
            "user_id": user.id,
            "role": role,
        });
        self.send(Method::POST, "unit_roles", Some(&body))
            .await
            .map_err(|e| StaffAssignError {
                code: unit.code.clone(),
                user: user.name.clone(),
                message: e.to_string(),
            })
    }

    async fn change_main_convenor(&self, unit: &Unit, staff_role: &UnitRole) -> Result<(), ConvenorChangeError> {
        let body = json!({ "unit": { "main_convenor_id": staff_role.id } });
        self.send_empty(Method::PUT, &format!("units/{}", unit.id), &body)
            .await
            .map_err(|e| ConvenorChangeError {
                code: unit.code.clone(),
                user: staff_role.user.name.clone(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> DoubtfireClient {
        let config = Config {
            api_base_url: "http://localhost:3000/".to_string(),
            ..Config::default()
        };
        DoubtfireClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let client = create_test_client();
        assert_eq!(client.endpoint("units"), "http://localhost:3000/api/units");
        assert_eq!(
            client.endpoint("/units/3/rollover"),
            "http://localhost:3000/api/units/3/rollover"
        );
    }

    /// 需要本地服务端，手动运行：cargo test -- --ignored
    #[tokio::test]
    #[ignore]
    async fn test_load_catalog() {
        let client = DoubtfireClient::new(&Config::from_env()).unwrap();
        let units = client.all_units().await.unwrap();
        println!("找到 {} 个单元", units.len());
    }
}
