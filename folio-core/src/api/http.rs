//! HTTP 请求方法

use serde::Deserialize;
use url::Url;

use crate::error::{CoreError, CoreResult};

use super::HttpBackend;

impl HttpBackend {
    /// 执行 GET 请求并解析 JSON 响应
    pub(crate) async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: Url) -> CoreResult<T> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CoreError::NetworkError(e.to_string()))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response
            .text()
            .await
            .map_err(|e| CoreError::NetworkError(format!("读取响应失败: {e}")))?;

        log::debug!("Response Body: {response_text}");

        if !status.is_success() {
            log::error!("服务器返回错误状态: {status}");
            return Err(CoreError::HttpStatus {
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            log::error!("JSON 解析失败: {e}");
            log::error!("原始响应: {response_text}");
            CoreError::ParseError(e.to_string())
        })
    }

    /// 执行 POST 表单请求，忽略响应体
    pub(crate) async fn post_form(&self, url: Url, form: &[(&str, String)]) -> CoreResult<()> {
        log::debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| CoreError::NetworkError(e.to_string()))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        if !status.is_success() {
            log::error!("服务器返回错误状态: {status}");
            return Err(CoreError::HttpStatus {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
