use core::fmt;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use sha2::{Digest, Sha256};
use url::Url;

use crate::internal::webdav::error::StorageError;

/// 默认的整体请求超时，避免远端卡死时把调用方一起拖住
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// 认证结构体
///
/// 该结构体定位
/// - 用于存储基础 WebDAV 认证信息（凭证只在构造时出现一次，之后以默认请求头的形式存在）
/// - 网关会在多个任务间共享它，所以内部全部用 Arc
///
/// 默认 Eq 时会匹配 base_url 和 token，如果需要单独比较 token，需使用 eq_only_token 方法
#[derive(Clone)]
pub struct WebdavAuth {
    pub client: Client, // 内部是 Arc，不需要特殊处理
    pub base_url: Arc<Url>,
    pub username: Arc<String>, // dav 命名空间 remote.php/dav/files/{username} 需要它
    pub(crate) encrypted_token: Arc<String>, // 对外导出时，不允许直接访问，哪怕它是被加密的
}

impl WebdavAuth {
    /// 创建新的认证结构体
    ///
    /// 三个参数任何一个为空都视为配置错误，在发起任何网络请求之前就失败
    pub fn new(
        username: &str,
        password: &str,
        base_url: &str,
    ) -> Result<Self, StorageError> {
        if username.is_empty() || password.is_empty() {
            return Err(StorageError::Configuration(
                "用户名或密码为空".to_string(),
            ));
        }

        let http_client = _InternalHttpClient::_create(username, password)?;

        let base_url = _format_base_url(base_url)?;

        Ok(Self {
            client: http_client.client,
            base_url: Arc::new(base_url),
            username: Arc::new(username.to_string()),
            encrypted_token: Arc::new(http_client.encrypted_token),
        })
    }

    /// 仅比较 token 是否相等
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
    }
}

/// 用于比较认证结构体是否相等
impl PartialEq for WebdavAuth {
    fn eq(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
            && self.base_url == other.base_url
    }
}

/// 防止 debug 泄漏账号
impl fmt::Debug for WebdavAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebdavAuth")
            .field("base_url", &self.base_url.as_str())
            .field("client", &"<Client with hidden authorization>")
            .finish()
    }
}

fn _format_base_url(url: &str) -> Result<Url, StorageError> {
    if url.is_empty() {
        return Err(StorageError::Configuration("服务器地址为空".to_string()));
    }

    let mut base_url = Url::parse(url)
        .map_err(|e| StorageError::Configuration(e.to_string()))?;

    if !base_url.path().ends_with('/') {
        let new_path = format!("{}/", base_url.path());
        base_url.set_path(&new_path);
    }

    Ok(base_url)
}

/// 内部临时使用的 http 客户端结构体，在初始化 WebdavAuth 时使用
struct _InternalHttpClient {
    client: Client,
    encrypted_token: String,
}

impl _InternalHttpClient {
    fn _encrypt_str(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// 创建 http 客户端，内部使用
    fn _create(
        username: &str,
        password: &str,
    ) -> Result<Self, StorageError> {
        let mut headers = HeaderMap::new();

        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{username}:{password}"));

        let auth_value = HeaderValue::from_str(&format!("Basic {}", token))
            .map_err(|e| StorageError::Configuration(e.to_string()))?;

        headers.insert(AUTHORIZATION, auth_value);

        let http_client = Client::builder()
            .http1_only()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(StorageError::Network)?;

        let encrypted_token = Self::_encrypt_str(&token);

        Ok(Self { client: http_client, encrypted_token })
    }
}
