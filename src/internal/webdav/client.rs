//! 协议客户端：每次调用恰好发起一次带认证的网络往返。
//!
//! 这里**不解释**状态码：同一个状态码对不同动词含义完全不同
//! （MKCOL 的 405 表示目录已存在，PUT 的 405 才是真失败），
//! 所以状态码的语义判断全部留给上层各自处理。

use bytes::Bytes;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{StatusCode, header::HeaderMap};
use url::Url;

use crate::internal::auth::structs::webdav_auth::WebdavAuth;
use crate::internal::webdav::enums::WebDavMethod;
use crate::internal::webdav::error::StorageError;

/// 路径段里需要转义的字符（字母数字以外的 URL 敏感字符）
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// 一次网络往返的原始结果，状态码留给调用方解释
pub struct DavResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl DavResponse {
    /// 响应体按 UTF-8 宽松转成文本，用于错误信息和 XML 解析
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

/// 单租户协议客户端：凭证和基准地址在构造时固定，不接受按次覆盖
#[derive(Debug, Clone)]
pub struct DavClient {
    auth: WebdavAuth,
    dav_root: Url, // {base}/remote.php/dav/files/{username}/
}

impl DavClient {
    pub fn new(auth: WebdavAuth) -> Result<Self, StorageError> {
        let encoded_user =
            utf8_percent_encode(&auth.username, SEGMENT_ENCODE_SET)
                .to_string();

        let dav_root = auth
            .base_url
            .join(&format!("remote.php/dav/files/{}/", encoded_user))
            .map_err(|e| StorageError::Configuration(e.to_string()))?;

        Ok(Self { auth, dav_root })
    }

    pub fn auth(&self) -> &WebdavAuth {
        &self.auth
    }

    /// dav 命名空间在服务器上的绝对路径（含基准 URL 的子路径，尾带斜杠）
    pub(crate) fn dav_root_path(&self) -> &str {
        self.dav_root.path()
    }

    /// 把规范化资源路径拼到用户的 dav 命名空间下
    ///
    /// - 拒绝 `..` 段和反斜杠，保证拼出来的地址不会越出命名空间
    /// - 逐段做百分号转义，尾部斜杠按入参保留（MKCOL/PROPFIND 需要）
    pub(crate) fn dav_url(&self, path: &str) -> Result<Url, StorageError> {
        if path.contains('\\') || path.split('/').any(|seg| seg == "..") {
            return Err(StorageError::Configuration(format!(
                "路径不合法: {path}"
            )));
        }

        let mut encoded = path
            .split('/')
            .filter(|seg| !seg.is_empty())
            .map(|seg| utf8_percent_encode(seg, SEGMENT_ENCODE_SET).to_string())
            .collect::<Vec<_>>()
            .join("/");

        if path.ends_with('/') && !encoded.is_empty() {
            encoded.push('/');
        }

        let joined_url = self
            .dav_root
            .join(&encoded)
            .map_err(|e| StorageError::Configuration(e.to_string()))?;

        if !joined_url.as_str().starts_with(self.dav_root.as_str()) {
            return Err(StorageError::Configuration(format!(
                "路径越出用户命名空间: {path}"
            )));
        }

        Ok(joined_url)
    }

    /// OCS 分享接口地址（和 dav 命名空间无关的另一套厂商 API）
    pub(crate) fn ocs_shares_url(&self) -> Result<Url, StorageError> {
        self.auth
            .base_url
            .join("ocs/v2.php/apps/files_sharing/api/v1/shares")
            .map_err(|e| StorageError::Configuration(e.to_string()))
    }

    /// 发起一次请求并完整读回响应体
    ///
    /// 发送失败（连接/DNS/超时）和读取响应体中途断流都映射为 `Network`；
    /// 只要响应体完整读回，无论状态码如何都返回 `Ok`
    pub async fn request(
        &self,
        method: WebDavMethod,
        path: &str,
        headers: Option<HeaderMap>,
        body: Option<Bytes>,
    ) -> Result<DavResponse, StorageError> {
        let url = self.dav_url(path)?;
        let head_method = method.to_head_method()?;

        let mut builder =
            self.auth.client.request(head_method, url.clone());

        if let Some(headers) = headers {
            builder = builder.headers(headers);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let res = builder.send().await?;

        let status = res.status();
        let headers = res.headers().clone();
        let body = res.bytes().await?;

        tracing::debug!(
            method = method.as_str(),
            url = url.as_str(),
            status = status.as_u16(),
            "dav 请求完成"
        );

        Ok(DavResponse { status, headers, body })
    }
}
