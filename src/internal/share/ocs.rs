//! Nextcloud OCS 分享接口：为已上传资源创建公开只读链接。
//!
//! 整个模块是尽力而为的：任何失败（网络、非 2xx、响应解析不出 url）
//! 都记一条 warn 然后返回 None，绝不把失败传染给上传主流程——
//! 没有公开链接的文件依然是一份完整有效的存储文档。

use serde::Deserialize;
use tracing::{debug, warn};

use crate::internal::webdav::client::DavClient;

/// 分享创建成功后的本地观测结果，分享本体归远端系统所有
#[derive(Debug, Clone)]
pub struct ShareRecord {
    pub resource_path: String,
    pub public_url: String,
    pub read_only: bool,
    pub password_protected: bool,
}

/// OCS XML 响应顶层 `<ocs>` 节点（JSON 响应里是 "ocs" 字段）
#[derive(Debug, Deserialize)]
struct OcsEnvelope {
    data: Option<OcsShareData>,
}

/// `<data>` 节点，只关心分享链接，其余字段一概忽略
#[derive(Debug, Deserialize)]
struct OcsShareData {
    url: Option<String>,
}

/// JSON 变体的外层包装：`{"ocs": {...}}`
#[derive(Debug, Deserialize)]
struct OcsJsonBody {
    ocs: OcsEnvelope,
}

/// 从 OCS 响应体里提取分享链接
///
/// Nextcloud 默认吐 XML，但经过某些网关会被改写成 JSON，两种都认；
/// 解析失败才返回 None，而不是靠正则扫字符串碰运气
pub(crate) fn parse_share_url(body: &str) -> Option<String> {
    let trimmed = body.trim_start();

    let envelope: Option<OcsEnvelope> = if trimmed.starts_with('{') {
        serde_json::from_str::<OcsJsonBody>(trimmed).ok().map(|b| b.ocs)
    } else {
        quick_xml::de::from_str::<OcsEnvelope>(trimmed).ok()
    };

    envelope
        .and_then(|e| e.data)
        .and_then(|d| d.url)
        .filter(|u| !u.is_empty())
}

/// 为资源路径创建公开只读分享（shareType=3，permissions=1，无密码）
pub async fn create_public_share(
    client: &DavClient,
    path: &str,
) -> Option<ShareRecord> {
    let url = match client.ocs_shares_url() {
        Ok(url) => url,
        Err(e) => {
            warn!(path, error = %e, "OCS 地址拼装失败，跳过分享");
            return None;
        }
    };

    let res = client
        .auth()
        .client
        .post(url)
        .header("OCS-APIRequest", "true")
        .form(&[
            ("path", path),
            ("shareType", "3"),
            ("permissions", "1"),
        ])
        .send()
        .await;

    let res = match res {
        Ok(res) => res,
        Err(e) => {
            warn!(path, error = %e, "分享请求未到达服务器");
            return None;
        }
    };

    let status = res.status();
    let body = match res.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!(path, error = %e, "读取分享响应失败");
            return None;
        }
    };

    if !status.is_success() {
        warn!(path, status = status.as_u16(), "分享接口返回异常状态");
        return None;
    }

    match parse_share_url(&body) {
        Some(public_url) => {
            debug!(path, url = public_url.as_str(), "公开分享创建成功");
            Some(ShareRecord {
                resource_path: path.to_string(),
                public_url,
                read_only: true,
                password_protected: false,
            })
        }
        None => {
            warn!(path, "分享响应里找不到链接");
            None
        }
    }
}
