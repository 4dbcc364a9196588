//! 文件上传：先保障目录，再整体 PUT。

use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::internal::folders::ensure::ensure_folder;
use crate::internal::webdav::client::DavClient;
use crate::internal::webdav::enums::WebDavMethod;
use crate::internal::webdav::error::StorageError;

/// 取资源路径的目录部分（最后一个斜杠之前）
pub(crate) fn folder_portion(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(idx) => &path[..idx],
    }
}

/// 上传字节流到指定资源路径（先保障目录再 PUT）
///
/// PUT 对同一路径天然幂等（重复 PUT 即覆盖），所以整体重试是安全的
pub async fn upload(
    client: &DavClient,
    path: &str,
    bytes: Bytes,
    content_type: &str,
) -> Result<(), StorageError> {
    ensure_folder(client, folder_portion(path)).await?;
    put(client, path, bytes, content_type).await
}

/// 只做 PUT 本身，目录保障由调用方负责（编排器会单独走目录阶段）
pub(crate) async fn put(
    client: &DavClient,
    path: &str,
    bytes: Bytes,
    content_type: &str,
) -> Result<(), StorageError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_str(content_type).unwrap_or_else(|_| {
            HeaderValue::from_static("application/octet-stream")
        }),
    );

    let res = client
        .request(WebDavMethod::PUT, path, Some(headers), Some(bytes))
        .await?;

    if !res.status.is_success() {
        return Err(StorageError::Upload {
            status: res.status.as_u16(),
            body: res.body_text(),
        });
    }

    Ok(())
}
