//! 文件下载：整体 GET，原样透传字节和 Content-Type。

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

use crate::internal::webdav::client::{DavClient, DavResponse};
use crate::internal::webdav::enums::WebDavMethod;
use crate::internal::webdav::error::StorageError;

/// 下载结果：字节 + 服务器声明的 Content-Type
#[derive(Debug)]
pub struct DownloadedFile {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

/// 从资源路径下载整个文件
///
/// 404 单独映射为 `NotFound`，其余非 2xx 统一 `Download`
pub async fn download(
    client: &DavClient,
    path: &str,
) -> Result<DownloadedFile, StorageError> {
    let res = client.request(WebDavMethod::GET, path, None, None).await?;
    interpret_get_response(res, path)
}

/// GET 响应的状态语义判定，单独拆出便于测试
pub(crate) fn interpret_get_response(
    res: DavResponse,
    path: &str,
) -> Result<DownloadedFile, StorageError> {
    if res.status == StatusCode::NOT_FOUND {
        return Err(StorageError::NotFound { path: path.to_string() });
    }

    if !res.status.is_success() {
        return Err(StorageError::Download {
            status: res.status.as_u16(),
            body: res.body_text(),
        });
    }

    let content_type = res
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    Ok(DownloadedFile { bytes: res.body, content_type })
}
