//! 目录保障：逐段 MKCOL，把"已存在"当成功，保证幂等。

use reqwest::StatusCode;

use crate::internal::webdav::client::DavClient;
use crate::internal::webdav::enums::WebDavMethod;
use crate::internal::webdav::error::StorageError;

/// MKCOL 的成功判定：2xx（新建成功）和 405（已存在）都算成功
pub(crate) fn created_or_exists(status: StatusCode) -> bool {
    status.is_success() || status == StatusCode::METHOD_NOT_ALLOWED
}

/// 确保目录路径在远端存在
///
/// Nextcloud 的 MKCOL 要求父目录已存在，所以从最外层开始逐段创建。
/// 重复调用不会因为目录已存在而失败。
pub async fn ensure_folder(
    client: &DavClient,
    folder_path: &str,
) -> Result<(), StorageError> {
    let mut current = String::new();

    for segment in folder_path.split('/').filter(|s| !s.is_empty()) {
        current.push('/');
        current.push_str(segment);

        let res = client
            .request(WebDavMethod::MKCOL, &current, None, None)
            .await?;

        if !created_or_exists(res.status) {
            return Err(StorageError::Provision {
                status: res.status.as_u16(),
                body: res.body_text(),
            });
        }
    }

    Ok(())
}
