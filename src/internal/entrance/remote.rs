//! 库主入口：面向调用方的远端操作函数。

use crate::internal::auth::structs::webdav_auth::WebdavAuth;
use crate::internal::folders;
use crate::internal::orchestrator::structs::{UploadRequest, UploadResult};
use crate::internal::orchestrator::upload_flow::run_upload;
use crate::internal::path::build_path::DEFAULT_ROOT;
use crate::internal::resource::resource_descriptor::ResourceDescriptor;
use crate::internal::share::ocs::{self, ShareRecord};
use crate::internal::transfer::download::{self, DownloadedFile};
use crate::internal::transfer::upload;
use crate::internal::webdav::client::DavClient;
use crate::internal::webdav::error::StorageError;

/// 上传一份文档并尽力创建公开分享链接
///
/// `root` 为 None 时使用默认根目录。无论成功失败都返回一个
/// `UploadResult`，失败原因在 `error_kind` / `message` 里
pub async fn upload_document(
    auth: &WebdavAuth,
    root: Option<&str>,
    request: UploadRequest,
) -> Result<UploadResult, StorageError> {
    let client = DavClient::new(auth.clone())?;
    Ok(run_upload(&client, root.unwrap_or(DEFAULT_ROOT), request).await)
}

/// 把一段字节直接上传到指定资源路径（自动保障目录存在）
///
/// 不走路径方案和快照回显，适合调用方自己管理路径的场景
pub async fn upload_file(
    auth: &WebdavAuth,
    path: &str,
    bytes: bytes::Bytes,
    content_type: &str,
) -> Result<(), StorageError> {
    let client = DavClient::new(auth.clone())?;
    upload::upload(&client, path, bytes, content_type).await
}

/// 从远端下载一个文件，返回字节与服务器声明的 Content-Type
pub async fn download_file(
    auth: &WebdavAuth,
    path: &str,
) -> Result<DownloadedFile, StorageError> {
    let client = DavClient::new(auth.clone())?;
    download::download(&client, path).await
}

/// 列出目录的直接子资源
pub async fn list_folder(
    auth: &WebdavAuth,
    path: &str,
) -> Result<Vec<ResourceDescriptor>, StorageError> {
    let client = DavClient::new(auth.clone())?;
    folders::list::list_folder(&client, path).await
}

/// 幂等地确保目录路径存在
pub async fn ensure_folder(
    auth: &WebdavAuth,
    path: &str,
) -> Result<(), StorageError> {
    let client = DavClient::new(auth.clone())?;
    folders::ensure::ensure_folder(&client, path).await
}

/// 为已存在的资源创建公开只读分享；尽力而为，失败返回 None
pub async fn create_public_share(
    auth: &WebdavAuth,
    path: &str,
) -> Result<Option<ShareRecord>, StorageError> {
    let client = DavClient::new(auth.clone())?;
    Ok(ocs::create_public_share(&client, path).await)
}
