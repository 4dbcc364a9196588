//! 上传编排：目录保障 → 上传 → 分享，一条显式状态链。
//!
//! 分享步骤永远不会让整个流程失败；目录和上传任一步失败则
//! 立即终止并把错误原样带回（含远端状态码和响应体，便于排障）。

use chrono::{Datelike, Utc};
use tracing::{error, info};

use crate::internal::folders::ensure::ensure_folder;
use crate::internal::orchestrator::structs::{
    DocumentSnapshot, UploadRequest, UploadResult,
};
use crate::internal::path::build_path::{
    build_folder_path, unique_file_name,
};
use crate::internal::share::ocs::create_public_share;
use crate::internal::transfer::upload::put;
use crate::internal::webdav::client::DavClient;
use crate::internal::webdav::error::StorageError;

/// documentType 缺省时落进的目录
const DEFAULT_DOCUMENT_TYPE: &str = "general";

/// 流程阶段，只用于日志与失败归因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Received,
    FolderEnsured,
    Uploaded,
    ShareAttempted,
}

impl Stage {
    fn as_str(&self) -> &'static str {
        match self {
            Stage::Received => "received",
            Stage::FolderEnsured => "folder_ensured",
            Stage::Uploaded => "uploaded",
            Stage::ShareAttempted => "share_attempted",
        }
    }
}

fn failed(stage: Stage, err: StorageError) -> UploadResult {
    error!(stage = stage.as_str(), error = %err, "上传流程终止");
    UploadResult {
        success: false,
        remote_path: None,
        share_url: None,
        error_kind: Some(err.error_kind().to_string()),
        message: Some(err.to_string()),
        document: None,
    }
}

/// 执行一次完整的文档上传
///
/// 路径方案：`/{root}/{document_type}/{当前年份}/{时间戳}_{清洗后文件名}`
pub async fn run_upload(
    client: &DavClient,
    root: &str,
    request: UploadRequest,
) -> UploadResult {
    let mut stage = Stage::Received;

    let document_type = request
        .document_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_DOCUMENT_TYPE)
        .to_string();
    let year = Utc::now().year();

    let folder = match build_folder_path(root, &document_type, year) {
        Ok(folder) => folder,
        Err(e) => return failed(stage, e),
    };
    let file_name = match unique_file_name(&request.original_file_name) {
        Ok(name) => name,
        Err(e) => return failed(stage, e),
    };
    let remote_path = format!("{folder}/{file_name}");

    if let Err(e) = ensure_folder(client, &folder).await {
        return failed(stage, e);
    }
    stage = Stage::FolderEnsured;

    let mime_type = request
        .content_type
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let file_size = request.bytes.len() as u64;

    if let Err(e) =
        put(client, &remote_path, request.bytes, &mime_type).await
    {
        return failed(stage, e);
    }
    stage = Stage::Uploaded;
    info!(
        stage = stage.as_str(),
        path = remote_path.as_str(),
        size = file_size,
        "文件已上传"
    );

    // 分享是尽力而为的附加步骤，失败只体现为 share_url 缺失
    let share_url = create_public_share(client, &remote_path)
        .await
        .map(|record| record.public_url);
    stage = Stage::ShareAttempted;
    info!(
        stage = stage.as_str(),
        shared = share_url.is_some(),
        "上传流程完成"
    );

    UploadResult {
        success: true,
        remote_path: Some(remote_path),
        share_url,
        error_kind: None,
        message: None,
        document: Some(DocumentSnapshot {
            title: request.title,
            description: request.description,
            document_type,
            client_ref: request.client_ref,
            obligation_ref: request.obligation_ref,
            file_name,
            file_size,
            mime_type,
            uploaded_at: Utc::now(),
        }),
    }
}
