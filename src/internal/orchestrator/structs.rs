use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 调用方提交的上传请求，被编排器消费一次，本库不持久化
pub struct UploadRequest {
    pub bytes: Bytes,
    pub original_file_name: String,
    /// 调用方声明的 MIME 类型，缺省按二进制流处理
    pub content_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub document_type: Option<String>,
    pub client_ref: Option<String>,
    pub obligation_ref: Option<String>,
}

/// 上传成功后回显给调用方的文档快照：入参元数据 + 计算出的文件信息
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    pub title: Option<String>,
    pub description: Option<String>,
    pub document_type: String,
    pub client_ref: Option<String>,
    pub obligation_ref: Option<String>,
    /// 实际存储用的文件名（时间戳前缀 + 清洗后的原名）
    pub file_name: String,
    pub file_size: u64,
    pub mime_type: String,
    pub uploaded_at: DateTime<Utc>,
}

/// 编排器的唯一输出，返回后不再变化
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentSnapshot>,
}
