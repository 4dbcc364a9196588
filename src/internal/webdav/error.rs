//! 存储相关错误类型。

use thiserror::Error;

/// 覆盖整个上传/下载/列表/分享流程的错误分类
///
/// 注意区分 `Network`（请求没有到达服务器）和 `Remote`（服务器给了非 2xx 响应），
/// 上层可以据此决定是否值得整体重试
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("配置缺失或无效: {0}")]
    Configuration(String),

    #[error("网络请求未到达服务器: {0}")]
    Network(#[from] reqwest::Error),

    #[error("远端返回异常状态 {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("目录创建失败 {status}: {body}")]
    Provision { status: u16, body: String },

    #[error("上传失败 {status}: {body}")]
    Upload { status: u16, body: String },

    #[error("下载失败 {status}: {body}")]
    Download { status: u16, body: String },

    #[error("远端资源不存在: {path}")]
    NotFound { path: String },

    #[error("响应体解析失败: {0}")]
    Parse(String),

    #[error("文件名清洗后为空，无法生成安全文件名")]
    InvalidName,
}

impl StorageError {
    /// 对外接口使用的错误种类标签（网关 JSON 中的 errorKind 字段）
    pub fn error_kind(&self) -> &'static str {
        match self {
            StorageError::Configuration(_) => "ConfigurationError",
            StorageError::Network(_) => "NetworkError",
            StorageError::Remote { .. } => "RemoteError",
            StorageError::Provision { .. } => "ProvisionError",
            StorageError::Upload { .. } => "UploadError",
            StorageError::Download { .. } => "DownloadError",
            StorageError::NotFound { .. } => "NotFoundError",
            StorageError::Parse(_) => "ParseError",
            StorageError::InvalidName => "InvalidNameError",
        }
    }
}
