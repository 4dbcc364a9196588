//! 文档上传网关：对外的 HTTP 入口，只做请求/响应的转换，
//! 上传语义全部在库的编排器里。

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nextcloud_fs::auth::WebdavAuth;
use nextcloud_fs::orchestrator::{DocumentSnapshot, UploadRequest};
use nextcloud_fs::upload_document;

/// 进程级共享状态：一份凭证 + 根目录，库本身无状态
struct AppState {
    auth: WebdavAuth,
    root: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<DocumentSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nextcloud_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    share_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<String>,
}

impl UploadResponse {
    fn failure(kind: &str, message: String) -> Self {
        Self {
            success: false,
            document: None,
            nextcloud_path: None,
            share_url: None,
            error: Some(message),
            error_kind: Some(kind.to_string()),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// 三个必填参数缺一不可，在发起任何网络请求之前就失败退出
fn load_auth_from_env() -> Result<WebdavAuth> {
    let url =
        env::var("NEXTCLOUD_URL").context("缺少环境变量 NEXTCLOUD_URL")?;
    let username = env::var("NEXTCLOUD_USERNAME")
        .context("缺少环境变量 NEXTCLOUD_USERNAME")?;
    let password = env::var("NEXTCLOUD_PASSWORD")
        .context("缺少环境变量 NEXTCLOUD_PASSWORD")?;

    WebdavAuth::new(&username, &password, &url).context("凭证配置无效")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nextcloud_fs=info,gateway=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let auth = load_auth_from_env()?;
    let root = env::var("NEXTCLOUD_ROOT")
        .unwrap_or_else(|_| nextcloud_fs::path::DEFAULT_ROOT.to_string());
    info!(root = root.as_str(), "配置加载完成");

    let state = Arc::new(AppState { auth, root });

    let app = Router::new()
        .route("/api/documents", post(upload_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    let addr = env::var("GATEWAY_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    info!(addr = addr.as_str(), "文档上传网关启动");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// 健康检查
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// multipart 表单收拢后的中间产物
#[derive(Default)]
struct SubmittedForm {
    file_bytes: Option<Bytes>,
    file_name: Option<String>,
    content_type: Option<String>,
    title: Option<String>,
    description: Option<String>,
    document_type: Option<String>,
    client_id: Option<String>,
    obligation_id: Option<String>,
}

async fn read_multipart(
    multipart: &mut Multipart,
) -> Result<SubmittedForm, String> {
    let mut form = SubmittedForm::default();

    while let Some(field) =
        multipart.next_field().await.map_err(|e| e.to_string())?
    {
        let Some(name) = field.name().map(|n| n.to_string()) else {
            continue;
        };

        match name.as_str() {
            "file" => {
                form.file_name =
                    field.file_name().map(|n| n.to_string());
                form.content_type =
                    field.content_type().map(|c| c.to_string());
                form.file_bytes =
                    Some(field.bytes().await.map_err(|e| e.to_string())?);
            }
            "title" => form.title = field.text().await.ok(),
            "description" => form.description = field.text().await.ok(),
            "documentType" => form.document_type = field.text().await.ok(),
            "clientId" => form.client_id = field.text().await.ok(),
            "obligationId" => form.obligation_id = field.text().await.ok(),
            _ => {} // 未知字段一律忽略
        }
    }

    Ok(form)
}

/// 上传端点：multipart 进，JSON 出；200 表示成功，500 表示失败
async fn upload_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> (StatusCode, Json<UploadResponse>) {
    let form = match read_multipart(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            warn!(error = e.as_str(), "multipart 解析失败");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UploadResponse::failure(
                    "BadRequestError",
                    format!("表单解析失败: {e}"),
                )),
            );
        }
    };

    let Some(bytes) = form.file_bytes else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(UploadResponse::failure(
                "BadRequestError",
                "缺少必填字段 file".to_string(),
            )),
        );
    };

    let request = UploadRequest {
        bytes,
        original_file_name: form
            .file_name
            .unwrap_or_else(|| "upload.bin".to_string()),
        content_type: form.content_type,
        title: form.title,
        description: form.description,
        document_type: form.document_type,
        client_ref: form.client_id,
        obligation_ref: form.obligation_id,
    };

    let result =
        match upload_document(&state.auth, Some(&state.root), request).await
        {
            Ok(result) => result,
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(UploadResponse::failure(
                        e.error_kind(),
                        e.to_string(),
                    )),
                );
            }
        };

    if result.success {
        (
            StatusCode::OK,
            Json(UploadResponse {
                success: true,
                document: result.document,
                nextcloud_path: result.remote_path,
                share_url: result.share_url,
                error: None,
                error_kind: None,
            }),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(UploadResponse {
                success: false,
                document: None,
                nextcloud_path: None,
                share_url: None,
                error: result.message,
                error_kind: result.error_kind,
            }),
        )
    }
}
