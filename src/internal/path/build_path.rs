//! 逻辑路径构造：把（文档类型，年份，原始文件名）映射为规范化远端路径。
//!
//! 纯函数，不碰网络。同一（类型，年份）总是落进同一个目录，
//! 文件名则带时间戳前缀保证并发同名上传互不覆盖。

use chrono::Utc;

use crate::internal::webdav::error::StorageError;

/// 默认的远端根目录
pub const DEFAULT_ROOT: &str = "Documents";

/// 清洗后文件名的长度上限
const MAX_NAME_LEN: usize = 255;

/// 把任意字符串清洗成只含 `[A-Za-z0-9._-]` 的安全名
///
/// 非法字符替换为 `_`，连续的 `_` 折叠成一个，超长截断；
/// 清洗结果为空时返回 `InvalidName`，由调用方自行兜底
pub fn sanitize_name(raw: &str) -> Result<String, StorageError> {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_underscore = false;

    for c in raw.chars() {
        let safe = matches!(c, 'A'..='Z' | 'a'..='z' | '0'..='9' | '.' | '_' | '-');
        let next = if safe { c } else { '_' };

        if next == '_' {
            if last_was_underscore {
                continue;
            }
            last_was_underscore = true;
        } else {
            last_was_underscore = false;
        }

        out.push(next);

        if out.len() >= MAX_NAME_LEN {
            break;
        }
    }

    // 全部是 `_` 的名字等同于没有名字；全 `.` 的名字会变成路径段 `.`/`..`
    if out.is_empty() || out.chars().all(|c| c == '_') || out.chars().all(|c| c == '.') {
        return Err(StorageError::InvalidName);
    }

    Ok(out)
}

/// 目录部分：`/{root}/{document_type}/{year}`，各段分别清洗，结果可复现
pub fn build_folder_path(
    root: &str,
    document_type: &str,
    year: i32,
) -> Result<String, StorageError> {
    let root = sanitize_name(root)?;
    let document_type = sanitize_name(document_type)?;
    Ok(format!("/{root}/{document_type}/{year}"))
}

/// 完整资源路径：目录部分 + 时间戳前缀的清洗文件名
pub fn build_path(
    root: &str,
    document_type: &str,
    year: i32,
    original_file_name: &str,
) -> Result<String, StorageError> {
    let folder = build_folder_path(root, document_type, year)?;
    let file_name = unique_file_name(original_file_name)?;
    Ok(format!("{folder}/{file_name}"))
}

/// 给清洗后的文件名加上可排序的时间戳前缀（ISO-8601，冒号换成连字符）
pub fn unique_file_name(
    original_file_name: &str,
) -> Result<String, StorageError> {
    let sanitized = sanitize_name(original_file_name)?;
    let token = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3fZ");
    Ok(format!("{token}_{sanitized}"))
}
