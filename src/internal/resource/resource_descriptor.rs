use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// 列目录结果的单条资源描述：远端某一瞬间状态的只读投影，本库不做任何缓存
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    /// 友好化的文件或目录名
    pub name: String,
    /// 用户命名空间内的规范化路径（已解码）
    pub path: String,
    /// 文件大小（字节），目录没有
    pub size: Option<u64>,
    /// 最后修改时间
    pub last_modified: Option<DateTime<FixedOffset>>,
    /// MIME 类型
    pub content_type: Option<String>,
    /// 是否目录
    pub is_dir: bool,
}
