use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// 对应 WebDAV 响应 XML 顶层的 `<D:multistatus>` 节点
#[derive(Debug, Deserialize, Clone)]
pub struct MultiStatus {
    /// `<D:response>` 节点列表，每个 response 表示一个资源（文件或目录）
    #[serde(rename = "response", default)]
    pub responses: Vec<Response>,
}

/// 对应单个 `<D:response>` 节点
///
/// href 允许缺失：个别服务器会吐出残缺条目，上层按"跳过"而不是"整单失败"处理
#[derive(Debug, Deserialize, Clone)]
pub struct Response {
    /// `<D:href>`：资源路径（URL 编码，需要解码才能显示原始文件名）
    #[serde(default)]
    pub href: Option<String>,
    /// `<D:propstat>`：资源属性集和对应状态码的列表
    #[serde(rename = "propstat", default)]
    pub propstats: Vec<PropStat>,
}

/// 对应 `<D:propstat>` 节点：一个属性集 + 对应的 HTTP 状态
#[derive(Debug, Deserialize, Clone)]
pub struct PropStat {
    /// `<D:prop>`：资源的具体属性
    pub prop: Prop,
    /// `<D:status>`：该属性集对应的 HTTP 状态，如 "HTTP/1.1 200 OK"
    pub status: String,
}

/// 对应 `<D:prop>` 节点
///
/// 只建模 PROPFIND 请求体里点名的五个属性，其余一概忽略
#[derive(Debug, Deserialize, Clone)]
pub struct Prop {
    /// `<resourcetype>`：资源类型（文件/目录）
    #[serde(rename = "resourcetype")]
    pub resource_type: Option<ResourceType>,

    /// `<getcontentlength>`：文件大小（字节），目录一般没有此字段
    ///
    /// 目录条目的 404 propstat 里会出现空的 `<getcontentlength/>`，必须容忍
    #[serde(
        rename = "getcontentlength",
        deserialize_with = "de_opt_u64",
        default
    )]
    pub content_length: Option<u64>,

    /// `<getlastmodified>`：最后修改时间（HTTP-date 格式）
    #[serde(
        rename = "getlastmodified",
        deserialize_with = "de_http_date",
        default
    )]
    pub last_modified: Option<DateTime<FixedOffset>>,

    /// `<getcontenttype>`：MIME 类型（如 "text/plain" 或 "application/pdf"）
    #[serde(rename = "getcontenttype")]
    pub content_type: Option<String>,

    /// `<displayname>`：显示名（用户友好的文件/目录名）
    #[serde(rename = "displayname")]
    pub display_name: Option<String>,
}

/// 将 HTTP-date 格式的时间解析为 `DateTime<FixedOffset>`
///
/// 个别服务器会给出非法时间串，这里按 None 吞掉而不是让整个列表失败
fn de_http_date<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| DateTime::parse_from_rfc2822(&s).ok()))
}

/// 宽松解析字节数：空元素或非数字一律当作 None
fn de_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.trim().parse::<u64>().ok()))
}

/// `<resourcetype>` 节点
#[derive(Debug, Deserialize, Clone)]
pub struct ResourceType {
    /// `<collection/>` 存在表示是目录，否则是文件
    #[serde(rename = "collection")]
    pub is_collection: Option<EmptyElement>,
}

/// 空元素的占位结构，例如 `<collection/>`
#[derive(Debug, Deserialize, Clone)]
pub struct EmptyElement {}
