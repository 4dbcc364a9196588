//! 目录枚举：PROPFIND Depth 1 + multistatus 解析。

use quick_xml::de::from_str;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::internal::resource::resource_descriptor::ResourceDescriptor;
use crate::internal::webdav::client::DavClient;
use crate::internal::webdav::enums::{Depth, WebDavMethod};
use crate::internal::webdav::error::StorageError;
use crate::internal::webdav::raw_xml::impl_multi_status::ToResourceDescriptors;
use crate::internal::webdav::raw_xml::raw_file::MultiStatus;

/// 固定属性集的 PROPFIND 请求体：只要列表展示需要的五个属性
const PROPFIND_BODY: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<D:propfind xmlns:D="DAV:">
  <D:prop>
    <D:displayname/>
    <D:getcontentlength/>
    <D:getlastmodified/>
    <D:getcontenttype/>
    <D:resourcetype/>
  </D:prop>
</D:propfind>"#;

/// 列出目录直接子资源
///
/// 整体非 2xx/207 返回 `Remote`；响应体不是合法 XML 返回 `Parse`；
/// 合法但空的 multistatus 得到空列表，残缺条目逐条跳过
pub async fn list_folder(
    client: &DavClient,
    folder_path: &str,
) -> Result<Vec<ResourceDescriptor>, StorageError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/xml"));
    headers.insert("Depth", HeaderValue::from_static(Depth::One.as_str()));
    headers.insert("Accept", HeaderValue::from_static("application/xml"));

    // 保证以斜杠结尾，部分服务器对目录地址敏感
    let request_path = if folder_path.ends_with('/') {
        folder_path.to_string()
    } else {
        format!("{folder_path}/")
    };

    let res = client
        .request(
            WebDavMethod::PROPFIND,
            &request_path,
            Some(headers),
            Some(PROPFIND_BODY.into()),
        )
        .await?;

    if !res.status.is_success() && res.status.as_u16() != 207 {
        return Err(StorageError::Remote {
            status: res.status.as_u16(),
            body: res.body_text(),
        });
    }

    let xml_text = res.body_text();
    let multi_status: MultiStatus =
        from_str(&xml_text).map_err(|e| StorageError::Parse(e.to_string()))?;

    // href 前缀取自实际的 dav 根地址：基准 URL 装在子路径下时
    // （如 https://host/nextcloud/）href 会带上该子路径，拼用户名是剥不掉的
    let dav_root_path =
        percent_encoding::percent_decode_str(client.dav_root_path())
            .decode_utf8_lossy()
            .to_string();

    Ok(multi_status.to_resource_descriptors(&dav_root_path, folder_path))
}
