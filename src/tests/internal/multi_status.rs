use quick_xml::de::from_str;

use crate::internal::webdav::raw_xml::impl_multi_status::ToResourceDescriptors;
use crate::internal::webdav::raw_xml::raw_file::MultiStatus;

const DAV_ROOT: &str = "/remote.php/dav/files/alice";

/// 真实 Nextcloud 风格的列目录响应：目录自身 + 两个文件 + 一个子目录 + 一条残缺条目
const LISTING_XML: &str = r#"<?xml version="1.0"?>
<d:multistatus xmlns:d="DAV:" xmlns:s="http://sabredav.org/ns" xmlns:oc="http://owncloud.org/ns">
  <d:response>
    <d:href>/remote.php/dav/files/alice/Documents/receipt/2024/</d:href>
    <d:propstat>
      <d:prop>
        <d:displayname>2024</d:displayname>
        <d:getlastmodified>Tue, 06 Feb 2024 10:00:00 GMT</d:getlastmodified>
        <d:resourcetype><d:collection/></d:resourcetype>
      </d:prop>
      <d:status>HTTP/1.1 200 OK</d:status>
    </d:propstat>
    <d:propstat>
      <d:prop>
        <d:getcontentlength/>
        <d:getcontenttype/>
      </d:prop>
      <d:status>HTTP/1.1 404 Not Found</d:status>
    </d:propstat>
  </d:response>
  <d:response>
    <d:href>/remote.php/dav/files/alice/Documents/receipt/2024/2024-02-06T09-59-59.000Z_invoice.pdf</d:href>
    <d:propstat>
      <d:prop>
        <d:displayname>2024-02-06T09-59-59.000Z_invoice.pdf</d:displayname>
        <d:getcontentlength>10</d:getcontentlength>
        <d:getlastmodified>Tue, 06 Feb 2024 09:59:59 GMT</d:getlastmodified>
        <d:getcontenttype>application/pdf</d:getcontenttype>
        <d:resourcetype/>
      </d:prop>
      <d:status>HTTP/1.1 200 OK</d:status>
    </d:propstat>
  </d:response>
  <d:response>
    <d:href>/remote.php/dav/files/alice/Documents/receipt/2024/q4%20report.xlsx</d:href>
    <d:propstat>
      <d:prop>
        <d:getcontentlength>2048</d:getcontentlength>
        <d:getcontenttype>application/vnd.ms-excel</d:getcontenttype>
        <d:resourcetype/>
      </d:prop>
      <d:status>HTTP/1.1 200 OK</d:status>
    </d:propstat>
  </d:response>
  <d:response>
    <d:href>/remote.php/dav/files/alice/Documents/receipt/2024/archive/</d:href>
    <d:propstat>
      <d:prop>
        <d:displayname>archive</d:displayname>
        <d:resourcetype><d:collection/></d:resourcetype>
      </d:prop>
      <d:status>HTTP/1.1 200 OK</d:status>
    </d:propstat>
  </d:response>
  <d:response>
    <d:propstat>
      <d:prop/>
      <d:status>HTTP/1.1 200 OK</d:status>
    </d:propstat>
  </d:response>
</d:multistatus>"#;

#[test]
fn listing_parses_and_skips_self_entry() {
    let ms: MultiStatus = from_str(LISTING_XML).unwrap();
    let items =
        ms.to_resource_descriptors(DAV_ROOT, "/Documents/receipt/2024");

    // 目录自身和残缺条目被剔除，剩两文件一子目录
    assert_eq!(items.len(), 3);
    assert_eq!(items.iter().filter(|d| d.is_dir).count(), 1);

    let invoice = items
        .iter()
        .find(|d| d.name.ends_with("_invoice.pdf"))
        .expect("找不到 invoice 条目");
    assert_eq!(invoice.size, Some(10));
    assert_eq!(invoice.content_type.as_deref(), Some("application/pdf"));
    assert!(!invoice.is_dir);
    assert_eq!(
        invoice.path,
        "/Documents/receipt/2024/2024-02-06T09-59-59.000Z_invoice.pdf"
    );
    assert!(invoice.last_modified.is_some());
}

#[test]
fn name_falls_back_to_decoded_href_tail() {
    let ms: MultiStatus = from_str(LISTING_XML).unwrap();
    let items =
        ms.to_resource_descriptors(DAV_ROOT, "/Documents/receipt/2024");

    // 第二个文件没有 displayname，名字从 href 末段解码而来
    let report = items
        .iter()
        .find(|d| d.name == "q4 report.xlsx")
        .expect("百分号编码的名字没有解码");
    assert_eq!(report.size, Some(2048));
}

#[test]
fn folder_entry_has_no_size() {
    let ms: MultiStatus = from_str(LISTING_XML).unwrap();
    let items =
        ms.to_resource_descriptors(DAV_ROOT, "/Documents/receipt/2024");

    let archive = items.iter().find(|d| d.is_dir).unwrap();
    assert_eq!(archive.name, "archive");
    assert_eq!(archive.size, None);
}

#[test]
fn subpath_install_prefix_is_stripped() {
    // 服务器装在子路径下时，href 会带上该子路径；
    // 前缀来自 dav 根地址的路径部分（尾带斜杠），自身条目仍按路径剔除
    let xml = r#"<?xml version="1.0"?>
<d:multistatus xmlns:d="DAV:">
  <d:response>
    <d:href>/nextcloud/remote.php/dav/files/alice/Documents/receipt/2024/</d:href>
    <d:propstat>
      <d:prop>
        <d:displayname>2024</d:displayname>
        <d:resourcetype><d:collection/></d:resourcetype>
      </d:prop>
      <d:status>HTTP/1.1 200 OK</d:status>
    </d:propstat>
  </d:response>
  <d:response>
    <d:href>/nextcloud/remote.php/dav/files/alice/Documents/receipt/2024/invoice.pdf</d:href>
    <d:propstat>
      <d:prop>
        <d:displayname>invoice.pdf</d:displayname>
        <d:getcontentlength>10</d:getcontentlength>
        <d:resourcetype/>
      </d:prop>
      <d:status>HTTP/1.1 200 OK</d:status>
    </d:propstat>
  </d:response>
</d:multistatus>"#;
    let ms: MultiStatus = from_str(xml).unwrap();
    let items = ms.to_resource_descriptors(
        "/nextcloud/remote.php/dav/files/alice/",
        "/Documents/receipt/2024",
    );

    assert_eq!(items.len(), 1, "目录自身没有被剔除: {items:?}");
    assert_eq!(items[0].path, "/Documents/receipt/2024/invoice.pdf");
}

#[test]
fn empty_multistatus_yields_empty_list() {
    let xml = r#"<?xml version="1.0"?>
<d:multistatus xmlns:d="DAV:"></d:multistatus>"#;
    let ms: MultiStatus = from_str(xml).unwrap();
    let items = ms.to_resource_descriptors(DAV_ROOT, "/Documents");
    assert!(items.is_empty());
}

#[test]
fn garbage_body_is_a_parse_error() {
    let res = from_str::<MultiStatus>("<html>Bad Gateway</html");
    assert!(res.is_err());
}

#[test]
fn entry_without_ok_propstat_is_skipped() {
    let xml = r#"<?xml version="1.0"?>
<d:multistatus xmlns:d="DAV:">
  <d:response>
    <d:href>/remote.php/dav/files/alice/Documents/ghost.txt</d:href>
    <d:propstat>
      <d:prop><d:getcontentlength/></d:prop>
      <d:status>HTTP/1.1 404 Not Found</d:status>
    </d:propstat>
  </d:response>
</d:multistatus>"#;
    let ms: MultiStatus = from_str(xml).unwrap();
    let items = ms.to_resource_descriptors(DAV_ROOT, "/Documents");
    assert!(items.is_empty());
}
