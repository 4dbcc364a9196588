use crate::internal::share::ocs::parse_share_url;

/// Nextcloud 默认的 OCS XML 响应
const OCS_XML: &str = r#"<?xml version="1.0"?>
<ocs>
  <meta>
    <status>ok</status>
    <statuscode>200</statuscode>
    <message>OK</message>
  </meta>
  <data>
    <id>42</id>
    <share_type>3</share_type>
    <permissions>1</permissions>
    <token>xKpR3sT9wQzLmN7</token>
    <url>https://cloud.example.com/s/xKpR3sT9wQzLmN7</url>
  </data>
</ocs>"#;

/// 某些网关会把 OCS 响应改写成 JSON
const OCS_JSON: &str = r#"{
  "ocs": {
    "meta": {"status": "ok", "statuscode": 200, "message": "OK"},
    "data": {
      "id": 42,
      "share_type": 3,
      "permissions": 1,
      "url": "https://cloud.example.com/s/xKpR3sT9wQzLmN7"
    }
  }
}"#;

#[test]
fn xml_response_yields_url() {
    assert_eq!(
        parse_share_url(OCS_XML).as_deref(),
        Some("https://cloud.example.com/s/xKpR3sT9wQzLmN7")
    );
}

#[test]
fn json_response_yields_url() {
    assert_eq!(
        parse_share_url(OCS_JSON).as_deref(),
        Some("https://cloud.example.com/s/xKpR3sT9wQzLmN7")
    );
}

#[test]
fn missing_url_yields_none() {
    let xml = r#"<?xml version="1.0"?>
<ocs>
  <meta><status>failure</status><statuscode>404</statuscode></meta>
  <data/>
</ocs>"#;
    assert_eq!(parse_share_url(xml), None);
}

#[test]
fn garbage_body_yields_none() {
    assert_eq!(parse_share_url("Bad Gateway"), None);
    assert_eq!(parse_share_url("{not json"), None);
    assert_eq!(parse_share_url(""), None);
}
