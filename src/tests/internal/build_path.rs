use crate::internal::path::build_path::{
    build_folder_path, build_path, sanitize_name, unique_file_name,
};
use crate::internal::webdav::error::StorageError;

fn is_safe(name: &str) -> bool {
    name.chars()
        .all(|c| matches!(c, 'A'..='Z' | 'a'..='z' | '0'..='9' | '.' | '_' | '-'))
}

#[test]
fn sanitize_replaces_illegal_chars() {
    let cases = [
        "发票 2024.pdf",
        "a b?c.pdf",
        "with/slash\\and:colon.txt",
        "quote\"and<angle>.doc",
    ];
    for raw in cases {
        let name = sanitize_name(raw).unwrap();
        assert!(is_safe(&name), "仍有非法字符: {name}");
        assert!(!name.is_empty());
    }
}

#[test]
fn sanitize_collapses_replacement_runs() {
    assert_eq!(sanitize_name("a!!!b").unwrap(), "a_b");
    assert_eq!(sanitize_name("a   b.txt").unwrap(), "a_b.txt");
}

#[test]
fn sanitize_keeps_legal_name_unchanged() {
    assert_eq!(sanitize_name("invoice-2024_v2.pdf").unwrap(), "invoice-2024_v2.pdf");
}

#[test]
fn sanitize_truncates_overlong_name() {
    let raw = "a".repeat(300);
    let name = sanitize_name(&raw).unwrap();
    assert_eq!(name.len(), 255);
}

#[test]
fn sanitize_rejects_empty_result() {
    for raw in ["", "???", "！！！", "   "] {
        match sanitize_name(raw) {
            Err(StorageError::InvalidName) => {}
            other => panic!("应返回 InvalidName，实际: {other:?}"),
        }
    }
}

#[test]
fn sanitize_rejects_dot_only_names() {
    for raw in [".", "..", "..."] {
        match sanitize_name(raw) {
            Err(StorageError::InvalidName) => {}
            other => panic!("应返回 InvalidName，实际: {other:?}"),
        }
    }
    // 点和其它合法字符混合时照常保留
    assert_eq!(sanitize_name("a..b").unwrap(), "a..b");
}

#[test]
fn folder_path_rejects_dot_only_segments() {
    for document_type in [".", ".."] {
        match build_folder_path("Documents", document_type, 2024) {
            Err(StorageError::InvalidName) => {}
            other => panic!("应返回 InvalidName，实际: {other:?}"),
        }
    }
    match build_folder_path("..", "receipt", 2024) {
        Err(StorageError::InvalidName) => {}
        other => panic!("应返回 InvalidName，实际: {other:?}"),
    }
}

#[test]
fn folder_path_is_deterministic() {
    let a = build_folder_path("Documents", "receipt", 2024).unwrap();
    let b = build_folder_path("Documents", "receipt", 2024).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, "/Documents/receipt/2024");
}

#[test]
fn folder_path_sanitizes_document_type() {
    let p = build_folder_path("Documents", "re ceipt", 2024).unwrap();
    assert_eq!(p, "/Documents/re_ceipt/2024");
}

#[test]
fn full_path_matches_scheme() {
    let p = build_path("Documents", "receipt", 2024, "invoice.pdf").unwrap();
    assert!(p.starts_with("/Documents/receipt/2024/"), "路径: {p}");
    assert!(p.ends_with("_invoice.pdf"), "路径: {p}");

    let file_name = p.rsplit('/').next().unwrap();
    assert!(is_safe(file_name), "文件名仍有非法字符: {file_name}");
}

#[test]
fn unique_name_keeps_sanitized_suffix() {
    let name = unique_file_name("年度 报告.pdf").unwrap();
    assert!(name.ends_with(".pdf"), "后缀丢失: {name}");
    // 时间戳前缀里没有冒号
    assert!(!name.contains(':'), "时间戳没有替换冒号: {name}");
    assert!(is_safe(&name), "文件名仍有非法字符: {name}");
}
