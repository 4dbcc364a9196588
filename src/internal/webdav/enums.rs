use reqwest::Method;

use crate::internal::webdav::error::StorageError;

/// 本库会用到的全部 HTTP / WebDAV 动词
pub enum WebDavMethod {
    GET,
    PUT,
    MKCOL,
    PROPFIND,
}

impl WebDavMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebDavMethod::GET => "GET",
            WebDavMethod::PUT => "PUT",
            WebDavMethod::MKCOL => "MKCOL",
            WebDavMethod::PROPFIND => "PROPFIND",
        }
    }

    pub fn to_head_method(&self) -> Result<Method, StorageError> {
        match self {
            WebDavMethod::GET => Ok(Method::GET),
            WebDavMethod::PUT => Ok(Method::PUT),
            // WebDAV 扩展动词需要手动构造
            _ => Method::from_bytes(self.as_str().as_bytes())
                .map_err(|e| StorageError::Configuration(e.to_string())),
        }
    }
}

pub enum Depth {
    /// 仅返回当前资源
    Zero,
    /// 返回当前资源及直接子资源
    One,
    /// 返回当前资源及所有子资源（谨慎使用）
    Infinity,
}

impl Depth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Depth::Zero => "0",
            Depth::One => "1",
            Depth::Infinity => "infinity",
        }
    }
}
