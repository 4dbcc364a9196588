/// 内部实现模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口函数
pub use internal::entrance::remote::*;

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::webdav_auth::WebdavAuth;
}

pub mod errors {
    use crate::internal;
    pub use internal::webdav::error::StorageError;
}

/// 对外提供 webdav 基础访问能力，不限制死在入口函数中，以防有人自己要用
pub mod webdav {
    pub mod client {
        use crate::internal;
        pub use internal::webdav::client::{DavClient, DavResponse};
    }

    pub mod enums {
        use crate::internal;
        pub use internal::webdav::enums::*;
    }

    pub mod traits {
        pub use crate::internal::webdav::raw_xml::impl_multi_status::ToResourceDescriptors;
    }

    pub mod structs {
        pub use crate::internal::webdav::raw_xml::raw_file::*;
    }
}

pub mod path {
    use crate::internal;
    pub use internal::path::build_path::*;
}

pub mod resource {
    use crate::internal;
    pub use internal::resource::resource_descriptor::ResourceDescriptor;
}

pub mod transfer {
    use crate::internal;
    pub use internal::transfer::download::DownloadedFile;
}

pub mod share {
    use crate::internal;
    pub use internal::share::ocs::ShareRecord;
}

pub mod orchestrator {
    use crate::internal;
    pub use internal::orchestrator::structs::{
        DocumentSnapshot, UploadRequest, UploadResult,
    };
}
