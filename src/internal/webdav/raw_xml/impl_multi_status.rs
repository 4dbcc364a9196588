use crate::internal::resource::resource_descriptor::ResourceDescriptor;
use crate::internal::webdav::raw_xml::raw_file::{
    MultiStatus, Prop, PropStat, Response,
};

/// 把解析好的 multistatus 转成资源描述列表
pub trait ToResourceDescriptors {
    /// - `dav_root_path`：href 里用户命名空间的前缀（dav 根地址的路径部分，
    ///   基准 URL 有子路径时一并包含），会被剥掉，尾斜杠有无皆可
    /// - `requested_path`：本次 PROPFIND 请求的目录本身，对应条目会被跳过
    fn to_resource_descriptors(
        self,
        dav_root_path: &str,
        requested_path: &str,
    ) -> Vec<ResourceDescriptor>;
}

fn take_ok_propstat(propstats: Vec<PropStat>) -> Option<PropStat> {
    // 从 propstats 中拿到第一个 HTTP 状态是 2xx 的 PropStat（直接 move 出来）
    propstats.into_iter().find(|ps| {
        ps.status
            .split_whitespace()
            .find_map(|t| t.parse::<u16>().ok())
            .map(|code| (200..=299).contains(&code))
            .unwrap_or(false)
    })
}

fn decode_name(display_name: Option<String>, path: &str) -> String {
    // 服务端给了 display_name 就直接用，否则取路径末段
    display_name.filter(|n| !n.is_empty()).unwrap_or_else(|| {
        path.trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
            .to_string()
    })
}

/// 去掉尾部斜杠、补上头部斜杠，便于比较和展示
fn normalize_path(p: &str) -> String {
    let trimmed = p.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// 把 href 解码并剥掉 dav 命名空间前缀，得到用户视角的规范化路径
fn href_to_path(href: &str, dav_root_path: &str) -> String {
    let decoded = percent_encoding::percent_decode_str(href)
        .decode_utf8_lossy()
        .to_string();

    let stripped = decoded
        .strip_prefix(dav_root_path)
        .unwrap_or(decoded.as_str());

    normalize_path(stripped)
}

impl ToResourceDescriptors for MultiStatus {
    fn to_resource_descriptors(
        self,
        dav_root_path: &str,
        requested_path: &str,
    ) -> Vec<ResourceDescriptor> {
        let requested = normalize_path(requested_path);
        let mut resources = Vec::new();

        for Response { href, propstats } in self.responses {
            let ok_ps = match take_ok_propstat(propstats) {
                Some(ps) => ps,
                None => continue, // 没有 2xx 状态就跳过
            };

            let PropStat { prop, .. } = ok_ps;

            let Prop {
                resource_type,
                content_length: size,
                last_modified,
                content_type,
                display_name,
            } = prop;

            // href 和 displayname 都缺的条目是残缺数据，跳过而不是整单失败；
            // 只缺 href 时退化为用 displayname 当路径
            let path = match href.filter(|h| !h.is_empty()) {
                Some(href) => href_to_path(&href, dav_root_path),
                None => match display_name
                    .as_deref()
                    .filter(|n| !n.is_empty())
                {
                    Some(name) => normalize_path(name),
                    None => continue,
                },
            };

            // 第一条通常是被列的目录本身，按路径匹配剔除（比"丢掉第一条"更稳）
            if path == requested {
                continue;
            }

            let is_dir = resource_type
                .as_ref()
                .and_then(|rt| rt.is_collection.as_ref())
                .is_some();

            let name = decode_name(display_name, &path);

            resources.push(ResourceDescriptor {
                name,
                path,
                size,
                last_modified,
                content_type,
                is_dir,
            });
        }

        resources
    }
}
