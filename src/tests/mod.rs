//! 测试模块入口：公共逻辑在 `lib` 子模块，离线/联机测试在 `internal`。

#[cfg(test)]
pub use lib::*;
