// tests/common/mod.rs
//! 共通テストユーティリティ

#![allow(dead_code)]

pub mod fixtures;
pub mod matchers;
pub mod temp;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use matchers::*;
#[allow(unused_imports)]
pub use temp::TempDir;
