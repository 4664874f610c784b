#![allow(dead_code)]

pub use flowdeploy_test_utils::{init_tracing, with_timeout};

pub const WORKDIR: &str = "/srv/app";
