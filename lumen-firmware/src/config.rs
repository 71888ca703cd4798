//! Compile-time board configuration
//!
//! `board.toml` is validated by the build script and turned into the
//! `BOARD` constant below. Edit board.toml and rebuild to customize.

use lumen_core::config::{BoardConfig, FadeConfig};

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
