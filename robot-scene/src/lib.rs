//! Interactive point-cloud robot scene with hotspots linked to an article's
//! table of contents.

pub mod document;
pub mod engine;
pub mod rpc;
pub mod tools;

pub use engine::core::app_setup::{ScenePlugin, create_app};
pub use engine::core::config::SceneConfig;
