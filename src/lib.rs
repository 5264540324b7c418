//! 재료 물성 데이터 모델과 비교 파이프라인을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod builtin;
pub mod catalogue;
pub mod comparison;
pub mod config;
pub mod export;
pub mod material;
pub mod property;
pub mod schema;
pub mod ui_cli;
