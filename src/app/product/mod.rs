//! 产品管理：列表缓存与 CRUD 转发

pub mod cache;
pub mod handler;
pub mod model;
pub mod service;
