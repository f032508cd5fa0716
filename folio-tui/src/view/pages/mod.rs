//! 页面内容渲染

pub mod comments;
pub mod home;
pub mod map;
pub mod projects;
