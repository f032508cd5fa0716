//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod comments;
mod home;
mod map;
mod modal;
mod projects;
mod session;

pub use comments::CommentsState;
pub use home::HomeState;
pub use map::MapState;
pub use modal::{DeleteTarget, Modal, ModalState};
pub use projects::{Project, ProjectsState};
pub use session::SessionState;
