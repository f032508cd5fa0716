//! 弹窗/对话框状态

/// 删除目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// 删除单条评论
    One { id: i64, author: String },
    /// 清空整个评论区
    All,
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 昵称输入
    Nickname {
        /// 输入内容
        input: String,
    },
    /// 发表评论
    AddComment {
        /// 署名
        name: String,
        /// 正文
        body: String,
        /// 当前焦点：0=署名, 1=正文
        focus: usize,
    },
    /// 确认删除
    ConfirmDelete {
        /// 删除目标
        target: DeleteTarget,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 帮助信息
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示昵称输入弹窗
    pub fn show_nickname(&mut self) {
        self.active = Some(Modal::Nickname {
            input: String::new(),
        });
    }

    /// 显示发表评论弹窗，署名预填会话昵称
    pub fn show_add_comment(&mut self, default_name: &str) {
        self.active = Some(Modal::AddComment {
            name: default_name.to_string(),
            body: String::new(),
            focus: 1,
        });
    }

    /// 显示删除单条评论的确认弹窗
    pub fn show_confirm_delete(&mut self, id: i64, author: &str) {
        self.active = Some(Modal::ConfirmDelete {
            target: DeleteTarget::One {
                id,
                author: author.to_string(),
            },
            focus: 0,
        });
    }

    /// 显示清空评论区的确认弹窗
    pub fn show_confirm_delete_all(&mut self) {
        self.active = Some(Modal::ConfirmDelete {
            target: DeleteTarget::All,
            focus: 0,
        });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
