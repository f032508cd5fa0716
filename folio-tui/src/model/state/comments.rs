//! 评论页面状态

use folio_core::types::{Comment, CommentQuery};

/// 评论页面状态
///
/// 列表刷新用令牌串联：每次发起刷新时令牌自增，响应回来时
/// 只接受携带当前令牌的那一份，过期响应直接丢弃。
#[derive(Debug, Default)]
pub struct CommentsState {
    /// 评论列表
    pub comments: Vec<Comment>,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 是否已成功加载过一次
    pub loaded_once: bool,
    /// 列表查询参数
    pub query: CommentQuery,
    /// 当前刷新令牌
    token: u64,
}

impl CommentsState {
    /// 创建评论状态
    pub fn new(query: CommentQuery) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.comments.is_empty() && self.selected < self.comments.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.comments.is_empty() {
            self.selected = self.comments.len() - 1;
        }
    }

    /// 获取当前选中的评论
    pub fn selected_comment(&self) -> Option<&Comment> {
        self.comments.get(self.selected)
    }

    /// 发起一次刷新，返回本次刷新的令牌
    pub fn begin_refresh(&mut self) -> u64 {
        self.token += 1;
        self.loading = true;
        self.token
    }

    /// 应用一份刷新结果，整表替换
    ///
    /// 过期令牌直接丢弃并返回 `false`。选中项保留索引位置，
    /// 新列表变短时收拢到最后一项。
    pub fn apply(&mut self, token: u64, comments: Vec<Comment>) -> bool {
        if token != self.token {
            return false;
        }
        self.comments = comments;
        if self.selected >= self.comments.len() {
            self.selected = self.comments.len().saturating_sub(1);
        }
        self.loading = false;
        self.loaded_once = true;
        true
    }

    /// 记录一次刷新失败，列表保持原样
    ///
    /// 过期令牌的失败同样丢弃并返回 `false`。
    pub fn fail(&mut self, token: u64) -> bool {
        if token != self.token {
            return false;
        }
        self.loading = false;
        true
    }
}
