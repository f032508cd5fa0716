//! 会话状态

use folio_core::types::Session;

/// 会话状态
///
/// 会话在启动时拉取一次，之后只在保存昵称后更新。
#[derive(Debug, Default)]
pub struct SessionState {
    /// 当前会话，启动拉取完成前为 None
    pub session: Option<Session>,
    /// 是否已经自动弹过一次昵称输入框
    pub nickname_prompted: bool,
}

impl SessionState {
    /// 创建会话状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入会话
    pub fn set(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// 是否已登录
    pub fn logged_in(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.logged_in)
    }

    /// 当前昵称
    pub fn nickname(&self) -> &str {
        self.session.as_ref().map_or("", |s| s.nickname.as_str())
    }

    /// 登录链接
    pub fn login_url(&self) -> &str {
        self.session.as_ref().map_or("", |s| s.login_url.as_str())
    }

    /// 是否可以发表/删除评论（已登录且有昵称）
    pub fn can_comment(&self) -> bool {
        self.logged_in() && !self.nickname().trim().is_empty()
    }

    /// 是否应该自动弹昵称输入框（只弹一次）
    pub fn should_prompt_nickname(&self) -> bool {
        !self.nickname_prompted
            && self
                .session
                .as_ref()
                .is_some_and(Session::needs_nickname)
    }

    /// 标记昵称输入框已弹出
    pub fn mark_prompted(&mut self) {
        self.nickname_prompted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(logged_in: bool, nickname: &str) -> Session {
        Session {
            logged_in,
            nickname: nickname.to_string(),
            ..Session::default()
        }
    }

    #[test]
    fn prompt_fires_once_for_missing_nickname() {
        let mut state = SessionState::new();
        state.set(session(true, ""));
        assert!(state.should_prompt_nickname());

        state.mark_prompted();
        assert!(!state.should_prompt_nickname());
    }

    #[test]
    fn no_prompt_when_logged_out_or_named() {
        let mut state = SessionState::new();
        assert!(!state.should_prompt_nickname());

        state.set(session(false, ""));
        assert!(!state.should_prompt_nickname());

        state.set(session(true, "esap"));
        assert!(!state.should_prompt_nickname());
        assert!(state.can_comment());
    }
}
