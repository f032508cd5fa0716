//! 后台结果消息处理
//!
//! 网络请求的回执在这里落回 Model。所有失败都走同一条路：
//! 弹一个错误框，已有数据保持原样。

use folio_core::CoreError;

use crate::message::{BackendMessage, Command};
use crate::model::state::Modal;
use crate::model::App;

/// 处理后台结果消息
pub fn update(app: &mut App, msg: BackendMessage) -> Option<Command> {
    match msg {
        BackendMessage::SessionLoaded(Ok(session)) => {
            app.session.set(session);

            if app.session.should_prompt_nickname() {
                app.session.mark_prompted();
                app.modal.show_nickname();
            }

            // 登录后预拉一次评论列表
            if app.session.logged_in() {
                return Some(super::refresh_comments(app));
            }
            None
        }

        BackendMessage::SessionLoaded(Err(e)) => {
            show_core_error(app, "Session", &e);
            None
        }

        BackendMessage::NicknameSaved(Ok(session)) => {
            app.session.set(session);
            if matches!(app.modal.active, Some(Modal::Nickname { .. })) {
                app.modal.close();
            }
            app.set_status("Nickname saved");

            if app.session.logged_in() && !app.comments.loaded_once && !app.comments.loading {
                return Some(super::refresh_comments(app));
            }
            None
        }

        BackendMessage::NicknameSaved(Err(e)) => {
            show_core_error(app, "Nickname", &e);
            None
        }

        BackendMessage::CommentsLoaded { token, result } => {
            match result {
                Ok(comments) => {
                    if app.comments.apply(token, comments) {
                        app.clear_status();
                    } else {
                        log::debug!("丢弃过期的评论列表响应 (token {token})");
                    }
                }
                Err(e) => {
                    // 过期请求的失败不打扰用户
                    if app.comments.fail(token) {
                        show_core_error(app, "Comments", &e);
                    }
                }
            }
            None
        }

        BackendMessage::CommentAdded(Ok(())) => {
            app.set_status("Comment posted");
            Some(super::refresh_comments(app))
        }

        BackendMessage::CommentAdded(Err(e)) => {
            show_core_error(app, "Post comment", &e);
            None
        }

        BackendMessage::CommentDeleted(Ok(())) => {
            // 删除成功后重新拉取，列表永远以服务端为准
            app.set_status("Comment deleted");
            Some(super::refresh_comments(app))
        }

        BackendMessage::CommentDeleted(Err(e)) => {
            show_core_error(app, "Delete comment", &e);
            None
        }

        BackendMessage::MapStyleLoaded(Ok(style)) => {
            app.map.set_style(style);
            None
        }

        BackendMessage::MapStyleLoaded(Err(e)) => {
            app.map.loading = false;
            show_core_error(app, "Map style", &e);
            None
        }
    }
}

/// 统一的错误出口：按错误类型分级记日志，再弹错误框
fn show_core_error(app: &mut App, title: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{title}: {err}");
    } else {
        log::error!("{title}: {err}");
    }
    app.modal.show_error(title, &err.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;
    use folio_core::types::{Comment, CommentQuery, MapStyle, Session};

    fn comment(id: i64) -> Comment {
        Comment {
            id,
            name: "ana".to_string(),
            comment: "hola".to_string(),
            timestamp: 0,
        }
    }

    fn logged_in_app() -> App {
        let mut app = App::new(Page::Comments, CommentQuery::default());
        let _ = update(
            &mut app,
            BackendMessage::SessionLoaded(Ok(Session {
                logged_in: true,
                nickname: "esap".to_string(),
                ..Session::default()
            })),
        );
        app
    }

    #[test]
    fn login_triggers_the_initial_comment_load() {
        let mut app = App::new(Page::Comments, CommentQuery::default());
        let cmd = update(
            &mut app,
            BackendMessage::SessionLoaded(Ok(Session {
                logged_in: true,
                nickname: "esap".to_string(),
                ..Session::default()
            })),
        );
        assert!(matches!(cmd, Some(Command::LoadComments { .. })));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn missing_nickname_is_prompted_exactly_once() {
        let mut app = App::new(Page::Comments, CommentQuery::default());
        let _ = update(
            &mut app,
            BackendMessage::SessionLoaded(Ok(Session {
                logged_in: true,
                ..Session::default()
            })),
        );
        assert!(matches!(app.modal.active, Some(Modal::Nickname { .. })));
        assert!(!app.session.should_prompt_nickname());
    }

    #[test]
    fn successful_delete_is_followed_by_a_refresh() {
        let mut app = logged_in_app();
        let cmd = update(&mut app, BackendMessage::CommentDeleted(Ok(())));
        assert!(matches!(cmd, Some(Command::LoadComments { .. })));
    }

    #[test]
    fn failed_delete_keeps_the_list_and_reports_once() {
        let mut app = logged_in_app();
        let token = app.comments.begin_refresh();
        app.comments.apply(token, vec![comment(1), comment(2)]);

        let cmd = update(
            &mut app,
            BackendMessage::CommentDeleted(Err(CoreError::HttpStatus { status: 500 })),
        );
        assert!(cmd.is_none());
        assert_eq!(app.comments.comments.len(), 2);
        assert!(matches!(app.modal.active, Some(Modal::Error { .. })));
    }

    #[test]
    fn stale_comment_response_is_ignored() {
        let mut app = logged_in_app();
        let stale = app.comments.begin_refresh();
        let current = app.comments.begin_refresh();

        let _ = update(
            &mut app,
            BackendMessage::CommentsLoaded {
                token: stale,
                result: Ok(vec![comment(1)]),
            },
        );
        assert!(app.comments.comments.is_empty());

        let _ = update(
            &mut app,
            BackendMessage::CommentsLoaded {
                token: current,
                result: Ok(vec![comment(2)]),
            },
        );
        assert_eq!(app.comments.comments[0].id, 2);
    }

    #[test]
    fn stale_failure_does_not_open_an_error_modal() {
        let mut app = logged_in_app();
        let stale = app.comments.begin_refresh();
        let _current = app.comments.begin_refresh();

        let _ = update(
            &mut app,
            BackendMessage::CommentsLoaded {
                token: stale,
                result: Err(CoreError::NetworkError("timeout".to_string())),
            },
        );
        assert!(!app.modal.is_open());
        assert!(app.comments.loading);
    }

    #[test]
    fn nickname_save_closes_the_prompt() {
        let mut app = App::new(Page::Comments, CommentQuery::default());
        app.modal.show_nickname();

        let _ = update(
            &mut app,
            BackendMessage::NicknameSaved(Ok(Session {
                logged_in: true,
                nickname: "esap".to_string(),
                ..Session::default()
            })),
        );
        assert!(!app.modal.is_open());
        assert_eq!(app.session.nickname(), "esap");
    }

    #[test]
    fn map_style_lands_in_the_map_state() {
        let mut app = logged_in_app();
        app.map.loading = true;
        let _ = update(&mut app, BackendMessage::MapStyleLoaded(Ok(MapStyle::default())));
        assert!(app.map.style.is_some());
        assert!(!app.map.loading);
    }
}
