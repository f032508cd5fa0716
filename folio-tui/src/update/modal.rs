//! 弹窗更新逻辑

use crate::message::{Command, ModalMessage};
use crate::model::state::{DeleteTarget, Modal};
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
            None
        }

        ModalMessage::Input(c) => {
            handle_input(app, c);
            None
        }

        ModalMessage::Backspace => {
            handle_backspace(app);
            None
        }

        ModalMessage::NextField => {
            handle_next_field(app);
            None
        }

        ModalMessage::Confirm => handle_confirm(app),
    }
}

fn handle_input(app: &mut App, c: char) {
    match app.modal.active.as_mut() {
        Some(Modal::Nickname { input }) => input.push(c),
        Some(Modal::AddComment { name, body, focus }) => {
            if *focus == 0 {
                name.push(c);
            } else {
                body.push(c);
            }
        }
        _ => {}
    }
}

fn handle_backspace(app: &mut App) {
    match app.modal.active.as_mut() {
        Some(Modal::Nickname { input }) => {
            input.pop();
        }
        Some(Modal::AddComment { name, body, focus }) => {
            if *focus == 0 {
                name.pop();
            } else {
                body.pop();
            }
        }
        _ => {}
    }
}

fn handle_next_field(app: &mut App) {
    match app.modal.active.as_mut() {
        Some(Modal::AddComment { focus, .. }) => {
            *focus = (*focus + 1) % 2;
        }
        Some(Modal::ConfirmDelete { focus, .. }) => {
            *focus = (*focus + 1) % 2;
        }
        _ => {}
    }
}

fn handle_confirm(app: &mut App) -> Option<Command> {
    match app.modal.active.clone() {
        Some(Modal::Nickname { input }) => {
            let nickname = input.trim().to_string();
            if nickname.is_empty() {
                app.set_status("Nickname cannot be empty");
                return None;
            }
            // 弹窗保持打开，保存成功后由后台回执关闭
            app.set_status("Saving nickname...");
            Some(Command::SaveNickname(nickname))
        }

        Some(Modal::AddComment { name, body, .. }) => {
            if body.trim().is_empty() {
                app.set_status("Comment cannot be empty");
                return None;
            }
            app.modal.close();
            app.set_status("Posting comment...");
            Some(Command::AddComment {
                name: name.trim().to_string(),
                body: body.trim().to_string(),
            })
        }

        Some(Modal::ConfirmDelete { target, focus }) => {
            app.modal.close();
            if focus != 1 {
                return None;
            }
            app.set_status("Deleting...");
            match target {
                DeleteTarget::One { id, .. } => Some(Command::DeleteComment(id)),
                DeleteTarget::All => Some(Command::DeleteAllComments),
            }
        }

        Some(Modal::Help | Modal::Error { .. }) => {
            app.modal.close();
            None
        }

        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;
    use folio_core::types::CommentQuery;

    fn app() -> App {
        App::new(Page::Comments, CommentQuery::default())
    }

    #[test]
    fn nickname_confirm_keeps_the_modal_until_saved() {
        let mut app = app();
        app.modal.show_nickname();
        for c in " esap ".chars() {
            let _ = update(&mut app, ModalMessage::Input(c));
        }

        let cmd = update(&mut app, ModalMessage::Confirm);
        assert!(matches!(cmd, Some(Command::SaveNickname(n)) if n == "esap"));
        assert!(app.modal.is_open());
    }

    #[test]
    fn empty_nickname_is_not_submitted() {
        let mut app = app();
        app.modal.show_nickname();
        let cmd = update(&mut app, ModalMessage::Confirm);
        assert!(cmd.is_none());
        assert!(app.modal.is_open());
    }

    #[test]
    fn empty_comment_body_is_rejected_locally() {
        let mut app = app();
        app.modal.show_add_comment("esap");
        let cmd = update(&mut app, ModalMessage::Confirm);
        assert!(cmd.is_none());
        assert!(app.modal.is_open());
    }

    #[test]
    fn delete_needs_the_confirm_button() {
        let mut app = app();
        app.modal.show_confirm_delete(7, "ana");

        // 焦点默认在取消上
        let cmd = update(&mut app, ModalMessage::Confirm);
        assert!(cmd.is_none());
        assert!(!app.modal.is_open());

        app.modal.show_confirm_delete(7, "ana");
        let _ = update(&mut app, ModalMessage::NextField);
        let cmd = update(&mut app, ModalMessage::Confirm);
        assert!(matches!(cmd, Some(Command::DeleteComment(7))));
    }

    #[test]
    fn delete_all_uses_the_bulk_command() {
        let mut app = app();
        app.modal.show_confirm_delete_all();
        let _ = update(&mut app, ModalMessage::NextField);
        let cmd = update(&mut app, ModalMessage::Confirm);
        assert!(matches!(cmd, Some(Command::DeleteAllComments)));
    }
}
