//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     while let Ok(msg) = rx.try_recv() {             // 先排空后台结果
//!         update::update(&mut app , msg)
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     } else {
//!         update::update(&mut app , Tick)             // 没有输入也要推进打字机动画
//!     }
//! }
//!
//! Update 返回的 Command 交给 `CoreService::dispatch` 异步执行，
//! 结果作为 `AppMessage::Backend(...)` 从 rx 回到这里。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::CoreService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    core: &CoreService,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 排空后台任务送回的结果
        while let Ok(msg) = rx.try_recv() {
            apply(app, core, msg);
        }

        // 4. 轮询事件（100ms 超时），空转时发 Tick 驱动动画
        let msg = match event::poll_event(Duration::from_millis(100))? {
            Some(event) => event::handle_event(event, app),
            None => AppMessage::Tick,
        };

        // 5. 更新状态
        apply(app, core, msg);
    }

    Ok(())
}

/// 更新状态，并把产生的指令交给后台执行
fn apply(app: &mut App, core: &CoreService, msg: AppMessage) {
    if let Some(cmd) = update::update(app, msg) {
        core.dispatch(cmd);
    }
}
