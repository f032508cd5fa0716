//! 弹窗消息

/// 弹窗消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,
    /// 输入字符
    Input(char),
    /// 删除一个字符
    Backspace,
    /// 切换到下一个输入字段/按钮
    NextField,
    /// 确认/执行操作
    Confirm,
}
