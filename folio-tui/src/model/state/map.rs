//! 地图页面状态

use folio_core::services::MapService;
use folio_core::types::{MapMarker, MapStyle};

/// 地图页面状态
///
/// 样式文档首次进入页面时加载一次，之后常驻。
#[derive(Debug)]
pub struct MapState {
    /// 地标列表
    pub markers: Vec<MapMarker>,
    /// 当前选中的地标
    pub selected: usize,
    /// 样式文档，加载成功前为 None
    pub style: Option<MapStyle>,
    /// 是否正在加载样式
    pub loading: bool,
}

impl MapState {
    /// 创建地图状态
    pub fn new() -> Self {
        Self {
            markers: MapService::markers(),
            selected: 0,
            style: None,
            loading: false,
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
        if !self.markers.is_empty() && self.selected < self.markers.len() - 1 {
            self.selected += 1;
        }
    }

    /// 获取当前选中的地标
    pub fn selected_marker(&self) -> Option<&MapMarker> {
        self.markers.get(self.selected)
    }

    /// 写入样式文档
    pub fn set_style(&mut self, style: MapStyle) {
        self.style = Some(style);
        self.loading = false;
    }
}

impl Default for MapState {
    fn default() -> Self {
        Self::new()
    }
}
