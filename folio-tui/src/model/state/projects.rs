//! 项目页面状态

/// 一个项目条目
#[derive(Debug, Clone)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tech: &'static str,
}

/// 项目页面状态
#[derive(Debug)]
pub struct ProjectsState {
    /// 项目列表
    pub projects: Vec<Project>,
    /// 当前选中的索引
    pub selected: usize,
}

impl ProjectsState {
    /// 创建项目状态
    pub fn new() -> Self {
        Self {
            projects: vec![
                Project {
                    name: "Portfolio Site",
                    description: "Personal portfolio with a comment board and an interactive map",
                    tech: "Java servlets, Datastore, vanilla JS",
                },
                Project {
                    name: "Photo Gallery",
                    description: "Street photography collection from Mexico City",
                    tech: "Static site, responsive grid",
                },
                Project {
                    name: "Race Strategy Sim",
                    description: "Formula 1 pit stop strategy simulator",
                    tech: "Python, matplotlib",
                },
            ],
            selected: 0,
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
        if !self.projects.is_empty() && self.selected < self.projects.len() - 1 {
            self.selected += 1;
        }
    }

    /// 获取当前选中的项目
    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected)
    }
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self::new()
    }
}
