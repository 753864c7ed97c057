use crate::{
    core::{cmd::Cmd, msg::data::DataMsg},
    domain::{
        browser::{FileBrowser, FilterEntry},
        files::FileTable,
    },
};

/// How the data tab presents the files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataView {
    #[default]
    Table,
    Browser,
}

/// Data tab: file table with its row cursor, and the file browser
#[derive(Debug, Clone, Default)]
pub struct DataState {
    pub table: FileTable,
    /// Index into the visible rows
    pub cursor: usize,
    pub view: DataView,
    pub browser: FileBrowser,
    /// Highlighted entry while the browser filter menu is open
    pub filter_menu: Option<usize>,
}

impl DataState {
    /// Data-specific update function
    pub fn update(&mut self, msg: DataMsg) -> Vec<Cmd> {
        match msg {
            DataMsg::SortBy(column) => self.table.sort_by(column),
            DataMsg::UpdateFilter(filter) => self.table.set_filter(filter),
            DataMsg::CursorUp if self.view == DataView::Browser => self.browser.move_cursor(false),
            DataMsg::CursorDown if self.view == DataView::Browser => self.browser.move_cursor(true),
            DataMsg::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            DataMsg::CursorDown => self.cursor += 1,
            DataMsg::ToggleSelected => {
                if let Some(id) = self.cursor_id() {
                    self.table.toggle_selected(&id);
                }
            }
            DataMsg::ToggleSelectAll => {
                let checked = !self.table.all_visible_selected();
                self.table.select_all(checked);
            }
            DataMsg::DeleteSelected => {
                let removed = self.table.delete_selected();
                self.clamp_cursor();
                if removed == 0 {
                    return vec![];
                }
                return vec![Cmd::LogInfo {
                    message: format!("Deleted {removed} file(s)"),
                }];
            }
            DataMsg::Upload => {
                return vec![Cmd::LogInfo {
                    message: "Upload clicked".to_string(),
                }];
            }
            DataMsg::ToggleView => {
                self.view = match self.view {
                    DataView::Table => DataView::Browser,
                    DataView::Browser => DataView::Table,
                };
                self.filter_menu = None;
            }
            DataMsg::BrowserOpen => {
                self.browser.open();
            }
            DataMsg::BrowserBack => {
                self.browser.back();
            }
            DataMsg::ToggleChecked => {
                if !self.browser.toggle_checked() {
                    log::debug!("browser row is disabled or missing");
                }
            }
            DataMsg::OpenFilterMenu => self.filter_menu = Some(0),
            DataMsg::CloseFilterMenu => self.filter_menu = None,
            DataMsg::MoveFilterMenu(forward) => {
                let len = self.browser.filter_entries().len();
                if let Some(index) = self.filter_menu {
                    if len > 0 {
                        self.filter_menu = Some(if forward {
                            (index + 1) % len
                        } else {
                            (index + len - 1) % len
                        });
                    }
                }
            }
            DataMsg::ToggleFilter(entry) => {
                self.browser.toggle_filter(&entry);
            }
        }
        self.clamp_cursor();
        vec![]
    }

    fn clamp_cursor(&mut self) {
        let count = self.table.visible().len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }

    /// Filter menu entry under the highlight
    pub fn highlighted_filter(&self) -> Option<FilterEntry> {
        self.filter_menu
            .and_then(|index| self.browser.filter_entries().into_iter().nth(index))
    }

    fn cursor_id(&self) -> Option<String> {
        self.table
            .visible()
            .get(self.cursor)
            .map(|record| record.id.clone())
    }
}
