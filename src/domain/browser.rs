//! Contributor → folder → file browser with checkbox filters
//!
//! Items are addressed by slash-joined keys (`contributor`,
//! `contributor/folder`, `contributor/folder/file`). Every item starts
//! checked. An item is greyed out while its contributor is filtered out or,
//! for files, while its type is; greyed items cannot be (un)checked.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::domain::files::{sample_files, FileRecord, FileType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserFile {
    pub name: String,
    pub file_type: FileType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserFolder {
    pub name: String,
    pub files: Vec<BrowserFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserContributor {
    pub name: String,
    pub folders: Vec<BrowserFolder>,
}

/// Column holding the browser cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserColumn {
    #[default]
    Contributor,
    Folder,
    File,
}

/// Entry of the Type / Contributor filter menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterEntry {
    Type(FileType),
    Contributor(String),
}

/// One line of a browser column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserRow {
    pub key: String,
    pub label: String,
    /// Set for file rows
    pub file_type: Option<FileType>,
    pub greyed_out: bool,
    pub checked: bool,
}

#[derive(Debug, Clone)]
pub struct FileBrowser {
    tree: Vec<BrowserContributor>,
    types: BTreeSet<FileType>,
    contributors: BTreeSet<String>,
    checked: BTreeSet<String>,
    column: BrowserColumn,
    contributor: Option<usize>,
    folder: Option<usize>,
    cursor: usize,
}

impl Default for FileBrowser {
    fn default() -> Self {
        Self::from_records(&sample_files())
    }
}

fn item_key(parts: &[&str]) -> String {
    parts.join("/")
}

impl FileBrowser {
    /// Group records by contributor, then folder, in order of first appearance.
    pub fn from_records(records: &[FileRecord]) -> Self {
        let mut tree: Vec<BrowserContributor> = Vec::new();
        for record in records {
            let contributor = match tree.iter().position(|c| c.name == record.contributor) {
                Some(index) => &mut tree[index],
                None => {
                    tree.push(BrowserContributor {
                        name: record.contributor.clone(),
                        folders: Vec::new(),
                    });
                    let last = tree.len() - 1;
                    &mut tree[last]
                }
            };
            let folder = match contributor
                .folders
                .iter()
                .position(|f| f.name == record.folder)
            {
                Some(index) => &mut contributor.folders[index],
                None => {
                    contributor.folders.push(BrowserFolder {
                        name: record.folder.clone(),
                        files: Vec::new(),
                    });
                    let last = contributor.folders.len() - 1;
                    &mut contributor.folders[last]
                }
            };
            folder.files.push(BrowserFile {
                name: record.name.clone(),
                file_type: record.file_type,
            });
        }

        let mut checked = BTreeSet::new();
        for contributor in &tree {
            checked.insert(item_key(&[&contributor.name]));
            for folder in &contributor.folders {
                checked.insert(item_key(&[&contributor.name, &folder.name]));
                for file in &folder.files {
                    checked.insert(item_key(&[&contributor.name, &folder.name, &file.name]));
                }
            }
        }

        Self {
            contributors: tree.iter().map(|c| c.name.clone()).collect(),
            types: FileType::iter().collect(),
            tree,
            checked,
            column: BrowserColumn::default(),
            contributor: None,
            folder: None,
            cursor: 0,
        }
    }

    pub fn tree(&self) -> &[BrowserContributor] {
        &self.tree
    }

    pub fn column(&self) -> BrowserColumn {
        self.column
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_contributor(&self) -> Option<&BrowserContributor> {
        self.contributor.and_then(|index| self.tree.get(index))
    }

    pub fn selected_folder(&self) -> Option<&BrowserFolder> {
        self.selected_contributor()
            .zip(self.folder)
            .and_then(|(contributor, index)| contributor.folders.get(index))
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.checked.contains(key)
    }

    pub fn checked(&self) -> &BTreeSet<String> {
        &self.checked
    }

    pub fn type_selected(&self, file_type: FileType) -> bool {
        self.types.contains(&file_type)
    }

    pub fn contributor_selected(&self, name: &str) -> bool {
        self.contributors.contains(name)
    }

    /// Button text of the Type filter: `All`, `None` or the selected names
    pub fn type_label(&self) -> String {
        if self.types.len() == FileType::iter().count() {
            return "All".to_string();
        }
        if self.types.is_empty() {
            return "None".to_string();
        }
        self.types
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Button text of the Contributor filter: `All`, `Multiple`, the one
    /// selected name or `None`
    pub fn contributor_label(&self) -> String {
        match self.contributors.len() {
            n if n == self.tree.len() && n > 0 => "All".to_string(),
            0 => "None".to_string(),
            1 => self
                .contributors
                .iter()
                .next()
                .cloned()
                .unwrap_or_default(),
            _ => "Multiple".to_string(),
        }
    }

    /// Type entries first, then one per contributor.
    pub fn filter_entries(&self) -> Vec<FilterEntry> {
        FileType::iter()
            .map(FilterEntry::Type)
            .chain(
                self.tree
                    .iter()
                    .map(|c| FilterEntry::Contributor(c.name.clone())),
            )
            .collect()
    }

    pub fn filter_selected(&self, entry: &FilterEntry) -> bool {
        match entry {
            FilterEntry::Type(file_type) => self.type_selected(*file_type),
            FilterEntry::Contributor(name) => self.contributor_selected(name),
        }
    }

    /// Flip a filter. Unknown contributors are ignored.
    pub fn toggle_filter(&mut self, entry: &FilterEntry) -> bool {
        match entry {
            FilterEntry::Type(file_type) => {
                if !self.types.remove(file_type) {
                    self.types.insert(*file_type);
                }
                true
            }
            FilterEntry::Contributor(name) => {
                if !self.tree.iter().any(|c| &c.name == name) {
                    return false;
                }
                if !self.contributors.remove(name) {
                    self.contributors.insert(name.clone());
                }
                true
            }
        }
    }

    fn contributor_greyed_out(&self, contributor: &BrowserContributor) -> bool {
        !self.contributors.contains(&contributor.name)
    }

    fn file_greyed_out(&self, contributor: &BrowserContributor, file: &BrowserFile) -> bool {
        self.contributor_greyed_out(contributor) || !self.types.contains(&file.file_type)
    }

    fn row(
        &self,
        key: String,
        label: &str,
        file_type: Option<FileType>,
        greyed_out: bool,
    ) -> BrowserRow {
        BrowserRow {
            checked: self.is_checked(&key),
            key,
            label: label.to_string(),
            file_type,
            greyed_out,
        }
    }

    pub fn contributor_rows(&self) -> Vec<BrowserRow> {
        self.tree
            .iter()
            .map(|c| {
                self.row(
                    item_key(&[&c.name]),
                    &c.name,
                    None,
                    self.contributor_greyed_out(c),
                )
            })
            .collect()
    }

    /// Folders of the selected contributor
    pub fn folder_rows(&self) -> Vec<BrowserRow> {
        let Some(contributor) = self.selected_contributor() else {
            return vec![];
        };
        let greyed_out = self.contributor_greyed_out(contributor);
        contributor
            .folders
            .iter()
            .map(|f| {
                self.row(
                    item_key(&[&contributor.name, &f.name]),
                    &f.name,
                    None,
                    greyed_out,
                )
            })
            .collect()
    }

    /// Files of the selected folder
    pub fn file_rows(&self) -> Vec<BrowserRow> {
        let (Some(contributor), Some(folder)) =
            (self.selected_contributor(), self.selected_folder())
        else {
            return vec![];
        };
        folder
            .files
            .iter()
            .map(|file| {
                self.row(
                    item_key(&[&contributor.name, &folder.name, &file.name]),
                    &file.name,
                    Some(file.file_type),
                    self.file_greyed_out(contributor, file),
                )
            })
            .collect()
    }

    /// Rows of the column holding the cursor
    pub fn active_rows(&self) -> Vec<BrowserRow> {
        match self.column {
            BrowserColumn::Contributor => self.contributor_rows(),
            BrowserColumn::Folder => self.folder_rows(),
            BrowserColumn::File => self.file_rows(),
        }
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.active_rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let index = self.cursor.min(len - 1);
        self.cursor = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
    }

    /// Open the row under the cursor and move into the next column.
    /// Files have nothing to open.
    pub fn open(&mut self) -> bool {
        if self.cursor >= self.active_rows().len() {
            return false;
        }
        match self.column {
            BrowserColumn::Contributor => {
                self.contributor = Some(self.cursor);
                self.folder = None;
                self.column = BrowserColumn::Folder;
            }
            BrowserColumn::Folder => {
                self.folder = Some(self.cursor);
                self.column = BrowserColumn::File;
            }
            BrowserColumn::File => return false,
        }
        self.cursor = 0;
        true
    }

    /// Step back one column, keeping the opened items on display.
    pub fn back(&mut self) -> bool {
        match self.column {
            BrowserColumn::Contributor => return false,
            BrowserColumn::Folder => {
                self.column = BrowserColumn::Contributor;
                self.cursor = self.contributor.unwrap_or(0);
            }
            BrowserColumn::File => {
                self.column = BrowserColumn::Folder;
                self.cursor = self.folder.unwrap_or(0);
            }
        }
        true
    }

    /// Flip the checkbox under the cursor. Greyed-out rows are disabled.
    pub fn toggle_checked(&mut self) -> bool {
        let Some(row) = self.active_rows().into_iter().nth(self.cursor) else {
            return false;
        };
        if row.greyed_out {
            return false;
        }
        if !self.checked.remove(&row.key) {
            self.checked.insert(row.key);
        }
        true
    }
}
