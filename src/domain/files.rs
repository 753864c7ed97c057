//! Sample data files behind the analysis "Data" tab

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum FileType {
    #[strum(to_string = "Audio transcript")]
    AudioTranscript,
    #[strum(to_string = "PDF")]
    Pdf,
    Text,
    Web,
}

impl FileType {
    pub fn icon(&self) -> &'static str {
        match self {
            FileType::AudioTranscript => "♪",
            FileType::Pdf => "▤",
            FileType::Text => "≡",
            FileType::Web => "◍",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub file_type: FileType,
    pub contributor: String,
    pub folder: String,
    pub date_added: NaiveDate,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum SortColumn {
    #[default]
    Name,
    Type,
    Contributor,
    Folder,
    #[strum(to_string = "Date Added")]
    DateAdded,
}

impl SortColumn {
    /// Column for a 1-based header position.
    pub fn from_position(position: usize) -> Option<Self> {
        position.checked_sub(1).and_then(|i| SortColumn::iter().nth(i))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub fn sample_files() -> Vec<FileRecord> {
    let record = |id: &str, name: &str, file_type, contributor: &str, folder: &str, added| {
        FileRecord {
            id: id.to_string(),
            name: name.to_string(),
            file_type,
            contributor: contributor.to_string(),
            folder: folder.to_string(),
            date_added: added,
        }
    };
    vec![
        record(
            "1",
            "Interview 1",
            FileType::AudioTranscript,
            "SmallFrank450",
            "Interviews",
            date(2023, 6, 1),
        ),
        record(
            "2",
            "Research Paper",
            FileType::Pdf,
            "R3s3archLuvr777",
            "Papers",
            date(2023, 6, 2),
        ),
        record(
            "3",
            "Notes",
            FileType::Text,
            "NotVeryTrustworthy",
            "Misc",
            date(2023, 6, 3),
        ),
        record(
            "4",
            "Website Data",
            FileType::Web,
            "SmallFrank450",
            "Web Scrapes",
            date(2023, 6, 4),
        ),
    ]
}

/// File table with sorting, filtering and checkbox selection.
#[derive(Debug, Clone)]
pub struct FileTable {
    files: Vec<FileRecord>,
    selected: BTreeSet<String>,
    sort_column: SortColumn,
    direction: SortDirection,
    filter: String,
}

impl Default for FileTable {
    fn default() -> Self {
        Self::new(sample_files())
    }
}

impl FileTable {
    pub fn new(files: Vec<FileRecord>) -> Self {
        Self {
            files,
            selected: BTreeSet::new(),
            sort_column: SortColumn::default(),
            direction: SortDirection::default(),
            filter: String::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Clicking the current sort column flips the direction, any other
    /// column becomes the ascending sort key.
    pub fn sort_by(&mut self, column: SortColumn) {
        if column == self.sort_column {
            self.direction = self.direction.toggled();
        } else {
            self.sort_column = column;
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Rows in display order: sorted, then filtered.
    pub fn visible(&self) -> Vec<&FileRecord> {
        let mut rows: Vec<&FileRecord> = self.files.iter().collect();
        rows.sort_by(|a, b| {
            let ordering = compare(a, b, self.sort_column);
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        let needle = self.filter.to_lowercase();
        rows.retain(|file| matches_filter(file, &needle));
        rows
    }

    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Select every visible row, or clear the selection.
    pub fn select_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.visible().iter().map(|file| file.id.clone()).collect();
        } else {
            self.selected.clear();
        }
    }

    /// Header checkbox state.
    pub fn all_visible_selected(&self) -> bool {
        let visible = self.visible().len();
        visible > 0 && self.selected.len() == visible
    }

    /// Remove selected rows. Returns how many were deleted.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.files.len();
        let selected = std::mem::take(&mut self.selected);
        self.files.retain(|file| !selected.contains(&file.id));
        before - self.files.len()
    }
}

fn compare(a: &FileRecord, b: &FileRecord, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Type => a.file_type.to_string().cmp(&b.file_type.to_string()),
        SortColumn::Contributor => a.contributor.cmp(&b.contributor),
        SortColumn::Folder => a.folder.cmp(&b.folder),
        SortColumn::DateAdded => a.date_added.cmp(&b.date_added),
    }
}

fn matches_filter(file: &FileRecord, needle: &str) -> bool {
    needle.is_empty()
        || file.name.to_lowercase().contains(needle)
        || file.file_type.to_string().to_lowercase().contains(needle)
        || file.contributor.to_lowercase().contains(needle)
        || file.folder.to_lowercase().contains(needle)
}
