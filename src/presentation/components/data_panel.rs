//! Data tab: filterable, sortable file table with row selection, or the
//! contributor → folder → file browser with its checkbox filters

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::{
        data::DataView,
        nav::{InputTarget, Pane},
    },
    domain::{
        browser::{BrowserColumn, BrowserRow, FilterEntry},
        files::{FileTable, SortColumn},
    },
    presentation::context::DashboardContext,
};

const FILTER_MENU_WIDTH: u16 = 36;

#[derive(Debug, Default)]
pub struct DataPanelComponent;

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

impl DataPanelComponent {
    pub fn new() -> Self {
        Self
    }

    /// Header cells: select-all box, then columns numbered by their sort key
    pub fn header_cells(table: &FileTable) -> Vec<String> {
        let mut cells = vec![checkbox(table.all_visible_selected()).to_string()];
        cells.extend(SortColumn::iter().enumerate().map(|(index, column)| {
            if column == table.sort_column() {
                format!("{} {column} {}", index + 1, table.direction().arrow())
            } else {
                format!("{} {column}", index + 1)
            }
        }));
        cells
    }

    /// Browser line: checkbox, file icon and name
    pub fn row_line(row: &BrowserRow) -> Line<'static> {
        let icon = row
            .file_type
            .map(|file_type| format!("{} ", file_type.icon()))
            .unwrap_or_default();
        let line = Line::from(format!("{} {icon}{}", checkbox(row.checked), row.label));
        if row.greyed_out {
            line.fg(Color::DarkGray)
        } else {
            line
        }
    }

    pub fn filter_label(entry: &FilterEntry) -> String {
        match entry {
            FilterEntry::Type(file_type) => format!("Type: {file_type}"),
            FilterEntry::Contributor(name) => format!("Contributor: {name}"),
        }
    }

    pub fn view(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        match ctx.state().data.view {
            DataView::Table => self.view_table_tab(ctx, frame, area),
            DataView::Browser => self.view_browser(ctx, frame, area),
        }
    }

    fn view_table_tab(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let [filter, table_area, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.view_filter(ctx, frame, filter);
        self.view_table(ctx, frame, table_area);

        let hints_line =
            Line::from("space select · a all · d delete · u upload · 1-5 sort · v browse")
                .fg(Color::DarkGray);
        frame.render_widget(Paragraph::new(hints_line), hints);
    }

    fn view_browser(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let data = &ctx.state().data;
        let browser = &data.browser;
        let [filters, columns, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let filter_line = Line::from(vec![
            Span::raw(format!("Type: {} ▾", browser.type_label())),
            Span::raw("  "),
            Span::raw(format!("Contributor: {} ▾", browser.contributor_label())),
        ]);
        frame.render_widget(Paragraph::new(filter_line), filters);

        let [contributors, folders, files] =
            Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(columns);
        let opened_contributor = browser.selected_contributor().map(|c| c.name.as_str());
        let opened_folder = browser.selected_folder().map(|f| f.name.as_str());
        self.view_column(
            ctx,
            frame,
            contributors,
            ("Contributor", BrowserColumn::Contributor),
            &browser.contributor_rows(),
            opened_contributor,
        );
        self.view_column(
            ctx,
            frame,
            folders,
            ("Folder", BrowserColumn::Folder),
            &browser.folder_rows(),
            opened_folder,
        );
        self.view_column(
            ctx,
            frame,
            files,
            ("File", BrowserColumn::File),
            &browser.file_rows(),
            None,
        );

        let hints_line =
            Line::from("enter open · esc back · space check · f filters · v table")
                .fg(Color::DarkGray);
        frame.render_widget(Paragraph::new(hints_line), hints);

        if data.filter_menu.is_some() {
            self.view_filter_menu(ctx, frame, area);
        }
    }

    fn view_column(
        &self,
        ctx: &DashboardContext<'_>,
        frame: &mut Frame,
        area: Rect,
        (title, column): (&str, BrowserColumn),
        rows: &[BrowserRow],
        opened: Option<&str>,
    ) {
        let browser = &ctx.state().data.browser;
        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| {
                let line = Self::row_line(row);
                if opened == Some(row.label.as_str()) {
                    ListItem::new(line.bold())
                } else {
                    ListItem::new(line)
                }
            })
            .collect();
        let list = List::new(items)
            .block(Block::bordered().title(format!(" {title} ")))
            .highlight_style(ctx.style("highlight", Style::default().reversed()));
        let active = browser.column() == column && ctx.is_focused(Pane::Analysis);
        let mut list_state = ListState::default().with_selected(active.then_some(browser.cursor()));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    /// Type / Contributor checkboxes dropped over the browser
    fn view_filter_menu(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let data = &ctx.state().data;
        let browser = &data.browser;
        let items: Vec<ListItem> = browser
            .filter_entries()
            .iter()
            .map(|entry| {
                ListItem::new(format!(
                    "{} {}",
                    checkbox(browser.filter_selected(entry)),
                    Self::filter_label(entry)
                ))
            })
            .collect();
        let popup = Rect::new(
            area.x,
            area.y + 1,
            FILTER_MENU_WIDTH.min(area.width),
            (items.len() as u16 + 2).min(area.height.saturating_sub(1)),
        );

        let list = List::new(items)
            .block(Block::bordered().title(" Filters "))
            .highlight_style(ctx.style("highlight", Style::default().reversed()))
            .highlight_symbol("› ");
        let mut list_state = ListState::default().with_selected(data.filter_menu);

        frame.render_widget(Clear, popup);
        frame.render_stateful_widget(list, popup, &mut list_state);
    }

    fn view_filter(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let table = &ctx.state().data.table;
        let editing = ctx.state().nav.is_inserting(InputTarget::FileFilter);
        let line = if table.filter().is_empty() && !editing {
            Line::from("/ Filter files").fg(Color::DarkGray)
        } else {
            Line::from(vec![
                Span::raw("Filter: "),
                Span::styled(table.filter(), Style::default().bold()),
            ])
        };
        frame.render_widget(Paragraph::new(line), area);

        if editing {
            let offset = "Filter: ".len() as u16 + table.filter().chars().count() as u16;
            frame.set_cursor_position(Position::new(
                (area.x + offset).min(area.right().saturating_sub(1)),
                area.y,
            ));
        }
    }

    fn view_table(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let data = &ctx.state().data;
        let table = &data.table;
        let rows_data = table.visible();

        if rows_data.is_empty() {
            let empty = Paragraph::new("No files")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(Self::header_cells(table)).bold();
        let rows: Vec<Row> = rows_data
            .iter()
            .map(|file| {
                Row::new(vec![
                    checkbox(table.is_selected(&file.id)).to_string(),
                    format!("{} {}", file.file_type.icon(), file.name),
                    file.file_type.to_string(),
                    file.contributor.clone(),
                    file.folder.clone(),
                    file.date_added.format("%Y-%m-%d").to_string(),
                ])
            })
            .collect();
        let widths = [
            Constraint::Length(3),
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(12),
        ];

        let widget = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(ctx.style("highlight", Style::default().reversed()));
        let selected = ctx.is_focused(Pane::Analysis).then_some(data.cursor);
        let mut table_state = TableState::default().with_selected(selected);
        frame.render_stateful_widget(widget, area, &mut table_state);
    }
}
