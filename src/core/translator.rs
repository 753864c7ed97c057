use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::{
    core::{
        msg::{
            analysis::AnalysisMsg, chat::ChatMsg, data::DataMsg, layout::LayoutMsg, nav::NavMsg,
            system::SystemMsg, Msg,
        },
        raw_msg::RawMsg,
        state::{
            analysis::{AnalysisTab, MainTab},
            data::DataView,
            nav::{HomeAction, InputTarget, Page, Pane, UiMode},
            AppState,
        },
    },
    domain::{
        article::Link,
        browser::BrowserColumn,
        files::SortColumn,
        text::{pop_input, push_input},
        topic::menu_topics,
    },
    presentation::{
        components::{
            dashboard::{body_area, BRAND_WIDTH, HEADER_HEIGHT},
            header::HeaderComponent,
        },
        config::keybindings::Action,
        context::DashboardContext,
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),
        RawMsg::Paste(text) => translate_paste(&text, state),

        RawMsg::AgentReply(text) => vec![Msg::Chat(ChatMsg::ReceiveReply(text))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    let action = state.config.config.keybindings.action_for(key);

    // Overlays swallow input before the panes see it
    if state.nav.show_upgrade_dialog {
        return match (key.code, action) {
            (KeyCode::Enter | KeyCode::Esc, _) | (_, Some(Action::Activate | Action::Back)) => {
                vec![DashboardContext::new(state).close_dialog()]
            }
            _ => vec![],
        };
    }
    if let Some(index) = state.nav.topic_menu {
        return translate_topic_menu_keys(key, action, index, state);
    }
    if state.nav.user_menu.is_some() {
        return translate_user_menu_keys(key, action, state);
    }
    if state.data.filter_menu.is_some() && data_tab_active(state) {
        return translate_filter_menu_keys(key, action, state);
    }

    match state.nav.mode {
        UiMode::Insert(target) => translate_input_mode_keys(key, target, state),
        UiMode::Normal => action
            .map(|action| translate_action_to_msg(action, state))
            .unwrap_or_default(),
    }
}

fn translate_topic_menu_keys(
    key: KeyEvent,
    action: Option<Action>,
    index: usize,
    state: &AppState,
) -> Vec<Msg> {
    match (key.code, action) {
        (KeyCode::Esc, _) | (_, Some(Action::Back | Action::OpenTopicMenu)) => {
            vec![Msg::Nav(NavMsg::CloseTopicMenu)]
        }
        (KeyCode::Up, _) | (_, Some(Action::CursorUp)) => {
            vec![Msg::Nav(NavMsg::MoveTopicMenu(false))]
        }
        (KeyCode::Down, _) | (_, Some(Action::CursorDown)) => {
            vec![Msg::Nav(NavMsg::MoveTopicMenu(true))]
        }
        (KeyCode::Enter, _) | (_, Some(Action::Activate)) => menu_topics()
            .get(index)
            .map(|topic| vec![DashboardContext::new(state).handle_topic_click(topic)])
            .unwrap_or_default(),
        (_, Some(Action::Quit)) => vec![Msg::System(SystemMsg::Quit)],
        _ => vec![],
    }
}

fn translate_user_menu_keys(
    key: KeyEvent,
    action: Option<Action>,
    state: &AppState,
) -> Vec<Msg> {
    match (key.code, action) {
        (KeyCode::Esc, _) | (_, Some(Action::Back | Action::OpenUserMenu)) => {
            vec![Msg::Nav(NavMsg::CloseUserMenu)]
        }
        (KeyCode::Up, _) | (_, Some(Action::CursorUp)) => {
            vec![Msg::Nav(NavMsg::MoveUserMenu(false))]
        }
        (KeyCode::Down, _) | (_, Some(Action::CursorDown)) => {
            vec![Msg::Nav(NavMsg::MoveUserMenu(true))]
        }
        (KeyCode::Enter, _) | (_, Some(Action::Activate)) => state
            .nav
            .highlighted_user_item()
            .map(|item| vec![DashboardContext::new(state).handle_user_menu(item)])
            .unwrap_or_default(),
        (_, Some(Action::Quit)) => vec![Msg::System(SystemMsg::Quit)],
        _ => vec![],
    }
}

/// Type / Contributor checkbox menu of the file browser
fn translate_filter_menu_keys(
    key: KeyEvent,
    action: Option<Action>,
    state: &AppState,
) -> Vec<Msg> {
    match (key.code, action) {
        (KeyCode::Esc, _) | (_, Some(Action::Back | Action::FilterMenu)) => {
            vec![Msg::Data(DataMsg::CloseFilterMenu)]
        }
        (KeyCode::Up, _) | (_, Some(Action::CursorUp)) => {
            vec![Msg::Data(DataMsg::MoveFilterMenu(false))]
        }
        (KeyCode::Down, _) | (_, Some(Action::CursorDown)) => {
            vec![Msg::Data(DataMsg::MoveFilterMenu(true))]
        }
        (KeyCode::Enter, _) | (_, Some(Action::Activate | Action::ToggleSelect)) => state
            .data
            .highlighted_filter()
            .map(|entry| vec![Msg::Data(DataMsg::ToggleFilter(entry))])
            .unwrap_or_default(),
        (_, Some(Action::Quit)) => vec![Msg::System(SystemMsg::Quit)],
        _ => vec![],
    }
}

/// Key bindings while a text field has focus
fn translate_input_mode_keys(key: KeyEvent, target: InputTarget, state: &AppState) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc => vec![Msg::Nav(NavMsg::LeaveInsert)],
        KeyCode::Enter => match target {
            InputTarget::Chat => vec![Msg::Chat(ChatMsg::Submit)],
            InputTarget::TopicSearch => {
                let mut msgs = vec![Msg::Nav(NavMsg::LeaveInsert)];
                if let Some(topic) = state.nav.highlighted_topic() {
                    msgs.push(DashboardContext::new(state).handle_topic_click(topic));
                }
                msgs
            }
            InputTarget::FileFilter => vec![Msg::Nav(NavMsg::LeaveInsert)],
        },
        KeyCode::Up => vec![Msg::Nav(NavMsg::CursorUp)],
        KeyCode::Down => vec![Msg::Nav(NavMsg::CursorDown)],
        KeyCode::Backspace => vec![input_msg(target, pop_input(input_text(target, state)))],
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            vec![input_msg(target, push_input(input_text(target, state), c))]
        }
        _ => vec![],
    }
}

fn translate_paste(text: &str, state: &AppState) -> Vec<Msg> {
    let UiMode::Insert(target) = state.nav.mode else {
        return vec![];
    };
    let pasted = text
        .chars()
        .fold(input_text(target, state).to_string(), |buffer, c| {
            push_input(&buffer, c)
        });
    vec![input_msg(target, pasted)]
}

fn input_text(target: InputTarget, state: &AppState) -> &str {
    match target {
        InputTarget::Chat => &state.chat.input,
        InputTarget::TopicSearch => &state.nav.topic_search,
        InputTarget::FileFilter => state.data.table.filter(),
    }
}

fn input_msg(target: InputTarget, text: String) -> Msg {
    match target {
        InputTarget::Chat => Msg::Chat(ChatMsg::UpdateInput(text)),
        InputTarget::TopicSearch => Msg::Nav(NavMsg::UpdateTopicSearch(text)),
        InputTarget::FileFilter => Msg::Data(DataMsg::UpdateFilter(text)),
    }
}

/// Whether the data tab is on screen and owns its keys
fn data_tab_active(state: &AppState) -> bool {
    state.nav.page == Page::Topic && state.analysis.tab == MainTab::Data
}

fn data_table_active(state: &AppState) -> bool {
    data_tab_active(state) && state.data.view == DataView::Table
}

fn browser_active(state: &AppState) -> bool {
    data_tab_active(state) && state.data.view == DataView::Browser
}

/// Whether Analysis > `sub_tab` is on screen
fn sub_tab_active(state: &AppState, sub_tab: AnalysisTab) -> bool {
    state.nav.page == Page::Topic
        && state.analysis.tab == MainTab::Analysis
        && state.analysis.sub_tab == sub_tab
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    let ctx = DashboardContext::new(state);
    let on_topic_page = state.nav.page == Page::Topic;

    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::FocusNext => vec![Msg::Nav(NavMsg::FocusNext)],
        Action::FocusPrev => vec![Msg::Nav(NavMsg::FocusPrev)],
        Action::CursorUp => vec![cursor_msg(state, false)],
        Action::CursorDown => vec![cursor_msg(state, true)],
        Action::Activate => translate_activate(state),
        Action::Back => {
            if state.nav.focus == Pane::Analysis
                && browser_active(state)
                && state.data.browser.column() != BrowserColumn::Contributor
            {
                vec![Msg::Data(DataMsg::BrowserBack)]
            } else if state.system.status_message.is_some() {
                vec![Msg::System(SystemMsg::ClearStatusMessage)]
            } else {
                vec![]
            }
        }
        Action::GoHome => vec![ctx.go_home()],
        Action::OpenTopicMenu => vec![Msg::Nav(NavMsg::OpenTopicMenu)],
        Action::OpenUserMenu => vec![Msg::Nav(NavMsg::OpenUserMenu)],
        Action::Search => {
            if data_tab_active(state) {
                vec![
                    Msg::Nav(NavMsg::FocusPane(Pane::Analysis)),
                    Msg::Nav(NavMsg::EnterInsert(InputTarget::FileFilter)),
                ]
            } else {
                vec![
                    ctx.go_home(),
                    Msg::Nav(NavMsg::EnterInsert(InputTarget::TopicSearch)),
                ]
            }
        }
        Action::Compose if on_topic_page => vec![
            Msg::Nav(NavMsg::FocusPane(Pane::Chat)),
            Msg::Nav(NavMsg::EnterInsert(InputTarget::Chat)),
        ],
        Action::NextTab if on_topic_page => vec![Msg::Analysis(AnalysisMsg::NextTab)],
        Action::PrevTab if on_topic_page => vec![Msg::Analysis(AnalysisMsg::PrevTab)],
        Action::NextSubTab if on_topic_page => vec![Msg::Analysis(AnalysisMsg::NextSubTab)],
        Action::PrevSubTab if on_topic_page => vec![Msg::Analysis(AnalysisMsg::PrevSubTab)],
        Action::GrowPane | Action::ShrinkPane => vec![Msg::Layout(LayoutMsg::ResizePane {
            pane: state.nav.focus.index(),
            grow: action == Action::GrowPane,
        })],
        Action::ToggleSelect if browser_active(state) => vec![Msg::Data(DataMsg::ToggleChecked)],
        Action::ToggleSelect if data_table_active(state) => {
            vec![Msg::Data(DataMsg::ToggleSelected)]
        }
        Action::SelectAll if data_table_active(state) => {
            vec![Msg::Data(DataMsg::ToggleSelectAll)]
        }
        Action::DeleteSelected if data_table_active(state) => {
            vec![Msg::Data(DataMsg::DeleteSelected)]
        }
        Action::ToggleDataView if data_tab_active(state) => vec![Msg::Data(DataMsg::ToggleView)],
        Action::FilterMenu if browser_active(state) => vec![
            Msg::Nav(NavMsg::FocusPane(Pane::Analysis)),
            Msg::Data(DataMsg::OpenFilterMenu),
        ],
        Action::ZoomIn if sub_tab_active(state, AnalysisTab::Map) => {
            vec![Msg::Analysis(AnalysisMsg::ZoomIn)]
        }
        Action::ZoomOut if sub_tab_active(state, AnalysisTab::Map) => {
            vec![Msg::Analysis(AnalysisMsg::ZoomOut)]
        }
        Action::ResetZoom if sub_tab_active(state, AnalysisTab::Map) => {
            vec![Msg::Analysis(AnalysisMsg::ResetZoom)]
        }
        Action::Upload if data_tab_active(state) => vec![Msg::Data(DataMsg::Upload)],
        Action::SortByName
        | Action::SortByType
        | Action::SortByContributor
        | Action::SortByFolder
        | Action::SortByDateAdded
            if data_table_active(state) =>
        {
            vec![Msg::Data(DataMsg::SortBy(sort_column(action)))]
        }
        _ => vec![],
    }
}

fn sort_column(action: Action) -> SortColumn {
    match action {
        Action::SortByType => SortColumn::Type,
        Action::SortByContributor => SortColumn::Contributor,
        Action::SortByFolder => SortColumn::Folder,
        Action::SortByDateAdded => SortColumn::DateAdded,
        _ => SortColumn::Name,
    }
}

/// Cursor movement goes to the view on the focused analysis pane: data
/// rows, graph nodes or map cities. Other panes move their own cursors.
fn cursor_msg(state: &AppState, forward: bool) -> Msg {
    if state.nav.focus == Pane::Analysis {
        if data_tab_active(state) {
            return Msg::Data(if forward {
                DataMsg::CursorDown
            } else {
                DataMsg::CursorUp
            });
        }
        if sub_tab_active(state, AnalysisTab::KnowledgeGraph) {
            return Msg::Analysis(AnalysisMsg::MoveNodeCursor(forward));
        }
        if sub_tab_active(state, AnalysisTab::Map) {
            return Msg::Analysis(AnalysisMsg::MoveMapFocus(forward));
        }
    }
    Msg::Nav(if forward {
        NavMsg::CursorDown
    } else {
        NavMsg::CursorUp
    })
}

/// Enter on the focused pane
fn translate_activate(state: &AppState) -> Vec<Msg> {
    let ctx = DashboardContext::new(state);
    match state.nav.focus {
        Pane::Topics => state
            .nav
            .highlighted_topic()
            .map(|topic| vec![ctx.handle_topic_click(topic)])
            .unwrap_or_default(),
        Pane::Actions => match state.nav.highlighted_action() {
            Some(HomeAction::UploadData | HomeAction::CreateTopic | HomeAction::UpgradeToPro) => {
                vec![ctx.handle_pro_feature_click()]
            }
            None => vec![],
        },
        Pane::Chat => vec![Msg::Nav(NavMsg::EnterInsert(InputTarget::Chat))],
        Pane::Article => match state.nav.selected_link() {
            Some(Link::Article(title)) => vec![ctx.handle_article_click(&title)],
            Some(Link::Source(n)) => {
                let mut msgs = vec![Msg::Analysis(AnalysisMsg::ShowSource(n))];
                if state.analysis.has_source(n) {
                    msgs.push(Msg::Nav(NavMsg::FocusPane(Pane::Analysis)));
                }
                msgs
            }
            None => vec![],
        },
        Pane::Analysis => match (state.analysis.tab, state.data.view) {
            (MainTab::Home, _) => vec![ctx.handle_pro_feature_click()],
            (MainTab::Data, DataView::Table) => vec![Msg::Data(DataMsg::ToggleSelected)],
            (MainTab::Data, DataView::Browser) => vec![Msg::Data(DataMsg::BrowserOpen)],
            (MainTab::Analysis, _) if state.analysis.sub_tab == AnalysisTab::KnowledgeGraph => {
                vec![Msg::Analysis(AnalysisMsg::ActivateNode)]
            }
            (MainTab::Analysis, _) => vec![],
        },
    }
}

/// Body rectangle for the last known terminal size
fn current_body(state: &AppState) -> Option<Rect> {
    let (width, height) = state.system.terminal_size?;
    Some(body_area(Rect::new(0, 0, width, height)))
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Mouse input: divider drags, pane focus and a few click targets
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let Some(body) = current_body(state) else {
        return vec![];
    };
    let row = state.layout.row(state.nav.page);
    let ctx = DashboardContext::new(state);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if state.nav.show_upgrade_dialog {
                return vec![ctx.close_dialog()];
            }
            let header = Rect::new(0, 0, body.width, HEADER_HEIGHT);
            let on_user = contains(
                HeaderComponent::user_area(&ctx, header),
                mouse.column,
                mouse.row,
            );
            if state.nav.user_menu.is_some() {
                return vec![Msg::Nav(NavMsg::CloseUserMenu)];
            }
            if on_user {
                return vec![Msg::Nav(NavMsg::OpenUserMenu)];
            }
            if mouse.row < body.y {
                return if mouse.column < BRAND_WIDTH {
                    vec![ctx.go_home()]
                } else {
                    vec![]
                };
            }
            if !contains(body, mouse.column, mouse.row) {
                return vec![];
            }
            let column = mouse.column - body.x;
            if let Some(divider) = row.hit_divider(column, body.width) {
                return vec![Msg::Layout(LayoutMsg::BeginDrag { divider })];
            }
            let Some(index) = row.pane_at(column, body.width) else {
                return vec![];
            };
            let Some(pane) = state.nav.page.panes().get(index).copied() else {
                return vec![];
            };
            let mut msgs = vec![Msg::Nav(NavMsg::FocusPane(pane))];
            // Topic list rows start right under the pane border
            if pane == Pane::Topics {
                let line = usize::from(mouse.row.saturating_sub(body.y + 1));
                if mouse.row > body.y {
                    if let Some((_, topic)) = state.nav.visible_topics().get(line) {
                        msgs.push(ctx.handle_topic_click(topic));
                    }
                }
            }
            msgs
        }
        MouseEventKind::Drag(MouseButton::Left) if row.is_dragging() => {
            vec![Msg::Layout(LayoutMsg::UpdateDrag {
                pointer_x: f64::from(mouse.column.saturating_sub(body.x)),
                container_width: f64::from(body.width),
            })]
        }
        MouseEventKind::Up(_) if row.is_dragging() => vec![Msg::Layout(LayoutMsg::EndDrag)],
        MouseEventKind::ScrollUp if contains(body, mouse.column, mouse.row) => {
            vec![cursor_msg(state, false)]
        }
        MouseEventKind::ScrollDown if contains(body, mouse.column, mouse.row) => {
            vec![cursor_msg(state, true)]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::update::update, infrastructure::config::Config};
    use color_eyre::eyre::Result;
    use pretty_assertions::assert_eq;

    fn state_with_bindings() -> Result<AppState> {
        let mut state = AppState::new(Config::embedded()?)?;
        state.system.terminal_size = Some((100, 30));
        Ok(state)
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> RawMsg {
        RawMsg::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn apply(state: AppState, raw: RawMsg) -> AppState {
        translate_raw_to_domain(raw, &state)
            .into_iter()
            .fold(state, |state, msg| update(msg, state).0)
    }

    #[test]
    fn test_ctrl_c_always_quits() -> Result<()> {
        let mut state = state_with_bindings()?;
        state.nav.mode = UiMode::Insert(InputTarget::Chat);
        let msgs = translate_raw_to_domain(
            RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            &state,
        );
        assert_eq!(msgs, vec![Msg::System(SystemMsg::Quit)]);
        Ok(())
    }

    #[test]
    fn test_enter_on_topic_opens_it() -> Result<()> {
        let state = state_with_bindings()?;
        let state = apply(state, key(KeyCode::Char('j')));
        let msgs = translate_raw_to_domain(key(KeyCode::Enter), &state);
        assert_eq!(
            msgs,
            vec![Msg::Nav(NavMsg::OpenTopic(
                "Climate Change Mitigation Strategies".into()
            ))]
        );
        Ok(())
    }

    #[test]
    fn test_dialog_swallows_keys() -> Result<()> {
        let mut state = state_with_bindings()?;
        state.nav.show_upgrade_dialog = true;
        assert!(translate_raw_to_domain(key(KeyCode::Char('q')), &state).is_empty());
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Esc), &state),
            vec![Msg::Nav(NavMsg::CloseDialog)]
        );
        Ok(())
    }

    #[test]
    fn test_insert_mode_edits_chat_input() -> Result<()> {
        let mut state = state_with_bindings()?;
        state.nav.update(NavMsg::OpenTopic("t".into()));
        let state = apply(state, key(KeyCode::Char('i')));
        assert_eq!(state.nav.mode, UiMode::Insert(InputTarget::Chat));

        let state = apply(state, key(KeyCode::Char('q')));
        let state = apply(state, key(KeyCode::Char('x')));
        let state = apply(state, key(KeyCode::Backspace));
        assert_eq!(state.chat.input, "q");
        assert!(!state.system.should_quit);

        let msgs = translate_raw_to_domain(key(KeyCode::Enter), &state);
        assert_eq!(msgs, vec![Msg::Chat(ChatMsg::Submit)]);
        Ok(())
    }

    #[test]
    fn test_topic_search_filters_and_opens() -> Result<()> {
        let state = state_with_bindings()?;
        let state = apply(state, key(KeyCode::Char('/')));
        assert_eq!(state.nav.mode, UiMode::Insert(InputTarget::TopicSearch));

        let state = apply(state, RawMsg::Paste("nano".into()));
        assert_eq!(state.nav.visible_topics().len(), 1);

        let state = apply(state, key(KeyCode::Enter));
        assert_eq!(state.nav.page, Page::Topic);
        assert_eq!(state.nav.current_topic, "Nanotechnology Applications");
        Ok(())
    }

    #[test]
    fn test_topic_menu_keys() -> Result<()> {
        let state = state_with_bindings()?;
        let state = apply(state, key(KeyCode::Char('t')));
        let state = apply(state, key(KeyCode::Down));
        let state = apply(state, key(KeyCode::Enter));
        assert_eq!(state.nav.topic_menu, None);
        assert_eq!(
            state.nav.current_topic,
            "Climate Change Mitigation Strategies"
        );
        Ok(())
    }

    #[test]
    fn test_source_link_jumps_to_sources() -> Result<()> {
        let mut state = state_with_bindings()?;
        state.nav.update(NavMsg::OpenTopic("t".into()));
        let source_index = state
            .nav
            .current_links()
            .iter()
            .position(|link| matches!(link, Link::Source(_)))
            .ok_or_else(|| color_eyre::eyre::eyre!("article has no source link"))?;
        state.nav.selected_link = Some(source_index);

        let state = apply(state, key(KeyCode::Enter));

        assert_eq!(state.analysis.tab, MainTab::Analysis);
        assert!(state.analysis.highlighted_source.is_some());
        assert_eq!(state.nav.focus, Pane::Analysis);
        Ok(())
    }

    #[test]
    fn test_data_keys_need_data_tab() -> Result<()> {
        let mut state = state_with_bindings()?;
        state.nav.update(NavMsg::OpenTopic("t".into()));
        assert!(translate_raw_to_domain(key(KeyCode::Char('1')), &state).is_empty());

        state.analysis.tab = MainTab::Data;
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('2')), &state),
            vec![Msg::Data(DataMsg::SortBy(SortColumn::Type))]
        );
        Ok(())
    }

    #[test]
    fn test_grow_pane_uses_focus() -> Result<()> {
        let mut state = state_with_bindings()?;
        state.nav.update(NavMsg::OpenTopic("t".into()));
        let state = apply(state, key(KeyCode::Char('>')));
        assert_eq!(state.layout.topic.widths(), &[25.0, 52.0, 23.0]);
        Ok(())
    }

    #[test]
    fn test_mouse_drag_moves_divider() -> Result<()> {
        let mut state = state_with_bindings()?;
        state.nav.update(NavMsg::OpenTopic("t".into()));
        let body_row = HEADER_HEIGHT + 2;

        // Left divider of a 100 column body sits at column 25
        let state = apply(state, mouse(MouseEventKind::Down(MouseButton::Left), 25, body_row));
        assert!(state.layout.is_dragging());

        let state = apply(state, mouse(MouseEventKind::Drag(MouseButton::Left), 35, body_row));
        assert_eq!(state.layout.topic.widths(), &[35.0, 40.0, 25.0]);

        let state = apply(state, mouse(MouseEventKind::Drag(MouseButton::Left), 0, body_row));
        assert_eq!(state.layout.topic.widths(), &[20.0, 55.0, 25.0]);

        let state = apply(state, mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));
        assert!(!state.layout.is_dragging());
        Ok(())
    }

    #[test]
    fn test_click_focuses_pane_and_opens_topic() -> Result<()> {
        let state = state_with_bindings()?;
        let first_row = HEADER_HEIGHT + 1;

        let msgs = translate_raw_to_domain(
            mouse(MouseEventKind::Down(MouseButton::Left), 5, first_row + 2),
            &state,
        );
        assert_eq!(
            msgs,
            vec![
                Msg::Nav(NavMsg::FocusPane(Pane::Topics)),
                Msg::Nav(NavMsg::OpenTopic("Artificial Intelligence Ethics".into())),
            ]
        );

        let msgs = translate_raw_to_domain(
            mouse(MouseEventKind::Down(MouseButton::Left), 90, first_row + 2),
            &state,
        );
        assert_eq!(msgs, vec![Msg::Nav(NavMsg::FocusPane(Pane::Actions))]);
        Ok(())
    }

    fn analysis_focused() -> Result<AppState> {
        let mut state = state_with_bindings()?;
        state.nav.update(NavMsg::OpenTopic("t".into()));
        state.nav.focus = Pane::Analysis;
        Ok(state)
    }

    #[test]
    fn test_graph_node_enter_opens_timeline() -> Result<()> {
        let mut state = analysis_focused()?;
        state.analysis.tab = MainTab::Analysis;

        let state = (0..5).fold(state, |state, _| apply(state, key(KeyCode::Char('j'))));
        assert_eq!(state.analysis.node_cursor, Some(4));

        let state = apply(state, key(KeyCode::Enter));
        assert_eq!(state.analysis.sub_tab, AnalysisTab::Timeline);
        Ok(())
    }

    #[test]
    fn test_zoom_keys_only_on_map() -> Result<()> {
        let mut state = analysis_focused()?;
        state.analysis.tab = MainTab::Analysis;
        assert!(translate_raw_to_domain(key(KeyCode::Char('+')), &state).is_empty());

        state.analysis.sub_tab = AnalysisTab::Map;
        let state = apply(state, key(KeyCode::Char('+')));
        let state = apply(state, key(KeyCode::Char('j')));
        assert_eq!(state.analysis.map.zoom(), 1.5);
        assert_eq!(state.analysis.map.focus(), Some(0));

        let state = apply(state, key(KeyCode::Char('-')));
        let state = apply(state, key(KeyCode::Char('-')));
        assert!(state.analysis.map.zoom() < 1.0);
        let state = apply(state, key(KeyCode::Char('0')));
        assert_eq!(state.analysis.map.zoom(), 1.0);
        assert_eq!(state.analysis.map.focus(), None);
        Ok(())
    }

    #[test]
    fn test_browser_keys() -> Result<()> {
        let mut state = analysis_focused()?;
        state.analysis.tab = MainTab::Data;
        let state = apply(state, key(KeyCode::Char('v')));
        assert_eq!(state.data.view, DataView::Browser);

        // Table-only keys are inert in the browser
        assert!(translate_raw_to_domain(key(KeyCode::Char('1')), &state).is_empty());

        let state = apply(state, key(KeyCode::Char('j')));
        let state = apply(state, key(KeyCode::Enter));
        assert_eq!(state.data.browser.column(), BrowserColumn::Folder);
        let state = apply(state, key(KeyCode::Char(' ')));
        assert!(!state.data.browser.is_checked("R3s3archLuvr777/Papers"));

        let state = apply(state, key(KeyCode::Esc));
        assert_eq!(state.data.browser.column(), BrowserColumn::Contributor);
        assert_eq!(state.data.browser.cursor(), 1);
        Ok(())
    }

    #[test]
    fn test_filter_menu_keys() -> Result<()> {
        let mut state = analysis_focused()?;
        state.analysis.tab = MainTab::Data;
        let state = apply(state, key(KeyCode::Char('v')));
        let state = apply(state, key(KeyCode::Char('f')));
        assert_eq!(state.data.filter_menu, Some(0));

        // Menu keys win over the browser while it is open
        let state = apply(state, key(KeyCode::Char('j')));
        let state = apply(state, key(KeyCode::Char(' ')));
        assert_eq!(state.data.browser.cursor(), 0);
        assert_eq!(state.data.browser.type_label(), "Audio transcript, Text, Web");

        let state = apply(state, key(KeyCode::Esc));
        assert_eq!(state.data.filter_menu, None);
        Ok(())
    }

    #[test]
    fn test_user_menu_keys() -> Result<()> {
        let state = analysis_focused()?;
        let state = apply(state, key(KeyCode::Char('p')));
        assert_eq!(state.nav.user_menu, Some(0));

        let settings = apply(state.clone(), key(KeyCode::Char('j')));
        let settings = apply(settings, key(KeyCode::Enter));
        assert!(settings.nav.show_upgrade_dialog);
        assert_eq!(settings.nav.user_menu, None);

        let state = apply(state, key(KeyCode::Char('k')));
        let state = apply(state, key(KeyCode::Enter));
        assert_eq!(state.nav.page, Page::Home);
        assert_eq!(state.system.status_message.as_deref(), Some("Logged out"));
        Ok(())
    }

    #[test]
    fn test_click_on_user_name_toggles_menu() -> Result<()> {
        let state = state_with_bindings()?;
        let state = apply(state, mouse(MouseEventKind::Down(MouseButton::Left), 95, 1));
        assert_eq!(state.nav.user_menu, Some(0));

        let state = apply(state, mouse(MouseEventKind::Down(MouseButton::Left), 5, 10));
        assert_eq!(state.nav.user_menu, None);
        assert_eq!(state.nav.page, Page::Home);
        Ok(())
    }

    #[test]
    fn test_mouse_without_known_size_is_ignored() {
        let state = AppState::default();
        assert!(translate_raw_to_domain(
            mouse(MouseEventKind::Down(MouseButton::Left), 10, 10),
            &state
        )
        .is_empty());
    }

    #[test]
    fn test_agent_reply_is_forwarded() {
        let state = AppState::default();
        assert_eq!(
            translate_raw_to_domain(RawMsg::AgentReply("hi".into()), &state),
            vec![Msg::Chat(ChatMsg::ReceiveReply("hi".into()))]
        );
    }
}
