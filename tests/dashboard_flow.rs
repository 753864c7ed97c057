use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gnosi::{
    core::{
        raw_msg::RawMsg,
        state::{
            analysis::{AnalysisTab, MainTab},
            data::DataView,
            nav::{InputTarget, Page, Pane, UiMode},
            AppState,
        },
    },
    domain::{
        browser::BrowserColumn,
        files::{FileType, SortColumn, SortDirection},
    },
    infrastructure::config::Config,
    integration::runtime::Runtime,
};
use pretty_assertions::assert_eq;

fn runtime() -> Result<Runtime> {
    let mut runtime = Runtime::new(AppState::new(Config::embedded()?)?);
    runtime.send_raw_msg(RawMsg::Resize(120, 40));
    runtime.process_all_messages();
    Ok(runtime)
}

fn press(runtime: &mut Runtime, keys: &str) {
    for c in keys.chars() {
        let code = match c {
            '\n' => KeyCode::Enter,
            '\t' => KeyCode::Tab,
            '\x1b' => KeyCode::Esc,
            c => KeyCode::Char(c),
        };
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)));
        runtime.process_all_messages();
    }
}

#[test]
fn test_article_links_lead_to_articles_and_sources() -> Result<()> {
    let mut runtime = runtime()?;

    // Open the third topic
    press(&mut runtime, "jj\n");
    let state = runtime.state();
    assert_eq!(state.nav.page, Page::Topic);
    assert_eq!(state.nav.current_topic, "Artificial Intelligence Ethics");
    assert_eq!(state.nav.current_article, "Dolor Sit Amet");
    assert_eq!(state.nav.focus, Pane::Article);

    // First link is the cross reference to the second article
    press(&mut runtime, "j\n");
    assert_eq!(runtime.state().nav.current_article, "Eiusmod Tempor Incididunt");

    // Its first link is source 1
    press(&mut runtime, "j\n");
    let state = runtime.state();
    assert_eq!(state.analysis.tab, MainTab::Analysis);
    assert_eq!(state.analysis.sub_tab, AnalysisTab::Sources);
    assert_eq!(state.analysis.highlighted_source, Some(1));
    assert_eq!(state.nav.focus, Pane::Analysis);
    Ok(())
}

#[test]
fn test_missing_source_reports_status() -> Result<()> {
    let mut runtime = runtime()?;
    press(&mut runtime, "\n");

    // Last link of the default article cites source 7, only five exist
    press(&mut runtime, "k\n");
    let state = runtime.state();
    assert_eq!(
        state.system.status_message.as_deref(),
        Some("Source 7 is not available")
    );
    assert_eq!(state.analysis.tab, MainTab::Home);
    assert_eq!(state.nav.focus, Pane::Article);

    // Esc clears the message
    press(&mut runtime, "\x1b");
    assert_eq!(runtime.state().system.status_message, None);
    Ok(())
}

#[test]
fn test_data_tab_sort_filter_select_delete() -> Result<()> {
    let mut runtime = runtime()?;
    press(&mut runtime, "\n");
    // Analysis pane, Data tab
    press(&mut runtime, "\t]]");
    assert_eq!(runtime.state().nav.focus, Pane::Analysis);
    assert_eq!(runtime.state().analysis.tab, MainTab::Data);

    press(&mut runtime, "1");
    let table = &runtime.state().data.table;
    assert_eq!(table.sort_column(), SortColumn::Name);
    assert_eq!(table.direction(), SortDirection::Descending);

    press(&mut runtime, "a");
    assert!(runtime.state().data.table.all_visible_selected());
    press(&mut runtime, "a");
    assert!(runtime.state().data.table.selected().is_empty());

    // Filter, then select the only match and delete it
    press(&mut runtime, "/");
    assert_eq!(runtime.state().nav.mode, UiMode::Insert(InputTarget::FileFilter));
    runtime.send_raw_msg(RawMsg::Paste("pdf".into()));
    runtime.process_all_messages();
    press(&mut runtime, "\n");
    assert_eq!(runtime.state().nav.mode, UiMode::Normal);
    assert_eq!(runtime.state().data.table.visible().len(), 1);

    let total = runtime.state().data.table.len();
    press(&mut runtime, " d");
    assert_eq!(runtime.state().data.table.len(), total - 1);
    assert!(runtime.state().data.table.selected().is_empty());

    press(&mut runtime, "u");
    assert_eq!(
        runtime.state().system.status_message.as_deref(),
        Some("Upload clicked")
    );
    Ok(())
}

#[test]
fn test_chat_compose_and_submit() -> Result<()> {
    let mut runtime = runtime()?;
    press(&mut runtime, "\ni");
    assert_eq!(runtime.state().nav.focus, Pane::Chat);
    assert_eq!(runtime.state().nav.mode, UiMode::Insert(InputTarget::Chat));

    let before = runtime.state().chat.messages.len();
    press(&mut runtime, "hello\n");
    let chat = &runtime.state().chat;
    assert_eq!(chat.messages.len(), before + 1);
    assert_eq!(chat.input, "");
    assert!(chat.is_waiting());

    // Whitespace-only input is ignored
    press(&mut runtime, "  \n");
    assert_eq!(runtime.state().chat.messages.len(), before + 1);
    Ok(())
}

#[test]
fn test_go_home_keeps_pane_widths() -> Result<()> {
    let mut runtime = runtime()?;
    press(&mut runtime, "\n>>");
    let widths = runtime.state().layout.topic.widths().to_vec();
    assert_eq!(widths, vec![25.0, 54.0, 21.0]);

    press(&mut runtime, "h");
    assert_eq!(runtime.state().nav.page, Page::Home);
    press(&mut runtime, "\n");
    assert_eq!(runtime.state().layout.topic.widths(), widths.as_slice());
    Ok(())
}

#[test]
fn test_graph_map_and_file_browser_flow() -> Result<()> {
    let mut runtime = runtime()?;
    press(&mut runtime, "\n\t]");
    assert_eq!(runtime.state().analysis.tab, MainTab::Analysis);

    // Node 5 is an event and opens the timeline
    press(&mut runtime, "jjjjj\n");
    assert_eq!(runtime.state().analysis.sub_tab, AnalysisTab::Timeline);

    press(&mut runtime, "}++j");
    let map = runtime.state().analysis.map;
    assert_eq!(map.zoom(), 2.25);
    assert_eq!(map.focused_location().map(|l| l.name), Some("New York"));
    press(&mut runtime, "0");
    assert_eq!(runtime.state().analysis.map.zoom(), 1.0);

    // Data tab as a browser, down to the files of the third contributor
    press(&mut runtime, "]v");
    assert_eq!(runtime.state().data.view, DataView::Browser);
    press(&mut runtime, "jj\n\n");
    let browser = &runtime.state().data.browser;
    assert_eq!(browser.column(), BrowserColumn::File);
    assert!(browser.is_checked("NotVeryTrustworthy/Misc/Notes"));

    // Filtering out text files greys the note and locks its checkbox
    press(&mut runtime, "fjj \x1b");
    assert_eq!(runtime.state().data.filter_menu, None);
    assert!(!runtime.state().data.browser.type_selected(FileType::Text));
    press(&mut runtime, " ");
    let browser = &runtime.state().data.browser;
    assert!(browser.file_rows()[0].greyed_out);
    assert!(browser.is_checked("NotVeryTrustworthy/Misc/Notes"));
    Ok(())
}

#[test]
fn test_user_menu_logout() -> Result<()> {
    let mut runtime = runtime()?;
    press(&mut runtime, "\np");
    assert_eq!(runtime.state().nav.user_menu, Some(0));

    press(&mut runtime, "jj\n");
    let state = runtime.state();
    assert_eq!(state.nav.page, Page::Home);
    assert_eq!(state.nav.user_menu, None);
    assert_eq!(state.system.status_message.as_deref(), Some("Logged out"));
    Ok(())
}
