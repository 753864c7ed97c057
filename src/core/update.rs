use crate::core::{
    cmd::Cmd,
    msg::{
        analysis::AnalysisMsg, data::DataMsg, nav::NavMsg, system::SystemMsg, Msg,
    },
    state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }

    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Nav(NavMsg::Logout) => {
            state.layout.end_all_drags();
            let mut commands = state.nav.update(NavMsg::Logout);
            commands.extend(
                state
                    .system
                    .update(SystemMsg::UpdateStatusMessage("Logged out".to_string())),
            );
            (state, commands)
        }

        Msg::Nav(nav_msg) => {
            // Leaving a page abandons any drag in progress
            if matches!(nav_msg, NavMsg::ShowHome | NavMsg::OpenTopic(_)) {
                state.layout.end_all_drags();
            }
            let commands = state.nav.update(nav_msg);
            (state, commands)
        }

        Msg::Layout(layout_msg) => {
            let page = state.nav.page;
            let commands = state.layout.update(layout_msg, page);
            (state, commands)
        }

        Msg::Chat(chat_msg) => {
            let commands = state.chat.update(chat_msg);
            (state, commands)
        }

        Msg::Analysis(AnalysisMsg::ShowSource(n)) if !state.analysis.has_source(n) => {
            let commands = state.system.update(SystemMsg::UpdateStatusMessage(format!(
                "Source {n} is not available"
            )));
            (state, commands)
        }

        Msg::Analysis(analysis_msg) => {
            let commands = state.analysis.update(analysis_msg);
            (state, commands)
        }

        Msg::Data(DataMsg::Upload) => {
            let mut commands = state.data.update(DataMsg::Upload);
            commands.extend(
                state
                    .system
                    .update(SystemMsg::UpdateStatusMessage("Upload clicked".to_string())),
            );
            (state, commands)
        }

        Msg::Data(data_msg) => {
            let commands = state.data.update(data_msg);
            (state, commands)
        }
    }
}
