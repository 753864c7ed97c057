use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{core::state::AppState, infrastructure::tui, presentation::components::Components};

/// Draws the whole dashboard for a given state
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(
        &self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| {
            self.components.render(f, state);
        };
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            msg::{data::DataMsg, nav::NavMsg},
            state::analysis::MainTab,
        },
        infrastructure::tui::test::TestTui,
    };

    async fn render_state(state: &AppState) -> Result<Arc<Mutex<TestTui>>> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(120, 36)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = test_tui.clone();
        Renderer::new().render(&tui, state).await?;
        Ok(test_tui)
    }

    #[tokio::test]
    async fn renderer_draws_home_page() -> Result<()> {
        let state = AppState::default();
        let tui = render_state(&state).await?;
        let tui = tui.lock().await;

        assert_eq!(tui.draw_count(), 1);
        assert!(tui.screen_contains("Gnosi.ai"));
        assert!(tui.screen_contains("Select Topic"));
        assert!(tui.screen_contains("Quantum Computing Advancements"));
        assert!(tui.screen_contains("Upgrade to Pro"));
        assert!(tui.screen_contains("BigHank9000"));
        Ok(())
    }

    #[tokio::test]
    async fn renderer_draws_topic_page() -> Result<()> {
        let mut state = AppState::default();
        state.nav.update(NavMsg::OpenTopic("Space Exploration".into()));
        let tui = render_state(&state).await?;
        let tui = tui.lock().await;

        assert!(tui.screen_contains("Selected: Space Exploration"));
        assert!(tui.screen_contains("Agent Chat"));
        assert!(tui.screen_contains("Dolor Sit Amet"));
        assert!(tui.screen_contains("Topic Home"));
        assert!(tui.screen_contains("25% | 50% | 25%"));
        Ok(())
    }

    #[tokio::test]
    async fn renderer_draws_data_tab_and_dialog() -> Result<()> {
        let mut state = AppState::default();
        state.nav.update(NavMsg::OpenTopic("Space".into()));
        state.analysis.tab = MainTab::Data;
        state.nav.show_upgrade_dialog = true;
        let tui = render_state(&state).await?;
        let tui = tui.lock().await;

        assert!(tui.screen_contains("Filter files"));
        assert!(tui.screen_contains("Coming Soon!"));
        Ok(())
    }

    #[tokio::test]
    async fn renderer_draws_browser_and_menus() -> Result<()> {
        let mut state = AppState::default();
        state.nav.update(NavMsg::OpenTopic("Space".into()));
        state.analysis.tab = MainTab::Data;
        state.data.update(DataMsg::ToggleView);
        state.data.update(DataMsg::OpenFilterMenu);
        state.nav.update(NavMsg::OpenUserMenu);
        let tui = render_state(&state).await?;
        let tui = tui.lock().await;

        assert!(tui.screen_contains("Type: All"));
        assert!(tui.screen_contains("Filters"));
        assert!(tui.screen_contains("Account"));
        assert!(tui.screen_contains("Logout"));
        Ok(())
    }

    #[tokio::test]
    async fn renderer_reports_missing_article() -> Result<()> {
        let mut state = AppState::default();
        state.nav.update(NavMsg::OpenTopic("Space".into()));
        state.nav.current_article = "Nope".into();
        let tui = render_state(&state).await?;

        assert!(tui.lock().await.screen_contains("Article not found: Nope"));
        Ok(())
    }
}
