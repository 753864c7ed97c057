//! Analysis pane: home, analysis sub-tabs and the data table

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::{
        analysis::{AnalysisTab, MainTab},
        nav::Pane,
    },
    domain::geo::LOCATIONS,
    presentation::{
        components::{dashboard::pane_block, data_panel::DataPanelComponent},
        context::DashboardContext,
        widgets::{
            knowledge_graph::KnowledgeGraphWidget, timeline::TimelineWidget,
            world_map::WorldMapWidget,
        },
    },
};

#[derive(Debug, Default)]
pub struct AnalysisPanelComponent {
    data: DataPanelComponent,
}

fn tab_bar<'a, T: IntoEnumIterator + PartialEq + ToString>(selected: T) -> Tabs<'a> {
    let titles: Vec<String> = T::iter().map(|tab| tab.to_string()).collect();
    let index = T::iter().position(|tab| tab == selected);
    Tabs::new(titles)
        .select(index)
        .highlight_style(Style::default().reversed())
        .divider("|")
}

impl AnalysisPanelComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let block = pane_block(ctx, Pane::Analysis, "Analysis");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let analysis = &ctx.state().analysis;
        let [tabs, content] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        frame.render_widget(tab_bar(analysis.tab), tabs);

        match analysis.tab {
            MainTab::Home => self.view_home(ctx, frame, content),
            MainTab::Analysis => self.view_analysis(ctx, frame, content),
            MainTab::Data => self.data.view(ctx, frame, content),
        }
    }

    fn view_home(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(ctx.current_topic().to_string()).bold(),
            Line::from("Topic Home").fg(Color::Gray),
            Line::default(),
            Line::from(format!(
                "Welcome to the {} topic home. Explore the analysis tabs or open the data \
                 files behind this topic.",
                ctx.current_topic()
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().bold()),
                Span::raw(" Upgrade to Pro for custom topics"),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn view_analysis(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let analysis = &ctx.state().analysis;
        let [tabs, content] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        frame.render_widget(tab_bar(analysis.sub_tab), tabs);

        let [body, hints] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(content);
        match analysis.sub_tab {
            AnalysisTab::KnowledgeGraph => {
                frame.render_widget(
                    KnowledgeGraphWidget::new(&analysis.graph, &analysis.positions)
                        .selected(analysis.node_cursor),
                    body,
                );
                Self::view_hints(frame, hints, "j/k node · enter open event/place");
            }
            AnalysisTab::Timeline => frame.render_widget(
                TimelineWidget::new(&analysis.events, analysis.window),
                content,
            ),
            AnalysisTab::Map => {
                frame.render_widget(WorldMapWidget::new(&LOCATIONS).view(analysis.map), body);
                let zoom = format!(
                    "{:.2}x · +/- zoom · 0 reset · j/k city",
                    analysis.map.zoom()
                );
                Self::view_hints(frame, hints, &zoom);
            }
            AnalysisTab::Sources => self.view_sources(ctx, frame, content),
        }
    }

    fn view_hints(frame: &mut Frame, area: Rect, text: &str) {
        frame.render_widget(
            Paragraph::new(Line::from(text.to_string()).fg(Color::DarkGray)),
            area,
        );
    }

    fn view_sources(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let analysis = &ctx.state().analysis;
        let highlight = ctx.style("highlight", Style::default().reversed());
        let mut lines = Vec::new();
        for (index, source) in analysis.sources.iter().enumerate() {
            let number = index as u32 + 1;
            let line = Line::from(vec![
                Span::styled(format!("[{number}] "), Style::default().bold()),
                Span::raw(source.as_str()),
            ]);
            if analysis.highlighted_source == Some(number) {
                lines.push(line.style(highlight));
            } else {
                lines.push(line);
            }
            lines.push(Line::default());
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_bar_selects_current() {
        let tabs = tab_bar(MainTab::Data);
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        tabs.render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Home"));
        assert!(text.contains("Data"));
    }
}
