//! Article pane with followable links and source references

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::nav::Pane,
    domain::article::{find_article, parse_inline, Article, Segment},
    presentation::{
        components::dashboard::{pane_block, wrapped_height},
        context::DashboardContext,
    },
};

#[derive(Debug, Default)]
pub struct ArticleViewerComponent;

/// Styled article text plus the line holding the selected link
struct ArticleText<'a> {
    lines: Vec<Line<'a>>,
    selected_line: Option<usize>,
}

impl ArticleViewerComponent {
    pub fn new() -> Self {
        Self
    }

    fn article_text(
        ctx: &DashboardContext<'_>,
        article: &'static Article,
    ) -> ArticleText<'static> {
        let link_style = ctx.style("link", Style::default().fg(Color::Blue).underlined());
        let selected_style = ctx.style("link_selected", Style::default().reversed());
        let source_style = ctx.style("source_ref", Style::default().fg(Color::Magenta));
        let selected = ctx.state().nav.selected_link;

        let mut lines = vec![
            Line::from(article.title).bold().fg(Color::White),
            Line::from(Span::styled(
                article.description,
                Style::default().italic().fg(Color::Gray),
            )),
        ];
        let mut selected_line = None;
        let mut link_index = 0;

        for section in article.sections {
            lines.push(Line::default());
            lines.push(Line::from(section.heading).bold());

            let mut spans = Vec::new();
            for segment in parse_inline(section.content) {
                let is_link = segment.link().is_some();
                let is_selected = is_link && selected == Some(link_index);
                let mut span = match segment {
                    Segment::Text(text) => Span::raw(text),
                    Segment::ArticleLink { label, .. } => Span::styled(label, link_style),
                    Segment::SourceRef(n) => Span::styled(format!("[{n}]"), source_style),
                };
                if is_selected {
                    selected_line = Some(lines.len());
                    span = span.patch_style(selected_style);
                }
                spans.push(span);
                if is_link {
                    link_index += 1;
                }
            }
            lines.push(Line::from(spans));
        }

        ArticleText {
            lines,
            selected_line,
        }
    }

    pub fn view(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let block = pane_block(ctx, Pane::Article, "Article");

        let Some(article) = find_article(ctx.current_article()) else {
            let missing = Paragraph::new(format!("Article not found: {}", ctx.current_article()))
                .style(Style::default().fg(Color::Red))
                .block(block);
            frame.render_widget(missing, area);
            return;
        };

        let inner = block.inner(area);
        let text = Self::article_text(ctx, article);
        let scroll = text
            .selected_line
            .map(|line| wrapped_height(&text.lines[..=line], inner.width))
            .map(|rows| rows.saturating_sub(inner.height))
            .unwrap_or(0);

        let paragraph = Paragraph::new(text.lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
