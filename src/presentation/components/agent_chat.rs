//! Agent chat pane

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{
        chat::Sender,
        nav::{InputTarget, Pane},
    },
    presentation::{
        components::dashboard::{pane_block, wrapped_height},
        context::DashboardContext,
    },
};

const INPUT_HEIGHT: u16 = 3;

#[derive(Debug, Default)]
pub struct AgentChatComponent;

impl AgentChatComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn placeholder(ctx: &DashboardContext<'_>) -> String {
        format!("Message {}AI", ctx.current_topic())
    }

    pub fn view(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let block = pane_block(ctx, Pane::Chat, "Agent Chat");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [history, input] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(INPUT_HEIGHT)]).areas(inner);

        self.view_history(ctx, frame, history);
        self.view_input(ctx, frame, input);
    }

    fn view_history(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let chat = &ctx.state().chat;
        let mut lines: Vec<Line> = Vec::new();
        for message in &chat.messages {
            let (who, style) = match message.sender {
                Sender::User => ("You", Style::default().fg(Color::Cyan).bold()),
                Sender::Agent => ("Agent", Style::default().fg(Color::Green).bold()),
            };
            lines.push(Line::from(Span::styled(who, style)));
            lines.push(Line::from(message.text.as_str()));
            lines.push(Line::default());
        }
        if chat.is_waiting() {
            lines.push(Line::from(Span::styled(
                "Agent is typing…",
                Style::default().fg(Color::DarkGray).italic(),
            )));
        }

        // Keep the newest messages in view
        let scroll = wrapped_height(&lines, area.width).saturating_sub(area.height);
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn view_input(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let chat = &ctx.state().chat;
        let editing = ctx.state().nav.is_inserting(InputTarget::Chat);
        let border_style = if editing {
            ctx.style("focused_border", Style::default().fg(Color::Cyan))
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered().border_style(border_style);

        let text = if chat.input.is_empty() {
            Span::styled(Self::placeholder(ctx), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(chat.input.as_str())
        };
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(text).block(block), area);

        if editing {
            let offset = chat.input.chars().count() as u16;
            frame.set_cursor_position(Position::new(
                (inner.x + offset).min(inner.right().saturating_sub(1)),
                inner.y,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::AppState;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_placeholder_names_topic() {
        let mut state = AppState::default();
        state.nav.current_topic = "Nanotechnology Applications".into();
        assert_eq!(
            AgentChatComponent::placeholder(&DashboardContext::new(&state)),
            "Message Nanotechnology ApplicationsAI"
        );
    }
}
