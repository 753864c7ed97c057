use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Widget,
    },
};

use crate::domain::chronology::{TimeWindow, TimelineEvent};

const AXIS_Y: f64 = 0.5;
const TICK: f64 = 0.08;

/// Horizontal time axis with one labelled tick per event
pub struct TimelineWidget<'a> {
    events: &'a [TimelineEvent],
    window: TimeWindow,
    block: Option<Block<'a>>,
}

impl<'a> TimelineWidget<'a> {
    pub fn new(events: &'a [TimelineEvent], window: TimeWindow) -> Self {
        Self {
            events,
            window,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Event labels above and below the axis alternate so neighbours do not overlap
    fn label_y(index: usize) -> f64 {
        if index % 2 == 0 {
            AXIS_Y + 2.5 * TICK
        } else {
            AXIS_Y - 3.0 * TICK
        }
    }
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let events = self.events;
        let window = self.window;
        let mut canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-0.05, 1.05])
            .y_bounds([0.0, 1.0])
            .paint(move |ctx| {
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: AXIS_Y,
                    x2: 1.0,
                    y2: AXIS_Y,
                    color: Color::Gray,
                });
                for (index, event) in events.iter().enumerate() {
                    let x = window.fraction(event.date);
                    ctx.draw(&CanvasLine {
                        x1: x,
                        y1: AXIS_Y - TICK,
                        x2: x,
                        y2: AXIS_Y + TICK,
                        color: Color::Yellow,
                    });
                    ctx.print(
                        x,
                        Self::label_y(index),
                        Line::from(vec![
                            Span::styled(event.label.clone(), Style::default().bold()),
                            Span::raw(format!(" {}", event.date.format("%b %d"))),
                        ]),
                    );
                }
                ctx.print(0.0, 0.0, window.start.format("%Y-%m-%d").to_string());
                ctx.print(0.85, 0.0, window.end.format("%Y-%m-%d").to_string());
            });
        if let Some(block) = self.block {
            canvas = canvas.block(block);
        }
        canvas.render(area, buf);
    }
}
