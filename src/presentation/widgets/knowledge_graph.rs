//! Knowledge graph drawn on a braille canvas

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Widget,
    },
};

use crate::domain::graph::{KnowledgeGraph, NodeKind};

const NODE_RADIUS: f64 = 0.015;
/// Keeps nodes on the unit square edge fully inside the canvas
const MARGIN: f64 = 0.05;

pub fn node_color(kind: NodeKind) -> Color {
    match kind {
        NodeKind::Hub => Color::Cyan,
        NodeKind::Event => Color::Yellow,
        NodeKind::Place => Color::Green,
    }
}

pub struct KnowledgeGraphWidget<'a> {
    graph: &'a KnowledgeGraph,
    positions: &'a [(f64, f64)],
    selected: Option<usize>,
    block: Option<Block<'a>>,
}

impl<'a> KnowledgeGraphWidget<'a> {
    pub fn new(graph: &'a KnowledgeGraph, positions: &'a [(f64, f64)]) -> Self {
        Self {
            graph,
            positions,
            selected: None,
            block: None,
        }
    }

    /// Ring the node at `index` and name it in the corner
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for KnowledgeGraphWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let graph = self.graph;
        let positions = self.positions;
        let selected = self
            .selected
            .and_then(|index| graph.nodes.get(index).zip(positions.get(index)));
        let mut canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-MARGIN, 1.0 + MARGIN])
            .y_bounds([-MARGIN, 1.0 + MARGIN])
            .paint(move |ctx| {
                for link in &graph.links {
                    let (Some(&(x1, y1)), Some(&(x2, y2))) =
                        (positions.get(link.source), positions.get(link.target))
                    else {
                        continue;
                    };
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: Color::DarkGray,
                    });
                }
                ctx.layer();
                for (node, &(x, y)) in graph.nodes.iter().zip(positions) {
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: NODE_RADIUS,
                        color: node_color(node.kind),
                    });
                }
                for (node, &(x, y)) in graph.nodes.iter().zip(positions) {
                    if node.kind == NodeKind::Hub {
                        ctx.print(
                            x,
                            y,
                            Span::styled(node.id.to_string(), Style::default().bold()),
                        );
                    }
                }
                if let Some((node, &(x, y))) = selected {
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: NODE_RADIUS * 2.5,
                        color: Color::White,
                    });
                    // Caption in the top-left corner
                    ctx.print(
                        -MARGIN,
                        1.0 + MARGIN,
                        Span::styled(
                            format!("Node {} ({})", node.id, node.kind),
                            Style::default().fg(Color::White).bold(),
                        ),
                    );
                }
            });
        if let Some(block) = self.block {
            canvas = canvas.block(block);
        }
        canvas.render(area, buf);
    }
}
