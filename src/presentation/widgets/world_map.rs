use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Map, MapResolution, Points},
        Block, Widget,
    },
};

use crate::domain::geo::{Location, MapView};

/// World outline with pinned, labelled cities
pub struct WorldMapWidget<'a> {
    locations: &'a [Location],
    view: MapView,
    block: Option<Block<'a>>,
}

impl<'a> WorldMapWidget<'a> {
    pub fn new(locations: &'a [Location]) -> Self {
        Self {
            locations,
            view: MapView::default(),
            block: None,
        }
    }

    /// Zoom and centre to draw
    pub fn view(mut self, view: MapView) -> Self {
        self.view = view;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for WorldMapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let locations = self.locations;
        let focus = self.view.focus();
        let mut canvas = Canvas::default()
            .x_bounds(self.view.x_bounds())
            .y_bounds(self.view.y_bounds())
            .paint(move |ctx| {
                ctx.draw(&Map {
                    color: Color::DarkGray,
                    resolution: MapResolution::High,
                });
                ctx.layer();
                let coords: Vec<(f64, f64)> = locations
                    .iter()
                    .map(|location| (location.longitude, location.latitude))
                    .collect();
                ctx.draw(&Points {
                    coords: &coords,
                    color: Color::Red,
                });
                for (index, location) in locations.iter().enumerate() {
                    let style = if focus == Some(index) {
                        Style::default().fg(Color::Yellow).bold()
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ctx.print(
                        location.longitude,
                        location.latitude,
                        Span::styled(location.name, style),
                    );
                }
            });
        if let Some(block) = self.block {
            canvas = canvas.block(block);
        }
        canvas.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geo::LOCATIONS;

    #[test]
    fn test_map_labels_cities() {
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        WorldMapWidget::new(&LOCATIONS).render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Tokyo"));
        assert!(text.contains("London"));
    }

    #[test]
    fn test_zoomed_view_drops_far_cities() {
        let mut view = MapView::default();
        // Centre on London and zoom in close
        view.cycle_focus(true);
        view.cycle_focus(true);
        for _ in 0..6 {
            view.zoom_in();
        }
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        WorldMapWidget::new(&LOCATIONS).view(view).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("London"));
        assert!(!text.contains("Sydney"));
    }
}
