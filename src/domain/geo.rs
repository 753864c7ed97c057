//! Locations pinned on the world map

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub longitude: f64,
    pub latitude: f64,
}

pub const LOCATIONS: [Location; 5] = [
    Location {
        name: "New York",
        longitude: -74.006,
        latitude: 40.7128,
    },
    Location {
        name: "London",
        longitude: -0.1276,
        latitude: 51.5074,
    },
    Location {
        name: "Tokyo",
        longitude: 139.6917,
        latitude: 35.6895,
    },
    Location {
        name: "Sydney",
        longitude: 151.2093,
        latitude: -33.8688,
    },
    Location {
        name: "Rio de Janeiro",
        longitude: -43.1729,
        latitude: -22.9068,
    },
];

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 8.0;
/// Factor applied per zoom step
pub const ZOOM_STEP: f64 = 1.5;

/// Visible part of the world map: a zoom factor and an optional city the
/// view is centred on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    zoom: f64,
    focus: Option<usize>,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            focus: None,
        }
    }
}

impl MapView {
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Index into [`LOCATIONS`] of the centred city
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused_location(&self) -> Option<&'static Location> {
        self.focus.and_then(|index| LOCATIONS.get(index))
    }

    /// Returns whether the zoom changed (false once the limit is reached).
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom * ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom / ZOOM_STEP)
    }

    /// Back to the whole world, no city centred.
    pub fn reset(&mut self) -> bool {
        let changed = *self != Self::default();
        *self = Self::default();
        changed
    }

    fn set_zoom(&mut self, zoom: f64) -> bool {
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let changed = (zoom - self.zoom).abs() > f64::EPSILON;
        self.zoom = zoom;
        changed
    }

    /// Centre the next (or previous) city, wrapping around the list.
    pub fn cycle_focus(&mut self, forward: bool) {
        let len = LOCATIONS.len();
        self.focus = Some(match self.focus {
            None if forward => 0,
            None => len - 1,
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
        });
    }

    fn center(&self) -> (f64, f64) {
        self.focused_location()
            .map(|location| (location.longitude, location.latitude))
            .unwrap_or((0.0, 0.0))
    }

    /// Longitude range on screen
    pub fn x_bounds(&self) -> [f64; 2] {
        let (x, _) = self.center();
        let half = 180.0 / self.zoom;
        [x - half, x + half]
    }

    /// Latitude range on screen
    pub fn y_bounds(&self) -> [f64; 2] {
        let (_, y) = self.center();
        let half = 90.0 / self.zoom;
        [y - half, y + half]
    }
}
