//! Resizable pane row
//!
//! A [`PaneLayout`] is a row of two or three panes whose percentage widths
//! always add up to 100. Dragging a divider moves the boundary between the two
//! panes it separates. The right-hand neighbour gives up exactly what the
//! dragged pane gains, so clamping one side never makes the total drift.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Total width of a pane row, in percent.
pub const TOTAL_PERCENT: f64 = 100.0;

/// Tolerance used when comparing widths produced by floating point arithmetic.
pub const WIDTH_EPSILON: f64 = 1e-9;

/// Tolerance accepted for user supplied widths (config files are hand written).
const INPUT_EPSILON: f64 = 1e-6;

pub const MIN_PANES: usize = 2;
pub const MAX_PANES: usize = 3;

/// Inclusive `[min, max]` bound on a pane width, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaneBounds {
    pub min: f64,
    pub max: f64,
}

impl PaneBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, width: f64) -> bool {
        width >= self.min - INPUT_EPSILON && width <= self.max + INPUT_EPSILON
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min >= 0.0
            && self.max <= TOTAL_PERCENT
            && self.min <= self.max
    }
}

/// Which divider, if any, is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        divider: usize,
    },
}

impl DragState {
    pub fn active_divider(&self) -> Option<usize> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { divider } => Some(*divider),
        }
    }
}

/// Reasons a pane row cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum PaneLayoutError {
    PaneCount { count: usize },
    BoundsCount { widths: usize, bounds: usize },
    InvalidBounds { pane: usize, min: f64, max: f64 },
    WidthOutOfBounds { pane: usize, width: f64, min: f64, max: f64 },
    TotalMismatch { total: f64 },
}

impl fmt::Display for PaneLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaneCount { count } => {
                write!(f, "a pane row needs {MIN_PANES} to {MAX_PANES} panes, got {count}")
            }
            Self::BoundsCount { widths, bounds } => {
                write!(f, "{widths} pane widths but {bounds} pane bounds")
            }
            Self::InvalidBounds { pane, min, max } => {
                write!(f, "pane {pane} has invalid bounds [{min}, {max}]")
            }
            Self::WidthOutOfBounds {
                pane,
                width,
                min,
                max,
            } => write!(f, "pane {pane} width {width} is outside [{min}, {max}]"),
            Self::TotalMismatch { total } => {
                write!(f, "pane widths add up to {total}, expected {TOTAL_PERCENT}")
            }
        }
    }
}

impl std::error::Error for PaneLayoutError {}

/// Widths, bounds and drag state of one row of panes.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneLayout {
    widths: Vec<f64>,
    bounds: Vec<PaneBounds>,
    drag: DragState,
}

impl PaneLayout {
    pub fn new(widths: Vec<f64>, bounds: Vec<PaneBounds>) -> Result<Self, PaneLayoutError> {
        if !(MIN_PANES..=MAX_PANES).contains(&widths.len()) {
            return Err(PaneLayoutError::PaneCount {
                count: widths.len(),
            });
        }
        if widths.len() != bounds.len() {
            return Err(PaneLayoutError::BoundsCount {
                widths: widths.len(),
                bounds: bounds.len(),
            });
        }
        for (pane, (width, bound)) in widths.iter().zip(&bounds).enumerate() {
            if !bound.is_valid() {
                return Err(PaneLayoutError::InvalidBounds {
                    pane,
                    min: bound.min,
                    max: bound.max,
                });
            }
            if !width.is_finite() || !bound.contains(*width) {
                return Err(PaneLayoutError::WidthOutOfBounds {
                    pane,
                    width: *width,
                    min: bound.min,
                    max: bound.max,
                });
            }
        }
        let total: f64 = widths.iter().sum();
        if (total - TOTAL_PERCENT).abs() > INPUT_EPSILON {
            return Err(PaneLayoutError::TotalMismatch { total });
        }

        Ok(Self {
            widths,
            bounds,
            drag: DragState::Idle,
        })
    }

    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    pub fn width(&self, pane: usize) -> Option<f64> {
        self.widths.get(pane).copied()
    }

    pub fn bounds(&self) -> &[PaneBounds] {
        &self.bounds
    }

    pub fn pane_count(&self) -> usize {
        self.widths.len()
    }

    pub fn divider_count(&self) -> usize {
        self.widths.len() - 1
    }

    pub fn total(&self) -> f64 {
        self.widths.iter().sum()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragState::Idle
    }

    /// Position of a divider measured from the left edge, in percent.
    pub fn divider_position(&self, divider: usize) -> Option<f64> {
        if divider >= self.divider_count() {
            return None;
        }
        Some(self.widths[..=divider].iter().sum())
    }

    /// Start dragging `divider`. Unknown dividers leave the row idle.
    pub fn begin_drag(&mut self, divider: usize) {
        if divider < self.divider_count() {
            self.drag = DragState::Dragging { divider };
        } else {
            log::debug!(
                "ignoring drag on divider {divider}, row has {}",
                self.divider_count()
            );
        }
    }

    /// Move the active divider towards `pointer_x` within a container of
    /// `container_width` (any unit, as long as both agree).
    ///
    /// Returns `true` when a width changed. Idle rows and degenerate inputs
    /// are no-ops.
    pub fn update_drag(&mut self, pointer_x: f64, container_width: f64) -> bool {
        let DragState::Dragging { divider } = self.drag else {
            return false;
        };
        if !pointer_x.is_finite() || !container_width.is_finite() || container_width <= 0.0 {
            return false;
        }
        let position = pointer_x * TOTAL_PERCENT / container_width;
        self.move_divider_to(divider, position)
    }

    /// Stop dragging. Calling this while idle does nothing.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Shift a divider by `delta` percent with the same clamp as a drag.
    ///
    /// The drag state is left alone, so a mouse drag in progress carries on.
    pub fn nudge_divider(&mut self, divider: usize, delta: f64) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let Some(position) = self.divider_position(divider) else {
            return false;
        };
        self.move_divider_to(divider, position + delta)
    }

    fn move_divider_to(&mut self, divider: usize, position: f64) -> bool {
        let (left, right) = (divider, divider + 1);
        let offset: f64 = self.widths[..left].iter().sum();
        let pair = self.widths[left] + self.widths[right];

        // The left pane must respect its own bounds and leave the right pane
        // inside its bounds too.
        let lo = self.bounds[left].min.max(pair - self.bounds[right].max);
        let hi = self.bounds[left].max.min(pair - self.bounds[right].min);
        if lo > hi {
            return false;
        }

        let new_left = (position - offset).clamp(lo, hi);
        let applied = new_left - self.widths[left];
        if applied == 0.0 {
            return false;
        }
        self.widths[left] = new_left;
        self.widths[right] -= applied;
        true
    }

    /// Terminal column of every divider inside a row `width` columns wide.
    pub fn divider_columns(&self, width: u16) -> Vec<u16> {
        let last = width.saturating_sub(1);
        (0..self.divider_count())
            .filter_map(|divider| self.divider_position(divider))
            .map(|position| {
                let column = (position / TOTAL_PERCENT * f64::from(width)).round();
                (column.max(0.0) as u16).min(last)
            })
            .collect()
    }

    /// `(start, len)` column span of every pane. Dividers sit between spans.
    pub fn column_spans(&self, width: u16) -> Vec<(u16, u16)> {
        let dividers = self.divider_columns(width);
        let mut spans = Vec::with_capacity(self.pane_count());
        let mut start = 0u16;
        for pane in 0..self.pane_count() {
            let end = dividers.get(pane).copied().unwrap_or(width);
            spans.push((start, end.saturating_sub(start)));
            start = end.saturating_add(1).min(width);
        }
        spans
    }

    /// Divider drawn on `column`. Pane columns never count as a hit.
    pub fn hit_divider(&self, column: u16, width: u16) -> Option<usize> {
        self.divider_columns(width)
            .iter()
            .position(|c| *c == column)
    }

    /// Pane that owns `column`, if the column is not a divider.
    pub fn pane_at(&self, column: u16, width: u16) -> Option<usize> {
        self.column_spans(width)
            .iter()
            .position(|(start, len)| column >= *start && column < start.saturating_add(*len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < WIDTH_EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_invariants(layout: &PaneLayout) {
        assert_close(layout.total(), TOTAL_PERCENT);
        for (width, bound) in layout.widths().iter().zip(layout.bounds()) {
            assert!(
                *width >= bound.min - WIDTH_EPSILON && *width <= bound.max + WIDTH_EPSILON,
                "width {width} outside [{}, {}]",
                bound.min,
                bound.max
            );
        }
    }

    fn two_panes() -> PaneLayout {
        PaneLayout::new(
            vec![30.0, 70.0],
            vec![PaneBounds::new(20.0, 40.0), PaneBounds::new(60.0, 80.0)],
        )
        .expect("valid two pane layout")
    }

    fn three_panes() -> PaneLayout {
        PaneLayout::new(
            vec![25.0, 50.0, 25.0],
            vec![
                PaneBounds::new(20.0, 40.0),
                PaneBounds::new(30.0, 60.0),
                PaneBounds::new(20.0, 40.0),
            ],
        )
        .expect("valid three pane layout")
    }

    #[test]
    fn test_left_pane_clamps_to_min_and_neighbour_absorbs() {
        let mut layout = two_panes();
        layout.begin_drag(0);
        assert!(layout.update_drag(10.0, 100.0));

        assert_close(layout.widths()[0], 20.0);
        assert_close(layout.widths()[1], 80.0);
        assert_invariants(&layout);
    }

    #[test]
    fn test_middle_pane_absorbs_left_divider_drag() {
        let mut layout = three_panes();
        layout.begin_drag(0);
        layout.update_drag(35.0, 100.0);

        assert_close(layout.widths()[0], 35.0);
        assert_close(layout.widths()[1], 40.0);
        assert_close(layout.widths()[2], 25.0);
    }

    #[test]
    fn test_right_divider_leaves_first_pane_untouched() {
        let mut layout = three_panes();
        layout.begin_drag(1);
        layout.update_drag(70.0, 100.0);

        assert_close(layout.widths()[0], 25.0);
        assert_close(layout.widths()[1], 45.0);
        assert_close(layout.widths()[2], 30.0);
        assert_invariants(&layout);
    }

    #[test]
    fn test_neighbour_bounds_limit_the_drag() {
        // Middle pane may not drop under 30, so the left pane stops at 45.
        let mut layout = PaneLayout::new(
            vec![25.0, 50.0, 25.0],
            vec![
                PaneBounds::new(20.0, 60.0),
                PaneBounds::new(30.0, 60.0),
                PaneBounds::new(20.0, 40.0),
            ],
        )
        .expect("valid layout");
        layout.begin_drag(0);
        layout.update_drag(58.0, 100.0);

        assert_close(layout.widths()[0], 45.0);
        assert_close(layout.widths()[1], 30.0);
        assert_invariants(&layout);
    }

    #[test]
    fn test_pointer_in_columns_is_scaled_to_percent() {
        let mut layout = three_panes();
        layout.begin_drag(0);
        layout.update_drag(60.0, 200.0);

        assert_close(layout.widths()[0], 30.0);
        assert_close(layout.widths()[1], 45.0);
    }

    #[test]
    fn test_update_without_begin_is_noop() {
        let mut layout = three_panes();
        let before = layout.clone();

        assert!(!layout.update_drag(35.0, 100.0));
        assert_eq!(layout, before);
    }

    #[test]
    fn test_end_drag_is_idempotent_and_stops_updates() {
        let mut layout = three_panes();
        layout.begin_drag(0);
        layout.update_drag(30.0, 100.0);
        layout.end_drag();
        layout.end_drag();
        let settled = layout.clone();

        assert!(!layout.update_drag(38.0, 100.0));
        assert_eq!(layout, settled);
        assert_eq!(layout.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_begin_drag_out_of_range_stays_idle() {
        let mut layout = two_panes();
        layout.begin_drag(1);
        assert!(!layout.is_dragging());
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(50.0, 0.0)]
    #[case(50.0, -10.0)]
    #[case(f64::NAN, 100.0)]
    #[case(50.0, f64::INFINITY)]
    fn test_degenerate_pointer_input_is_ignored(#[case] pointer: f64, #[case] container: f64) {
        let mut layout = three_panes();
        layout.begin_drag(0);
        assert!(!layout.update_drag(pointer, container));
        assert_eq!(layout.widths(), &[25.0, 50.0, 25.0]);
    }

    #[test]
    fn test_invariants_hold_for_every_pointer_position() {
        for divider in 0..2 {
            let mut layout = three_panes();
            layout.begin_drag(divider);
            for step in -50..=250 {
                layout.update_drag(f64::from(step) * 0.5, 100.0);
                assert_invariants(&layout);
            }
            layout.end_drag();
        }

        let mut layout = two_panes();
        layout.begin_drag(0);
        for column in 0..=137 {
            layout.update_drag(f64::from(column), 137.0);
            assert_invariants(&layout);
        }
    }

    #[test]
    fn test_nudge_keeps_row_idle() {
        let mut layout = three_panes();
        assert!(layout.nudge_divider(0, 5.0));
        assert!(!layout.is_dragging());
        assert_close(layout.widths()[0], 30.0);
        assert_close(layout.widths()[1], 45.0);

        // Already at the lower bound
        let mut layout = two_panes();
        layout.nudge_divider(0, -10.0);
        assert!(!layout.nudge_divider(0, -1.0));
        assert_close(layout.widths()[0], 20.0);
    }

    #[test]
    fn test_nudge_during_drag_keeps_the_drag() {
        let mut layout = three_panes();
        layout.begin_drag(0);
        assert!(layout.update_drag(30.0, 100.0));

        assert!(layout.nudge_divider(1, 2.0));
        assert_eq!(layout.drag_state(), DragState::Dragging { divider: 0 });
        assert_close(layout.widths()[2], 23.0);

        assert!(layout.update_drag(35.0, 100.0));
        assert_close(layout.widths()[0], 35.0);
        assert_close(layout.widths()[1], 42.0);
        assert_close(layout.widths()[2], 23.0);
        assert_invariants(&layout);
    }

    #[rstest]
    #[case(vec![100.0], vec![PaneBounds::new(0.0, 100.0)])]
    #[case(vec![25.0, 25.0, 25.0, 25.0], vec![PaneBounds::new(0.0, 100.0); 4])]
    fn test_rejects_wrong_pane_count(#[case] widths: Vec<f64>, #[case] bounds: Vec<PaneBounds>) {
        assert!(matches!(
            PaneLayout::new(widths, bounds),
            Err(PaneLayoutError::PaneCount { .. })
        ));
    }

    #[test]
    fn test_rejects_inconsistent_configuration() {
        let bounds = vec![PaneBounds::new(20.0, 40.0), PaneBounds::new(60.0, 80.0)];
        assert!(matches!(
            PaneLayout::new(vec![30.0, 60.0], bounds.clone()),
            Err(PaneLayoutError::TotalMismatch { .. })
        ));
        assert!(matches!(
            PaneLayout::new(vec![50.0, 50.0], bounds.clone()),
            Err(PaneLayoutError::WidthOutOfBounds { pane: 0, .. })
        ));
        assert!(matches!(
            PaneLayout::new(vec![30.0, 70.0], vec![bounds[0]]),
            Err(PaneLayoutError::BoundsCount { .. })
        ));
        assert!(matches!(
            PaneLayout::new(
                vec![30.0, 70.0],
                vec![PaneBounds::new(40.0, 20.0), bounds[1]]
            ),
            Err(PaneLayoutError::InvalidBounds { pane: 0, .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = PaneLayoutError::TotalMismatch { total: 90.0 };
        assert_eq!(err.to_string(), "pane widths add up to 90, expected 100");
    }

    #[test]
    fn test_column_geometry() {
        let layout = three_panes();
        assert_eq!(layout.divider_columns(100), vec![25, 75]);
        assert_eq!(layout.column_spans(100), vec![(0, 25), (26, 49), (76, 24)]);
        assert_eq!(layout.hit_divider(25, 100), Some(0));
        assert_eq!(layout.hit_divider(75, 100), Some(1));
        // Edge columns of a pane belong to the pane
        assert_eq!(layout.hit_divider(24, 100), None);
        assert_eq!(layout.hit_divider(26, 100), None);
        assert_eq!(layout.pane_at(26, 100), Some(1));
        assert_eq!(layout.hit_divider(50, 100), None);
        assert_eq!(layout.pane_at(10, 100), Some(0));
        assert_eq!(layout.pane_at(25, 100), None);
        assert_eq!(layout.pane_at(99, 100), Some(2));
    }

    #[test]
    fn test_column_geometry_on_tiny_rows() {
        let layout = three_panes();
        assert_eq!(layout.column_spans(0), vec![(0, 0), (0, 0), (0, 0)]);
        assert_eq!(layout.divider_columns(1), vec![0, 0]);
    }
}
