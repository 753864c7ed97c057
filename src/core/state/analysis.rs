use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    core::{cmd::Cmd, msg::analysis::AnalysisMsg},
    domain::{
        chronology::{sample_events, sample_window, TimeWindow, TimelineEvent},
        geo::MapView,
        graph::{force_layout, ForceParams, GraphNode, KnowledgeGraph, NodeKind},
    },
};

/// Tabs of the analysis pane
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum MainTab {
    #[default]
    Home,
    Analysis,
    Data,
}

/// Sub-tabs under [`MainTab::Analysis`]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum AnalysisTab {
    #[default]
    #[strum(to_string = "Knowledge Graph")]
    KnowledgeGraph,
    Timeline,
    Map,
    Sources,
}

const SOURCES: [&str; 5] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
    "Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
    "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum.",
    "Excepteur sint occaecat cupidatat non proident, sunt in culpa.",
];

#[derive(Debug, Clone)]
pub struct AnalysisState {
    pub tab: MainTab,
    pub sub_tab: AnalysisTab,
    pub sources: Vec<String>,
    /// 1-based number of the emphasised source
    pub highlighted_source: Option<u32>,
    pub graph: KnowledgeGraph,
    /// Unit-square node positions, computed once
    pub positions: Vec<(f64, f64)>,
    /// Index of the highlighted graph node
    pub node_cursor: Option<usize>,
    pub events: Vec<TimelineEvent>,
    pub window: TimeWindow,
    pub map: MapView,
}

impl Default for AnalysisState {
    fn default() -> Self {
        let graph = KnowledgeGraph::sample();
        let positions = force_layout(&graph, ForceParams::default());
        Self {
            tab: MainTab::default(),
            sub_tab: AnalysisTab::default(),
            sources: SOURCES.iter().map(|s| s.to_string()).collect(),
            highlighted_source: None,
            graph,
            positions,
            node_cursor: None,
            events: sample_events(),
            window: sample_window(),
            map: MapView::default(),
        }
    }
}

/// Next or previous variant of a cyclic enum
fn cycle<T: IntoEnumIterator + PartialEq + Copy>(current: T, forward: bool) -> T {
    let all: Vec<T> = T::iter().collect();
    let index = all.iter().position(|t| *t == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % all.len()
    } else {
        (index + all.len() - 1) % all.len()
    };
    all[next]
}

impl AnalysisState {
    /// Analysis-specific update function
    pub fn update(&mut self, msg: AnalysisMsg) -> Vec<Cmd> {
        match msg {
            AnalysisMsg::NextTab => self.tab = cycle(self.tab, true),
            AnalysisMsg::PrevTab => self.tab = cycle(self.tab, false),
            AnalysisMsg::SelectTab(tab) => self.tab = tab,
            AnalysisMsg::NextSubTab => self.sub_tab = cycle(self.sub_tab, true),
            AnalysisMsg::PrevSubTab => self.sub_tab = cycle(self.sub_tab, false),
            AnalysisMsg::SelectSubTab(tab) => self.sub_tab = tab,
            AnalysisMsg::ShowSource(n) => {
                if !self.has_source(n) {
                    log::warn!("source {n} does not exist");
                    return vec![];
                }
                self.tab = MainTab::Analysis;
                self.sub_tab = AnalysisTab::Sources;
                self.highlighted_source = Some(n);
            }
            AnalysisMsg::MoveNodeCursor(forward) => self.move_node_cursor(forward),
            AnalysisMsg::ActivateNode => return self.activate_node(),
            AnalysisMsg::ZoomIn => {
                self.map.zoom_in();
            }
            AnalysisMsg::ZoomOut => {
                self.map.zoom_out();
            }
            AnalysisMsg::ResetZoom => {
                self.map.reset();
            }
            AnalysisMsg::MoveMapFocus(forward) => self.map.cycle_focus(forward),
        }
        vec![]
    }

    fn move_node_cursor(&mut self, forward: bool) {
        let count = self.graph.nodes.len();
        if count == 0 {
            self.node_cursor = None;
            return;
        }
        self.node_cursor = Some(match self.node_cursor {
            None if forward => 0,
            None => count - 1,
            Some(index) if forward => (index + 1) % count,
            Some(index) => (index + count - 1) % count,
        });
    }

    pub fn selected_node(&self) -> Option<&GraphNode> {
        self.node_cursor.and_then(|index| self.graph.nodes.get(index))
    }

    fn activate_node(&mut self) -> Vec<Cmd> {
        let Some(node) = self.selected_node().copied() else {
            return vec![];
        };
        let target = match node.kind {
            NodeKind::Event => AnalysisTab::Timeline,
            NodeKind::Place => AnalysisTab::Map,
            NodeKind::Hub => return vec![],
        };
        self.tab = MainTab::Analysis;
        self.sub_tab = target;
        vec![Cmd::LogInfo {
            message: format!("Node {} ({}) opened {target}", node.id, node.kind),
        }]
    }

    pub fn has_source(&self, n: u32) -> bool {
        n >= 1 && (n as usize) <= self.sources.len()
    }
}
