//! Placeholder articles with inline cross references
//!
//! Section bodies use a small inline markup:
//! - `[[Target Title|label]]` links to another article
//! - `[^n]` cites source `n`

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Article shown when a topic is opened.
pub const DEFAULT_ARTICLE: &str = "Dolor Sit Amet";

lazy_static! {
    static ref INLINE_MARKUP: Regex =
        Regex::new(r"\[\[([^|\]]+)\|([^\]]+)\]\]|\[\^(\d+)\]").expect("inline markup pattern");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: &'static str,
    pub description: &'static str,
    pub sections: &'static [Section],
}

/// A piece of parsed section content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    ArticleLink { target: String, label: String },
    SourceRef(u32),
}

/// Something the reader can follow from inside an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Link {
    Article(String),
    Source(u32),
}

impl Segment {
    pub fn link(&self) -> Option<Link> {
        match self {
            Segment::Text(_) => None,
            Segment::ArticleLink { target, .. } => Some(Link::Article(target.clone())),
            Segment::SourceRef(n) => Some(Link::Source(*n)),
        }
    }
}

impl Article {
    /// Every followable link, in reading order.
    pub fn links(&self) -> Vec<Link> {
        self.sections
            .iter()
            .flat_map(|section| parse_inline(section.content))
            .filter_map(|segment| segment.link())
            .collect()
    }
}

const ARTICLES: &[Article] = &[
    Article {
        title: "Dolor Sit Amet",
        description: "Dolor sit amet is a common placeholder text used in design and typography.",
        sections: &[
            Section {
                heading: "Origins of Dolor Sit Amet",
                content: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do [[Eiusmod Tempor Incididunt|eiusmod tempor incididunt]] ut labore et dolore magna aliqua[^1]. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat[^2].",
            },
            Section {
                heading: "Usage in Modern Design",
                content: "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur[^3]. Excepteur sint occaecat cupidatat non proident[^4], sunt in culpa qui officia deserunt mollit anim id est laborum[^5].",
            },
            Section {
                heading: "Variations and Adaptations",
                content: "Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque laudantium[^6], totam rem aperiam, eaque ipsa quae ab illo inventore veritatis et quasi architecto beatae vitae dicta sunt explicabo[^7].",
            },
        ],
    },
    Article {
        title: "Eiusmod Tempor Incididunt",
        description: "Eiusmod tempor incididunt is part of the Lorem Ipsum text often used as placeholder content.",
        sections: &[
            Section {
                heading: "Understanding Eiusmod Tempor",
                content: "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut odit aut fugit[^1], sed quia consequuntur magni dolores eos qui ratione voluptatem sequi nesciunt[^2]. Neque porro quisquam est, qui [[Dolor Sit Amet|dolor sit amet]], consectetur, adipisci velit[^3].",
            },
            Section {
                heading: "Historical Context",
                content: "At vero eos et accusamus et iusto odio dignissimos ducimus qui blanditiis praesentium voluptatum deleniti atque corrupti quos dolores et quas molestias excepturi sint occaecati cupiditate non provident[^4], similique sunt in culpa qui officia deserunt mollitia animi[^5].",
            },
            Section {
                heading: "Modern Interpretations",
                content: "Nam libero tempore, cum soluta nobis est eligendi optio cumque nihil impedit quo minus id quod maxime placeat facere possimus[^6], omnis voluptas assumenda est, omnis dolor repellendus[^7]. Temporibus autem quibusdam et aut officiis debitis aut rerum necessitatibus saepe eveniet[^8].",
            },
        ],
    },
];

pub fn find_article(title: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|article| article.title == title)
}

pub fn article_titles() -> impl Iterator<Item = &'static str> {
    ARTICLES.iter().map(|article| article.title)
}

/// Split section content into text, article links and source references.
pub fn parse_inline(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in INLINE_MARKUP.captures_iter(content) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > cursor {
            segments.push(Segment::Text(content[cursor..whole.start()].to_string()));
        }
        if let (Some(target), Some(label)) = (caps.get(1), caps.get(2)) {
            segments.push(Segment::ArticleLink {
                target: target.as_str().to_string(),
                label: label.as_str().to_string(),
            });
        } else if let Some(number) = caps.get(3).and_then(|n| n.as_str().parse().ok()) {
            segments.push(Segment::SourceRef(number));
        } else {
            segments.push(Segment::Text(whole.as_str().to_string()));
        }
        cursor = whole.end();
    }

    if cursor < content.len() {
        segments.push(Segment::Text(content[cursor..].to_string()));
    }
    segments
}
