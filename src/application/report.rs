//! Demonstration sections: each one is a titled tree plus the order to list it in.

use std::fmt;

use clap::ValueEnum;
use regex::Regex;
use tracing::{debug, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::{Settings, TraversalOrder};
use crate::domain::Node;

/// Letter case applied by the `map` demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Case {
    Lower,
    Upper,
}

impl Case {
    pub fn apply(self, value: &str) -> String {
        match self {
            Case::Lower => value.to_lowercase(),
            Case::Upper => value.to_uppercase(),
        }
    }
}

/// Predicate built from `--exclude` values and an optional `--matching` regex.
#[derive(Debug, Clone, Default)]
pub struct ValueFilter {
    excluded: Vec<String>,
    pattern: Option<Regex>,
}

impl ValueFilter {
    pub fn new(excluded: Vec<String>, matching: Option<&str>) -> ApplicationResult<Self> {
        let pattern = matching
            .map(|p| {
                Regex::new(p).map_err(|e| ApplicationError::InvalidPattern {
                    pattern: p.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()?;
        Ok(Self { excluded, pattern })
    }

    pub fn accepts(&self, value: &str) -> bool {
        if self.excluded.iter().any(|e| e == value) {
            return false;
        }
        self.pattern.as_ref().map_or(true, |re| re.is_match(value))
    }
}

/// Titled tree ready for printing. `tree` is `None` when a filter rejected the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub tree: Option<Node<String>>,
    pub order: TraversalOrder,
}

impl Section {
    pub fn new(title: impl Into<String>, tree: Option<Node<String>>, order: TraversalOrder) -> Self {
        Self {
            title: title.into(),
            tree,
            order,
        }
    }

    /// Node values in the section's traversal order; empty if the tree is absent.
    pub fn values(&self) -> Vec<String> {
        self.tree
            .as_ref()
            .map(|tree| values_in_order(tree, self.order))
            .unwrap_or_default()
    }
}

/// Collects `to_string()` of every value, visiting nodes with `dfs` or `bfs`.
pub fn values_in_order<T: fmt::Display>(tree: &Node<T>, order: TraversalOrder) -> Vec<String> {
    let mut values = Vec::with_capacity(tree.len());
    let visit = |node: &Node<T>| values.push(node.value().to_string());
    match order {
        TraversalOrder::Dfs => tree.dfs(visit),
        TraversalOrder::Bfs => tree.bfs(visit),
    }
    values
}

pub fn traversal_section(tree: &Node<String>, order: TraversalOrder) -> Section {
    let title = match order {
        TraversalOrder::Dfs => "Depth-First Search",
        TraversalOrder::Bfs => "Breadth-First Search",
    };
    Section::new(title, Some(tree.clone()), order)
}

#[instrument(level = "debug", skip(tree, settings))]
pub fn map_section(tree: &Node<String>, case: Case, settings: &Settings) -> Section {
    let mapped = tree.map(|v| case.apply(v));
    Section::new("Transformed Structure", Some(mapped), settings.order)
}

#[instrument(level = "debug", skip_all)]
pub fn filter_section(tree: &Node<String>, filter: &ValueFilter, settings: &Settings) -> Section {
    let filtered = tree.filter(|v| filter.accepts(v));
    if filtered.is_none() {
        debug!(root = %tree.value(), "root rejected by filter");
    }
    Section::new("Filtered Structure", filtered, settings.order)
}

/// The four sections of the full demonstration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub sections: Vec<Section>,
}

impl DemoReport {
    #[instrument(level = "debug", skip_all)]
    pub fn build(tree: &Node<String>, settings: &Settings) -> ApplicationResult<Self> {
        let filter = ValueFilter::new(vec!["B".to_string()], None)?;
        Ok(Self {
            sections: vec![
                traversal_section(tree, TraversalOrder::Dfs),
                traversal_section(tree, TraversalOrder::Bfs),
                map_section(tree, Case::Lower, settings),
                filter_section(tree, &filter, settings),
            ],
        })
    }
}
