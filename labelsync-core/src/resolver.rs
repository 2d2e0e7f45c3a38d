//! Label resolution
//!
//! Every label is resolved eagerly: `assign` copies the category color onto
//! the label record at that moment. Assigning a label again replaces the
//! whole record, so the last assignment decides the final color, even when
//! it points at an undefined category.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::category::CategoryTable;
use crate::definitions::Definitions;
use crate::overrides::Override;

/// A label with its final color
///
/// `color` is `None` when the label was last assigned to a category that
/// was never defined. It serializes to the GitHub label payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLabel {
    pub name: String,
    pub color: Option<String>,
}

/// Resolved labels keyed by name, in order of first assignment
#[derive(Debug, Clone, Default)]
pub struct LabelResolver {
    categories: CategoryTable,
    labels: IndexMap<String, ResolvedLabel>,
}

impl LabelResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a resolver from the definitions file: all types first, then
    /// every base label in file order
    pub fn from_definitions(definitions: &Definitions) -> Self {
        let mut resolver = Self::new();
        for def in &definitions.types {
            resolver.define_category(def.name.as_str(), def.hex_color.as_str());
        }
        for def in &definitions.labels {
            resolver.assign(def.name.as_str(), &def.category);
        }
        resolver
    }

    pub fn define_category(&mut self, category: impl Into<String>, color: impl Into<String>) {
        self.categories.define(category, color);
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// Resolve `label` against `category` and store it, replacing any
    /// earlier record for the same label
    pub fn assign(&mut self, label: impl Into<String>, category: &str) {
        let name = label.into();
        let color = self.categories.color_of(category).map(str::to_string);

        match &color {
            Some(color) => debug!("Label '{}' -> '{}' ({})", name, category, color),
            None => warn!("Label '{}' refers to undefined category '{}', it will have no color", name, category),
        }

        self.labels.insert(name.clone(), ResolvedLabel { name, color });
    }

    /// Apply raw `CATEGORY=LABEL,...` arguments in order
    ///
    /// Arguments without a label list change nothing.
    pub fn apply_overrides<I, S>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in overrides {
            let raw = raw.as_ref();
            match Override::parse(raw) {
                Some(parsed) => {
                    for label in parsed.labels {
                        self.assign(label, &parsed.category);
                    }
                }
                None => debug!("Ignoring override without labels: '{}'", raw),
            }
        }
    }

    pub fn resolved_labels(&self) -> impl Iterator<Item = &ResolvedLabel> + '_ {
        self.labels.values()
    }

    pub fn get(&self, label: &str) -> Option<&ResolvedLabel> {
        self.labels.get(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
