use std::collections::HashMap;

/// Category name to color lookup
///
/// A later `define` for the same category replaces the earlier color.
/// Categories are never removed.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    colors: HashMap<String, String>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, category: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(category.into(), color.into());
    }

    pub fn color_of(&self, category: &str) -> Option<&str> {
        self.colors.get(category).map(String::as_str)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.colors.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
