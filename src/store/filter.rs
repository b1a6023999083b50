//! Case-insensitive substring search over modules and resources.

use crate::entities::{Module, Resource};

/// A view filter; it never touches the collections it is applied to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    pub fn term(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, name: &str) -> bool {
        self.needle.is_empty() || name.to_lowercase().contains(&self.needle)
    }

    pub fn filter_modules<'a>(&self, modules: &[&'a Module]) -> Vec<&'a Module> {
        modules.iter().copied().filter(|m| self.matches(&m.name)).collect()
    }

    pub fn filter_resources<'a>(&self, resources: &[&'a Resource]) -> Vec<&'a Resource> {
        resources.iter().copied().filter(|r| self.matches(&r.name)).collect()
    }
}
