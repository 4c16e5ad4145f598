//! Specification category model for whittle.
//!
//! A prototype's functional specification is split across five fixed JSON
//! files, one per category. The category set is closed: the pipeline can
//! rewrite the files it knows about and nothing else, and adding a category
//! means adding a variant here.
//!
//! Categories carry two names. The bare key (e.g. `States`) is how the
//! generation backend addresses a category in its response object; the file
//! name (e.g. `States.json`) is where the content lives on disk and how it
//! is labeled inside the prompt.

use std::collections::BTreeMap;
use std::fmt;

mod io;

/// One of the five specification categories, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    InteractionElements,
    States,
    Transitions,
    VisualizationElements,
    VisualizationArrays,
}

impl Category {
    /// All categories in their fixed prompt and write order.
    pub const ALL: [Category; 5] = [
        Category::InteractionElements,
        Category::States,
        Category::Transitions,
        Category::VisualizationElements,
        Category::VisualizationArrays,
    ];

    /// The key used for this category in the generation response object.
    pub fn key(&self) -> &'static str {
        match self {
            Category::InteractionElements => "InteractionElements",
            Category::States => "States",
            Category::Transitions => "Transitions",
            Category::VisualizationElements => "VisualizationElements",
            Category::VisualizationArrays => "VisualizationArrays",
        }
    }

    /// The on-disk file name for this category.
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::InteractionElements => "InteractionElements.json",
            Category::States => "States.json",
            Category::Transitions => "Transitions.json",
            Category::VisualizationElements => "VisualizationElements.json",
            Category::VisualizationArrays => "VisualizationArrays.json",
        }
    }

    /// Look up a category by its response key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The current specification content, loaded once per invocation.
///
/// Always holds an entry for every category; categories whose file is absent
/// hold an empty string. The snapshot is never mutated after loading, so the
/// prompt and the write step see the same state of the world.
#[derive(Debug, Clone, Default)]
pub struct SpecSnapshot {
    entries: BTreeMap<Category, String>,
}

impl SpecSnapshot {
    /// The content for a category. Empty string means the file was absent.
    pub fn get(&self, category: Category) -> &str {
        self.entries
            .get(&category)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Categories whose files held content, in fixed order.
    pub fn non_empty(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|c| !self.get(*c).is_empty())
    }
}
