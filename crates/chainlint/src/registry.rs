//! Modifier registry mapping names to categories
//!
//! The registry is the linter's knowledge of the modifier vocabulary. It is
//! concurrent (rules may consult it from multiple threads) and extensible at
//! runtime, so projects can teach the linter their own modifiers or override
//! the standard table.

use dashmap::DashMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Metadata for one modifier name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierInfo {
    /// Canonical category, determining chain position
    pub category: Category,

    /// Whether repeated applications are meaningful
    /// (`padding` stacks; a second `size` has no effect)
    #[serde(default = "default_repeatable")]
    pub repeatable: bool,
}

fn default_repeatable() -> bool {
    true
}

impl ModifierInfo {
    /// Create metadata for a repeatable modifier.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            repeatable: true,
        }
    }

    /// Create metadata for a one-shot modifier (first application wins).
    pub fn one_shot(category: Category) -> Self {
        Self {
            category,
            repeatable: false,
        }
    }
}

/// Normalize a modifier name for lookup.
///
/// Lowercases and strips underscores, so `fill_max_width` and `fillMaxWidth`
/// resolve to the same entry.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Concurrent table of known modifiers.
///
/// # Example
///
/// ```
/// use chainlint::{Category, ModifierInfo, ModifierRegistry};
///
/// let registry = ModifierRegistry::standard();
/// assert_eq!(
///     registry.lookup("fillMaxWidth").map(|i| i.category),
///     Some(Category::Layout)
/// );
///
/// registry.register("blur", ModifierInfo::new(Category::Transform));
/// assert!(registry.lookup("blur").is_some());
/// ```
#[derive(Debug, Default)]
pub struct ModifierRegistry {
    /// Normalized name -> (display name, metadata)
    entries: DashMap<String, (String, ModifierInfo)>,
}

impl ModifierRegistry {
    /// Create an empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the standard modifier table.
    pub fn standard() -> Self {
        let registry = Self::empty();
        for (name, info) in standard_table() {
            registry.register(name, info);
        }
        registry
    }

    /// Register a modifier, replacing any existing entry for the same name.
    pub fn register(&self, name: &str, info: ModifierInfo) {
        self.entries
            .insert(normalize(name), (name.to_string(), info));
    }

    /// Remove a modifier, returning its metadata if it was present.
    pub fn unregister(&self, name: &str) -> Option<ModifierInfo> {
        self.entries.remove(&normalize(name)).map(|(_, (_, i))| i)
    }

    /// Look up a modifier by name (normalization-insensitive).
    pub fn lookup(&self, name: &str) -> Option<ModifierInfo> {
        self.entries.get(&normalize(name)).map(|e| e.value().1)
    }

    /// Number of registered modifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries as (display name, metadata), ordered by category then name.
    pub fn snapshot(&self) -> Vec<(String, ModifierInfo)> {
        let mut all: Vec<_> = self
            .entries
            .iter()
            .map(|e| (e.value().0.clone(), e.value().1))
            .collect();
        all.sort_by(|a, b| (a.1.category, &a.0).cmp(&(b.1.category, &b.0)));
        all
    }
}

/// The standard modifier table, in canonical order.
fn standard_table() -> IndexMap<&'static str, ModifierInfo> {
    use Category::*;

    let mut table = IndexMap::new();

    // Layout: size constraints are one-shot, the first application wins
    table.insert("size", ModifierInfo::one_shot(Layout));
    table.insert("width", ModifierInfo::one_shot(Layout));
    table.insert("height", ModifierInfo::one_shot(Layout));
    table.insert("fill_max_size", ModifierInfo::one_shot(Layout));
    table.insert("fill_max_width", ModifierInfo::one_shot(Layout));
    table.insert("fill_max_height", ModifierInfo::one_shot(Layout));
    table.insert("wrap_content_size", ModifierInfo::one_shot(Layout));
    table.insert("required_size", ModifierInfo::one_shot(Layout));
    table.insert("aspect_ratio", ModifierInfo::one_shot(Layout));
    table.insert("weight", ModifierInfo::one_shot(Layout));

    // Position
    table.insert("offset", ModifierInfo::new(Position));
    table.insert("absolute_offset", ModifierInfo::new(Position));
    table.insert("align", ModifierInfo::one_shot(Position));
    table.insert("z_index", ModifierInfo::one_shot(Position));

    // Transform
    table.insert("graphics_layer", ModifierInfo::new(Transform));
    table.insert("scale", ModifierInfo::new(Transform));
    table.insert("rotate", ModifierInfo::new(Transform));
    table.insert("alpha", ModifierInfo::new(Transform));

    // Shadow
    table.insert("shadow", ModifierInfo::new(Shadow));

    // Clip
    table.insert("clip", ModifierInfo::new(Clip));
    table.insert("clip_to_bounds", ModifierInfo::one_shot(Clip));

    // Background
    table.insert("background", ModifierInfo::new(Background));

    // Border
    table.insert("border", ModifierInfo::new(Border));

    // Padding stacks: outer padding then inner padding is a standard idiom
    table.insert("padding", ModifierInfo::new(Padding));
    table.insert("absolute_padding", ModifierInfo::new(Padding));

    // Interaction
    table.insert("clickable", ModifierInfo::one_shot(Interaction));
    table.insert("combined_clickable", ModifierInfo::one_shot(Interaction));
    table.insert("selectable", ModifierInfo::one_shot(Interaction));
    table.insert("toggleable", ModifierInfo::one_shot(Interaction));
    table.insert("draggable", ModifierInfo::new(Interaction));
    table.insert("scrollable", ModifierInfo::new(Interaction));
    table.insert("vertical_scroll", ModifierInfo::one_shot(Interaction));
    table.insert("horizontal_scroll", ModifierInfo::one_shot(Interaction));
    table.insert("pointer_input", ModifierInfo::new(Interaction));
    table.insert("focusable", ModifierInfo::one_shot(Interaction));
    table.insert("hoverable", ModifierInfo::one_shot(Interaction));

    // Semantics
    table.insert("semantics", ModifierInfo::new(Semantics));
    table.insert("clear_and_set_semantics", ModifierInfo::one_shot(Semantics));
    table.insert("test_tag", ModifierInfo::one_shot(Semantics));

    table
}
