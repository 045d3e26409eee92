//! Category catalog.
//!
//! A category names a dataset and whether it can be played. Premium and
//! coming-soon categories are listed for display but cannot be selected.

use serde::{Deserialize, Serialize};

/// Whether a category can be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryStatus {
    Active,
    /// Locked behind a purchase the engine does not model.
    Premium,
    ComingSoon,
}

/// A selectable word category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    /// Dataset name passed to the `CardSource`.
    pub dataset: String,
    pub status: CategoryStatus,
}

impl Category {
    #[must_use]
    pub fn new(title: impl Into<String>, dataset: impl Into<String>, status: CategoryStatus) -> Self {
        Self {
            title: title.into(),
            dataset: dataset.into(),
            status,
        }
    }

    #[must_use]
    pub fn active(title: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self::new(title, dataset, CategoryStatus::Active)
    }

    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.status == CategoryStatus::Active
    }
}

/// Ordered list of categories, looked up by title.
///
/// ## Example
///
/// ```
/// use word_guess::cards::{CategoryCatalog, CategoryStatus};
///
/// let catalog = CategoryCatalog::default();
/// let classic = catalog.get("Klasik").unwrap();
/// assert_eq!(classic.dataset, "words");
/// assert_eq!(classic.status, CategoryStatus::Active);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        use CategoryStatus::{Active, ComingSoon, Premium};

        Self {
            categories: vec![
                Category::new("Klasik", "words", Active),
                Category::new("Sinema", "sinema", Active),
                Category::new("Tarih", "tarih", Active),
                Category::new("Yeşilçam", "yesilcam", Premium),
                Category::new("Bilim Kurgu", "bilimkurgu", Premium),
                Category::new("Spor", "spor", Premium),
                Category::new("Müzik", "muzik", ComingSoon),
            ],
        }
    }
}

impl CategoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Add a category.
    ///
    /// Panics if a category with the same title already exists.
    pub fn register(&mut self, category: Category) {
        if self.get(&category.title).is_some() {
            panic!("Category {:?} already registered", category.title);
        }
        self.categories.push(category);
    }

    /// Add a category (builder pattern).
    #[must_use]
    pub fn with(mut self, category: Category) -> Self {
        self.register(category);
        self
    }

    /// Look up a category by title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.title == title)
    }

    /// The category played when none has been chosen.
    #[must_use]
    pub fn default_category(&self) -> Option<&Category> {
        self.categories.iter().find(|c| c.is_playable())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Categories that can currently be played.
    pub fn playable(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_playable())
    }
}
