//! # Category Filter
//!
//! Products carry no category field. Tabs are derived from the product name with a fixed
//! keyword table, case-insensitive substring match on the name only.
//!
//! Membership is not exclusive. "Chocolate Shake" shows up under snacks and drinks, a name
//! matching no keyword only shows up under all.
use std::{fmt, str::FromStr};

use catalog::Product;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Snacks,
    Salad,
    Bowls,
    Drinks,
    Wraps,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const TABS: [Category; 6] = [
        Category::All,
        Category::Snacks,
        Category::Salad,
        Category::Bowls,
        Category::Drinks,
        Category::Wraps,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Snacks => "snacks",
            Category::Salad => "salad",
            Category::Bowls => "bowls",
            Category::Drinks => "drinks",
            Category::Wraps => "wraps",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Snacks => "Snacks",
            Category::Salad => "Salad",
            Category::Bowls => "Bowls",
            Category::Drinks => "Drinks",
            Category::Wraps => "Wraps",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::All => &[],
            Category::Snacks => &["biscuit", "cake", "peanuts", "chocolate"],
            Category::Salad => &["salad"],
            Category::Bowls => &["bowl", "biryani", "rice"],
            Category::Drinks => &["shake", "juice", "coffee", "tea", "chaas", "milk"],
            Category::Wraps => &["roll", "wrap"],
        }
    }

    pub fn matches(self, product_name: &str) -> bool {
        if self == Category::All {
            return true;
        }

        let name = product_name.to_lowercase();

        self.keywords().iter().any(|keyword| name.contains(keyword))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();

        Category::TABS
            .into_iter()
            .find(|category| category.key() == key)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Catalog order is kept.
pub fn filter_products(products: &[Product], category: Category) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| category.matches(&product.product_name))
        .collect()
}

/// Every specific tab a name lands in, `All` excluded.
pub fn categories_for(product_name: &str) -> Vec<Category> {
    Category::TABS
        .into_iter()
        .filter(|category| *category != Category::All && category.matches(product_name))
        .collect()
}
