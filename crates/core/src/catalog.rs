//! Catalog filtering
//!
//! Client-side narrowing of an already-loaded product list. The search term
//! matches case-insensitively against name or description, the category is an
//! exact match, and both combine as logical AND.

use crate::products::Product;

/// Filter state for a catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    search: Option<String>,
    category: Option<String>,
}

impl CatalogFilter {
    /// A filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term. An empty term clears the search filter.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    /// Sets the category. An empty label clears the category filter.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    /// Whether a product passes the filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let search_matches = self.search.as_deref().is_none_or(|term| {
            let term = term.to_lowercase();

            product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term)
        });

        let category_matches = self
            .category
            .as_deref()
            .is_none_or(|category| product.category == category);

        search_matches && category_matches
    }

    /// Narrows a product list, preserving its order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .collect()
    }
}

/// The distinct categories present in a product list, sorted.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = products
        .iter()
        .map(|product| product.category.clone())
        .collect();

    categories.sort();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use crate::fixtures;

    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        let catalog = fixtures::catalog();
        let filter = CatalogFilter::new();

        assert_eq!(filter.apply(&catalog).len(), catalog.len());
    }

    #[test]
    fn search_is_case_insensitive_on_name() {
        let product = fixtures::product("Espresso Machine", 24_900, 3, "kitchen");
        let filter = CatalogFilter::new().with_search("ESPRESSO");

        assert!(filter.matches(&product));
    }

    #[test]
    fn search_also_matches_description() {
        let mut product = fixtures::product("Grinder", 7_900, 3, "kitchen");
        product.description = "Burr grinder for espresso".to_string();

        let filter = CatalogFilter::new().with_search("espresso");

        assert!(filter.matches(&product));
    }

    #[test]
    fn search_misses_unrelated_products() {
        let product = fixtures::product("Desk Lamp", 3_500, 10, "office");
        let filter = CatalogFilter::new().with_search("espresso");

        assert!(!filter.matches(&product));
    }

    #[test]
    fn category_is_exact_match() {
        let product = fixtures::product("Desk Lamp", 3_500, 10, "office");

        assert!(CatalogFilter::new().with_category("office").matches(&product));
        assert!(!CatalogFilter::new().with_category("Office").matches(&product));
    }

    #[test]
    fn combined_filters_apply_as_and() {
        let lamp = fixtures::product("Desk Lamp", 3_500, 10, "office");
        let chair = fixtures::product("Desk Chair", 12_900, 4, "furniture");

        let filter = CatalogFilter::new()
            .with_search("desk")
            .with_category("office");

        assert!(filter.matches(&lamp));
        assert!(!filter.matches(&chair), "category must also match");
    }

    #[test]
    fn empty_terms_clear_the_filters() {
        let product = fixtures::product("Desk Lamp", 3_500, 10, "office");
        let filter = CatalogFilter::new().with_search("").with_category("");

        assert!(filter.matches(&product));
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let products = vec![
            fixtures::product("A", 100, 1, "office"),
            fixtures::product("B", 100, 1, "kitchen"),
            fixtures::product("C", 100, 1, "office"),
        ];

        assert_eq!(categories(&products), vec!["kitchen", "office"]);
    }
}
