//! The filter pass: a pure function from (snapshot, selection) to subset.

use greenbasket_catalog::Product;

use crate::config::{ALL_CATEGORIES, CategoryGroups};
use crate::selection::FilterSelection;

/// Filter a catalog snapshot down to the in-stock products matching every
/// active criterion of `selection`.
///
/// Stable: output preserves the relative order of `products`. Pure: no
/// mutation, no hidden state; the same inputs always yield the same output.
pub fn filter_products<'a>(
    products: &'a [Product],
    selection: &FilterSelection,
    groups: &CategoryGroups,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| matches_selection(product, selection, groups))
        .collect()
}

/// Whether a single product passes every active criterion.
///
/// Criteria are conjunctive. Products missing a field targeted by an active
/// criterion (no category, no brand) fail that criterion rather than erroring.
/// Out-of-stock products never match, regardless of the selection.
pub fn matches_selection(
    product: &Product,
    selection: &FilterSelection,
    groups: &CategoryGroups,
) -> bool {
    if !product.in_stock() {
        return false;
    }

    if !selection.search().is_empty() && !contains_ci(product.name(), selection.search()) {
        return false;
    }

    if selection.category() != ALL_CATEGORIES {
        match product.category() {
            Some(category) => {
                if !groups.matches(selection.category(), category) {
                    return false;
                }
            }
            None => return false,
        }
    }

    if let Some(brand) = selection.brand() {
        match product.brand() {
            Some(product_brand) => {
                if product_brand.to_lowercase() != brand.to_lowercase() {
                    return false;
                }
            }
            None => return false,
        }
    }

    if let Some(range) = selection.price_range() {
        if !range.contains(product.offer_price()) {
            return false;
        }
    }

    true
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use greenbasket_catalog::ProductDraft;
    use greenbasket_core::ProductId;

    use crate::config::{PriceRange, default_price_ranges};

    fn product(
        name: &str,
        category: Option<&str>,
        brand: Option<&str>,
        offer_price: u64,
        in_stock: bool,
    ) -> Product {
        let mut p = Product::new(
            ProductDraft {
                id: ProductId::new(),
                name: name.to_string(),
                description: Vec::new(),
                category: category.map(str::to_string),
                brand: brand.map(str::to_string),
                price: offer_price,
                offer_price,
            },
            Utc::now(),
        )
        .unwrap();
        if !in_stock {
            p.set_in_stock(false, Utc::now());
        }
        p
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product("Apple", Some("Fruits"), Some("Farmogo"), 30, true),
            product("Milk", Some("Dairy Products"), Some("Tadaa"), 60, true),
            product("Bread", Some("Bakery & Breads"), Some("fresho!"), 45, true),
            product("Mango", Some("Fruits"), Some("Trikaya"), 120, false),
        ]
    }

    fn names<'a>(filtered: &[&'a Product]) -> Vec<&'a str> {
        filtered.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn default_selection_keeps_all_in_stock_products() {
        let catalog = sample_catalog();
        let filtered = filter_products(
            &catalog,
            &FilterSelection::new(),
            &CategoryGroups::storefront_defaults(),
        );
        assert_eq!(names(&filtered), vec!["Apple", "Milk", "Bread"]);
    }

    #[test]
    fn category_group_expands_to_literals() {
        let catalog = sample_catalog();
        let mut selection = FilterSelection::new();
        selection.select_category("Fruits & Vegetables");

        let filtered =
            filter_products(&catalog, &selection, &CategoryGroups::storefront_defaults());
        assert_eq!(names(&filtered), vec!["Apple"]);
    }

    #[test]
    fn brand_and_price_combine_conjunctively() {
        let catalog = sample_catalog();
        let mut selection = FilterSelection::new();
        selection.toggle_brand("Tadaa");
        selection.toggle_price_range(PriceRange::new("Rs 51 to Rs 100", 51, Some(100)));

        let filtered =
            filter_products(&catalog, &selection, &CategoryGroups::storefront_defaults());
        assert_eq!(names(&filtered), vec!["Milk"]);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let catalog = sample_catalog();
        let mut selection = FilterSelection::new();
        selection.set_search("app");

        let filtered =
            filter_products(&catalog, &selection, &CategoryGroups::storefront_defaults());
        assert_eq!(names(&filtered), vec!["Apple"]);
    }

    #[test]
    fn brand_match_is_exact_but_case_insensitive() {
        let catalog = sample_catalog();
        let mut selection = FilterSelection::new();
        selection.toggle_brand("FARMOGO");

        let filtered =
            filter_products(&catalog, &selection, &CategoryGroups::storefront_defaults());
        assert_eq!(names(&filtered), vec!["Apple"]);

        // Substring is not enough for brand.
        let mut selection = FilterSelection::new();
        selection.toggle_brand("Farm");
        let filtered =
            filter_products(&catalog, &selection, &CategoryGroups::storefront_defaults());
        assert!(filtered.is_empty());
    }

    #[test]
    fn out_of_stock_is_excluded_even_when_everything_else_matches() {
        let catalog = sample_catalog();
        let mut selection = FilterSelection::new();
        selection.set_search("mango");
        selection.select_category("Fruits & Vegetables");
        selection.toggle_brand("Trikaya");
        selection.toggle_price_range(PriceRange::new("Rs 101 to Rs 200", 101, Some(200)));

        let filtered =
            filter_products(&catalog, &selection, &CategoryGroups::storefront_defaults());
        assert!(filtered.is_empty());
    }

    #[test]
    fn missing_category_never_matches_active_category_filter() {
        let catalog = vec![product("Mystery Box", None, Some("Farmogo"), 99, true)];
        let mut selection = FilterSelection::new();
        selection.select_category("Fruits & Vegetables");

        let filtered =
            filter_products(&catalog, &selection, &CategoryGroups::storefront_defaults());
        assert!(filtered.is_empty());

        // Inactive category filter ("All") still lets it through.
        let filtered = filter_products(
            &catalog,
            &FilterSelection::new(),
            &CategoryGroups::storefront_defaults(),
        );
        assert_eq!(names(&filtered), vec!["Mystery Box"]);
    }

    #[test]
    fn missing_brand_never_matches_active_brand_filter() {
        let catalog = vec![product("Loose Carrots", Some("Vegetables"), None, 25, true)];
        let mut selection = FilterSelection::new();
        selection.toggle_brand("Farmogo");

        let filtered =
            filter_products(&catalog, &selection, &CategoryGroups::storefront_defaults());
        assert!(filtered.is_empty());
    }

    #[test]
    fn unknown_category_label_matches_by_substring_fallback() {
        let catalog = vec![product("Potato Chips", Some("Salty Snacks"), None, 35, true)];
        let mut selection = FilterSelection::new();
        selection.select_category("Snacks");

        let filtered =
            filter_products(&catalog, &selection, &CategoryGroups::storefront_defaults());
        assert_eq!(names(&filtered), vec!["Potato Chips"]);
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let catalog = vec![
            product("At Min", None, None, 51, true),
            product("At Max", None, None, 100, true),
            product("Below", None, None, 50, true),
            product("Above", None, None, 101, true),
        ];
        let mut selection = FilterSelection::new();
        selection.toggle_price_range(PriceRange::new("Rs 51 to Rs 100", 51, Some(100)));

        let filtered =
            filter_products(&catalog, &selection, &CategoryGroups::storefront_defaults());
        assert_eq!(names(&filtered), vec!["At Min", "At Max"]);
    }

    #[test]
    fn unbounded_range_has_no_upper_limit() {
        let catalog = vec![
            product("Saffron", None, None, 45_000, true),
            product("Apple", None, None, 30, true),
        ];
        let mut selection = FilterSelection::new();
        selection.toggle_price_range(default_price_ranges().pop().unwrap());

        let filtered =
            filter_products(&catalog, &selection, &CategoryGroups::storefront_defaults());
        assert_eq!(names(&filtered), vec!["Saffron"]);
    }

    #[test]
    fn empty_result_is_valid() {
        let catalog = sample_catalog();
        let mut selection = FilterSelection::new();
        selection.set_search("durian");

        let filtered =
            filter_products(&catalog, &selection, &CategoryGroups::storefront_defaults());
        assert!(filtered.is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                "[A-Za-z][A-Za-z ]{0,20}",
                proptest::option::of(prop_oneof![
                    Just("Fruits".to_string()),
                    Just("Vegetables".to_string()),
                    Just("Dairy Products".to_string()),
                    Just("Bakery & Breads".to_string()),
                    Just("Exotic Fruits".to_string()),
                    "[A-Za-z ]{1,15}",
                ]),
                proptest::option::of(prop_oneof![
                    Just("Farmogo".to_string()),
                    Just("Tadaa".to_string()),
                    Just("fresho!".to_string()),
                    "[A-Za-z]{1,10}",
                ]),
                0u64..1_000,
                any::<bool>(),
            )
                .prop_map(|(name, category, brand, offer_price, in_stock)| {
                    let mut p = Product::new(
                        ProductDraft {
                            id: ProductId::new(),
                            name,
                            description: Vec::new(),
                            category,
                            brand,
                            price: offer_price,
                            offer_price,
                        },
                        Utc::now(),
                    )
                    .unwrap();
                    if !in_stock {
                        p.set_in_stock(false, Utc::now());
                    }
                    p
                })
        }

        fn arb_selection() -> impl Strategy<Value = FilterSelection> {
            (
                prop_oneof![Just(String::new()), "[a-z]{1,4}"],
                prop_oneof![
                    Just(ALL_CATEGORIES.to_string()),
                    Just("Fruits & Vegetables".to_string()),
                    Just("Dairy Products".to_string()),
                    Just("Snacks".to_string()),
                ],
                proptest::option::of(prop_oneof![
                    Just("Farmogo".to_string()),
                    Just("Tadaa".to_string()),
                ]),
                proptest::option::of(proptest::sample::select(default_price_ranges())),
            )
                .prop_map(|(search, category, brand, price_range)| {
                    let mut selection = FilterSelection::new();
                    selection.set_search(search);
                    selection.select_category(category);
                    if let Some(brand) = brand {
                        selection.toggle_brand(&brand);
                    }
                    if let Some(range) = price_range {
                        selection.toggle_price_range(range);
                    }
                    selection
                })
        }

        proptest! {
            /// Property: output is a subset of the input, in input order.
            #[test]
            fn output_is_an_ordered_subset(
                products in proptest::collection::vec(arb_product(), 0..40),
                selection in arb_selection(),
            ) {
                let groups = CategoryGroups::storefront_defaults();
                let filtered = filter_products(&products, &selection, &groups);

                let mut cursor = 0usize;
                for kept in &filtered {
                    // Each output product occurs in the remaining input, so
                    // relative order is preserved and nothing is fabricated.
                    let pos = products[cursor..]
                        .iter()
                        .position(|p| p.id_typed() == kept.id_typed());
                    prop_assert!(pos.is_some());
                    cursor += pos.unwrap() + 1;
                }
            }

            /// Property: same selection + same snapshot = identical output.
            #[test]
            fn filtering_is_deterministic(
                products in proptest::collection::vec(arb_product(), 0..40),
                selection in arb_selection(),
            ) {
                let groups = CategoryGroups::storefront_defaults();
                let first = filter_products(&products, &selection, &groups);
                let second = filter_products(&products, &selection, &groups);
                prop_assert_eq!(first, second);
            }

            /// Property: re-filtering the output is a no-op (projection).
            #[test]
            fn filtering_is_idempotent(
                products in proptest::collection::vec(arb_product(), 0..40),
                selection in arb_selection(),
            ) {
                let groups = CategoryGroups::storefront_defaults();
                let once: Vec<Product> = filter_products(&products, &selection, &groups)
                    .into_iter()
                    .cloned()
                    .collect();
                let twice: Vec<Product> = filter_products(&once, &selection, &groups)
                    .into_iter()
                    .cloned()
                    .collect();
                prop_assert_eq!(once, twice);
            }

            /// Property: out-of-stock products never appear in output.
            #[test]
            fn out_of_stock_never_appears(
                products in proptest::collection::vec(arb_product(), 0..40),
                selection in arb_selection(),
            ) {
                let groups = CategoryGroups::storefront_defaults();
                let filtered = filter_products(&products, &selection, &groups);
                prop_assert!(filtered.iter().all(|p| p.in_stock()));
            }

            /// Property: input is untouched by a filter pass.
            #[test]
            fn input_is_not_mutated(
                products in proptest::collection::vec(arb_product(), 0..40),
                selection in arb_selection(),
            ) {
                let groups = CategoryGroups::storefront_defaults();
                let before = products.clone();
                let _ = filter_products(&products, &selection, &groups);
                prop_assert_eq!(before, products);
            }
        }
    }
}
