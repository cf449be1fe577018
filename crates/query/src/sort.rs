//! Sort comparator for listing results.

use core::cmp::Reverse;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::{DomainError, ValueObject};

/// Listing order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Catalog order, untouched.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Relevance,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::RatingDesc => "rating_desc",
        }
    }

    /// Human-readable label for sort controls.
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::RatingDesc => "Rating: High to Low",
        }
    }
}

impl ValueObject for SortOption {}

impl core::fmt::Display for SortOption {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown sort option: {s}")))
    }
}

/// Return a newly ordered copy of `items`.
///
/// The sort is stable: products with equal keys keep their input order, so
/// page boundaries do not shift between recomputations.
pub fn sort<'c>(items: &[&'c Product], option: SortOption) -> Vec<&'c Product> {
    let mut sorted = items.to_vec();
    match option {
        SortOption::Relevance => {}
        SortOption::PriceAsc => sorted.sort_by_key(|p| p.price),
        SortOption::PriceDesc => sorted.sort_by_key(|p| Reverse(p.price)),
        SortOption::RatingDesc => sorted.sort_by_key(|p| Reverse(p.rating)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use storefront_catalog::{Catalog, Price, Rating};

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    fn product(id: &str, cents: u64, rating: u16) -> Product {
        Product {
            id: id.parse().unwrap(),
            name: format!("Product {id}"),
            price: Price::from_cents(cents),
            category: "Misc".to_string(),
            brand: "BrandZ".to_string(),
            rating: Rating::new(f64::from(rating) / 100.0).unwrap(),
            image_url: String::new(),
            specs: Default::default(),
        }
    }

    #[test]
    fn relevance_keeps_input_order() {
        let catalog = Catalog::demo().unwrap();
        let items: Vec<_> = catalog.products().iter().rev().collect();
        assert_eq!(sort(&items, SortOption::Relevance), items);
    }

    #[test]
    fn price_desc_puts_laptop_first_and_speaker_last() {
        let catalog = Catalog::demo().unwrap();
        let items: Vec<_> = catalog.products().iter().collect();
        let sorted = sort(&items, SortOption::PriceDesc);
        assert_eq!(sorted.first().unwrap().id.as_str(), "plp002");
        assert_eq!(sorted.first().unwrap().price, Price::from_cents(125_000));
        assert_eq!(sorted.last().unwrap().id.as_str(), "plp008");
        assert_eq!(sorted.last().unwrap().price, Price::from_cents(7_999));
    }

    #[test]
    fn price_asc_orders_cheapest_first() {
        let catalog = Catalog::demo().unwrap();
        let items: Vec<_> = catalog.products().iter().collect();
        assert_eq!(
            ids(&sort(&items, SortOption::PriceAsc)),
            ["plp008", "plp007", "plp004", "plp003", "plp005", "plp006", "plp001", "plp002"]
        );
    }

    #[test]
    fn rating_desc_orders_best_rated_first() {
        let catalog = Catalog::demo().unwrap();
        let items: Vec<_> = catalog.products().iter().collect();
        assert_eq!(
            ids(&sort(&items, SortOption::RatingDesc)),
            ["plp003", "plp008", "plp005", "plp001", "plp006", "plp002", "plp007", "plp004"]
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let products = vec![
            product("a", 500, 400),
            product("b", 100, 450),
            product("c", 500, 400),
            product("d", 100, 400),
        ];
        let items: Vec<_> = products.iter().collect();

        assert_eq!(ids(&sort(&items, SortOption::PriceAsc)), ["b", "d", "a", "c"]);
        assert_eq!(ids(&sort(&items, SortOption::PriceDesc)), ["a", "c", "b", "d"]);
        assert_eq!(ids(&sort(&items, SortOption::RatingDesc)), ["b", "a", "c", "d"]);
    }

    #[test]
    fn input_is_left_untouched() {
        let catalog = Catalog::demo().unwrap();
        let items: Vec<_> = catalog.products().iter().collect();
        let before = ids(&items);
        let _ = sort(&items, SortOption::PriceAsc);
        assert_eq!(ids(&items), before);
    }

    #[test]
    fn parses_wire_names() {
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>().unwrap(), option);
        }
        assert!(matches!(
            "newest".parse::<SortOption>(),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(
            serde_json::to_string(&SortOption::RatingDesc).unwrap(),
            "\"rating_desc\""
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: sorting is deterministic and equal keys keep input order.
        #[test]
        fn sorting_is_stable(
            keys in prop::collection::vec((0u64..5, 0u16..=5), 0..20),
            option in prop::sample::select(SortOption::ALL.to_vec()),
        ) {
            let products: Vec<Product> = keys
                .iter()
                .enumerate()
                .map(|(i, (cents, rating))| product(&format!("p{i:02}"), *cents, *rating * 100))
                .collect();
            let items: Vec<_> = products.iter().collect();

            let once = sort(&items, option);
            let twice = sort(&items, option);
            prop_assert_eq!(&once, &twice);

            let position = |p: &Product| items.iter().position(|q| q.id == p.id).unwrap();
            for pair in once.windows(2) {
                let same_key = match option {
                    SortOption::Relevance => false,
                    SortOption::PriceAsc | SortOption::PriceDesc => pair[0].price == pair[1].price,
                    SortOption::RatingDesc => pair[0].rating == pair[1].rating,
                };
                if same_key {
                    prop_assert!(position(pair[0]) < position(pair[1]));
                }
            }
        }
    }
}
