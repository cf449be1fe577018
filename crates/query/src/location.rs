//! Router locations for the listing page (`/product-listing?category=audio`).

use url::form_urlencoded;

pub const CATEGORY_PARAM: &str = "category";

/// Shareable location for the listing, optionally scoped to a category.
///
/// The category is lowercased; matching is case-insensitive so the link
/// round-trips to the same results.
pub fn listing_location(listing_path: &str, category: Option<&str>) -> String {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair(CATEGORY_PARAM, &category.to_lowercase())
                .finish();
            format!("{listing_path}?{query}")
        }
        None => listing_path.to_string(),
    }
}

/// Initial category carried by a router location, if any.
///
/// Accepts a bare query (`?category=x`), a path with query, or a full URL.
/// The first non-empty `category` parameter wins.
pub fn category_from_location(location: &str) -> Option<String> {
    let without_fragment = location.split('#').next().unwrap_or_default();
    let (_, query) = without_fragment.split_once('?')?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == CATEGORY_PARAM && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_bare_path_without_category() {
        assert_eq!(listing_location("/product-listing", None), "/product-listing");
        assert_eq!(listing_location("/product-listing", Some("")), "/product-listing");
    }

    #[test]
    fn builds_lowercased_encoded_category() {
        assert_eq!(
            listing_location("/product-listing", Some("Audio")),
            "/product-listing?category=audio"
        );
        assert_eq!(
            listing_location("/product-listing", Some("Smart Home")),
            "/product-listing?category=smart+home"
        );
    }

    #[test]
    fn reads_category_from_locations() {
        assert_eq!(category_from_location("?category=audio").as_deref(), Some("audio"));
        assert_eq!(
            category_from_location("/product-listing?sort=x&category=smart+home#top").as_deref(),
            Some("smart home")
        );
        assert_eq!(
            category_from_location("https://shop.test/product-listing?category=Smart%20Home")
                .as_deref(),
            Some("Smart Home")
        );
    }

    #[test]
    fn missing_or_empty_category_is_none() {
        assert_eq!(category_from_location("/product-listing"), None);
        assert_eq!(category_from_location("/product-listing?category="), None);
        assert_eq!(category_from_location("/product-listing#?category=audio"), None);
    }

    #[test]
    fn built_locations_round_trip() {
        let location = listing_location("/product-listing", Some("Smart Home"));
        assert_eq!(category_from_location(&location).as_deref(), Some("smart home"));
    }
}
