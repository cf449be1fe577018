//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Listing inputs
/// (filters, sort choice, page) are modelled this way: a change produces a new
/// value that replaces the old one wholesale.
///
/// Example:
/// - `Price(99_999)` is a value object
/// - `Product { id: ProductId("plp001"), .. }` is an entity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Swap `next` into `slot` wholesale. Returns whether the value changed.
pub fn replace<V: ValueObject>(slot: &mut V, next: V) -> bool {
    if *slot == next {
        return false;
    }
    *slot = next;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Money {
        amount: i64,
        currency: &'static str,
    }

    impl ValueObject for Money {}

    #[test]
    fn replace_reports_only_real_changes() {
        let mut held = Money { amount: 100, currency: "USD" };

        assert!(!replace(&mut held, Money { amount: 100, currency: "USD" }));
        assert!(replace(&mut held, Money { amount: 250, currency: "USD" }));
        assert_eq!(held, Money { amount: 250, currency: "USD" });
    }
}
