//! Naming transforms from type and member names to schema identifiers

use regex::Regex;
use std::cmp::Ordering;

// Any character followed by an upper-case letter; matches do not overlap
static WORD_BOUNDARY: std::sync::LazyLock<Result<Regex, regex::Error>> =
    std::sync::LazyLock::new(|| Regex::new(r"(.)(\p{Lu})"));

/// Separator between words of a schema identifier
pub const SEPARATOR: char = '_';

/// Convert a camel-case name to an upper-case schema identifier
///
/// ```
/// use ormgen_core::naming::schema_name;
///
/// assert_eq!(schema_name("ProductDesign"), "PRODUCT_DESIGN");
/// assert_eq!(schema_name("associatedProducts"), "ASSOCIATED_PRODUCTS");
/// ```
#[must_use]
pub fn schema_name(name: &str) -> String {
    let separated = match *WORD_BOUNDARY {
        Ok(ref pattern) => pattern
            .replace_all(name, format!("${{1}}{SEPARATOR}${{2}}").as_str())
            .into_owned(),
        Err(_) => name.to_string(),
    };
    separated.to_uppercase()
}

/// Lower-case the first character of a name, leaving the rest untouched
#[must_use]
pub fn instance_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of the join table linking two types
///
/// The schema names are compared case-insensitively and the later one is
/// listed first, so the argument order never changes the result.
#[must_use]
pub fn join_table_name(a: &str, b: &str) -> String {
    let a = schema_name(a);
    let b = schema_name(b);
    let (first, second) = match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Less => (b, a),
        Ordering::Greater | Ordering::Equal => (a, b),
    };
    format!("{first}{SEPARATOR}{second}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_schema_name() {
        assert_eq!(schema_name("ProductDesign"), "PRODUCT_DESIGN");
        assert_eq!(schema_name("Account"), "ACCOUNT");
        assert_eq!(schema_name("homeAddress"), "HOME_ADDRESS");
        assert_eq!(schema_name("id"), "ID");
        assert_eq!(schema_name(""), "");
    }

    #[test]
    fn test_schema_name_splits_upper_case_runs_pairwise() {
        // Each match consumes two characters, so a run of capitals is
        // split only at every other boundary
        assert_eq!(schema_name("URLValue"), "U_RL_VALUE");
        assert_eq!(schema_name("ABC"), "A_BC");
    }

    #[test]
    fn test_instance_name() {
        assert_eq!(instance_name("ProductDesign"), "productDesign");
        assert_eq!(instance_name("order"), "order");
        assert_eq!(instance_name("X"), "x");
        assert_eq!(instance_name(""), "");
    }

    #[test]
    fn test_join_table_name_orders_later_name_first() {
        assert_eq!(join_table_name("Account", "CreditCard"), "CREDIT_CARD_ACCOUNT");
        assert_eq!(join_table_name("CreditCard", "Account"), "CREDIT_CARD_ACCOUNT");
        assert_eq!(join_table_name("Item", "Item"), "ITEM_ITEM");
    }

    proptest! {
        #[test]
        fn prop_join_table_name_is_symmetric(
            a in "[A-Z][a-zA-Z]{0,12}",
            b in "[A-Z][a-zA-Z]{0,12}"
        ) {
            prop_assert_eq!(join_table_name(&a, &b), join_table_name(&b, &a));
        }

        #[test]
        fn prop_schema_name_is_upper_case_and_stable(name in "[a-zA-Z]{0,16}") {
            let once = schema_name(&name);
            prop_assert_eq!(once.clone(), once.to_uppercase());
            prop_assert_eq!(schema_name(&name), once);
        }

        #[test]
        fn prop_instance_name_keeps_tail(name in "[A-Z][a-zA-Z]{0,12}") {
            let converted = instance_name(&name);
            prop_assert_eq!(&converted[1..], &name[1..]);
            prop_assert!(converted.starts_with(|c: char| c.is_lowercase()));
        }
    }
}
