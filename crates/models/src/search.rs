//! Case folding shared by stored search columns and search input.

/// Unicode lowercase form used for case-insensitive substring search. Stored
/// alongside searchable text so every backend compares the same folding.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_non_ascii_letters() {
        assert_eq!(fold_case("СКЛО Віконне"), "скло віконне");
        assert_eq!(fold_case("AA1234BB"), "aa1234bb");
    }
}
