use super::HASH_SEED;

/// Toy string digest used for block hashes. NOT collision resistant.
///
/// Starts from [`HASH_SEED`] and folds every character in order:
/// `acc = acc * c + c`, wrapping at 32 bits. The empty string therefore
/// hashes to the seed itself.
pub fn hash(input: &str) -> i32 {
    input.chars().fold(HASH_SEED, |acc, ch| {
        let c = ch as i32;
        acc.wrapping_mul(c).wrapping_add(c)
    })
}

#[cfg(test)]
mod tests {
    use super::hash;

    #[test]
    fn empty_string_hashes_to_seed() {
        assert_eq!(hash(""), 10000000);
    }

    #[test]
    fn laboon_vector() {
        assert_eq!(format!("{:08x}", hash("laboon")), "4e4587d6");
    }

    #[test]
    fn single_space_uses_its_code_point() {
        assert_eq!(format!("{:08x}", hash(" ")), "1312d020");
    }

    #[test]
    fn deterministic() {
        let text = "kitten|00000000|000016f2";
        assert_eq!(hash(text), hash(text));
    }

    #[test]
    fn order_sensitive() {
        assert_ne!(hash("ab"), hash("ba"));
    }

    #[test]
    fn long_input_wraps_instead_of_panicking() {
        let long = "z".repeat(10_000);
        // overflow is defined behaviour; just make sure it is stable
        assert_eq!(hash(&long), hash(&long));
    }

    #[test]
    fn non_ascii_uses_scalar_value() {
        let expected = 10000000i32.wrapping_mul(0xe9).wrapping_add(0xe9);
        assert_eq!(hash("é"), expected);
    }
}
