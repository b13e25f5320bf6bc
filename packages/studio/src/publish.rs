//! Cosmetic publish references. Nothing is deployed; the reference is only
//! shown back to the user.

use std::fmt;

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random base-36 characters after the domain prefix.
pub const SUFFIX_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishedReference(String);

impl PublishedReference {
    /// `<domain>/<6 random base-36 chars>`.
    pub fn generate<R: Rng + ?Sized>(domain: &str, rng: &mut R) -> Self {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("{}/{suffix}", domain.trim_end_matches('/')))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn suffix(&self) -> &str {
        self.0.rsplit_once('/').map_or("", |(_, suffix)| suffix)
    }
}

impl fmt::Display for PublishedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reference_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let reference = PublishedReference::generate("sitestudio.dev/project", &mut rng);

        assert!(reference.as_str().starts_with("sitestudio.dev/project/"));
        assert_eq!(reference.suffix().len(), SUFFIX_LEN);
        assert!(reference
            .suffix()
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_trailing_slash_in_domain() {
        let mut rng = StdRng::seed_from_u64(1);
        let reference = PublishedReference::generate("example.test/", &mut rng);
        assert!(!reference.as_str().contains("//"));
    }

    #[test]
    fn test_same_seed_same_reference() {
        let a = PublishedReference::generate("d", &mut StdRng::seed_from_u64(42));
        let b = PublishedReference::generate("d", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
