// File: src/core/features.rs
use crate::core::types::{round2, FeatureVector, FEATURE_DIM};
use tracing::debug;

/// 32-bit string hash: `h = h * 31 + unit` over UTF-16 code units with
/// two's-complement wrap-around, returning `|h|`.
///
/// The result is `u32` because `|i32::MIN|` does not fit in an `i32`.
pub fn simple_hash(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Folds a sequence into [`FEATURE_DIM`] slots. Position `i` holding `num`
/// adds `sin(hash("{num}{i}")) / 2` to slot `i % FEATURE_DIM`; slots are
/// rounded to two decimals at the end.
pub fn feature_vector(sequence: &[u32]) -> FeatureVector {
    let mut vector = [0.0_f64; FEATURE_DIM];
    for (i, &num) in sequence.iter().enumerate() {
        let hash = simple_hash(&format!("{num}{i}"));
        vector[i % FEATURE_DIM] += f64::from(hash).sin() * 0.5;
    }
    let vector = vector.map(round2);
    debug!(?vector, len = sequence.len(), "feature vector");
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_small_inputs() {
        assert_eq!(simple_hash(""), 0);
        assert_eq!(simple_hash("00"), 1536);
        assert_eq!(simple_hash("10"), 1567);
    }

    #[test]
    fn hash_wraps_like_32_bit_ints() {
        assert_eq!(simple_hash("hello world"), 1_794_106_052);
        assert_eq!(
            simple_hash("the quick brown fox jumps over the lazy dog"),
            2_082_818_701
        );
        assert_eq!(simple_hash("1234567890123"), 869_565_001);
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(simple_hash("开心"), simple_hash("开心"));
    }

    #[test]
    fn empty_sequence_is_all_zero() {
        assert_eq!(feature_vector(&[]), [0.0; FEATURE_DIM]);
    }

    #[test]
    fn length_is_fixed() {
        for len in [1, 7, 8, 9, 64, 301] {
            let seq: Vec<u32> = (0..len).collect();
            assert_eq!(feature_vector(&seq).len(), FEATURE_DIM);
        }
    }

    #[test]
    fn known_vectors() {
        assert_eq!(
            feature_vector(&[1, 2]),
            [0.3, 0.04, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(
            feature_vector(&[0; 10]),
            [-0.38, -0.65, -0.49, -0.19, 0.29, 0.5, 0.25, -0.23]
        );
    }

    #[test]
    fn slots_stay_near_unit_range() {
        let seq: Vec<u32> = (0..40).map(|n| n * 7 + 3).collect();
        let v = feature_vector(&seq);
        assert_eq!(v, feature_vector(&seq));
        // Five contributions of at most 0.5 land in each slot.
        assert!(v.iter().all(|x| x.abs() <= 2.5));
    }
}
