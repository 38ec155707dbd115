use lazy_static::*;

use crate::BigNat;
use crate::big_nat_constants::*;

lazy_static! {
    pub static ref SMALL_CACHE: [BigNat; MAX_CONSTANT + 1] = std::array::from_fn(|value| {
        // 0..=16 is at most two digits, least-significant first
        let radix = RADIX as usize;
        let digits = if value < radix {
            vec![value as u8]
        } else {
            vec![(value % radix) as u8, (value / radix) as u8]
        };
        BigNat::from_raw(digits)
    });
}

#[test]
fn test_small_cache() {
    for (value, cached) in SMALL_CACHE.iter().enumerate() {
        assert_eq!(cached.to_string(), value.to_string());
        assert_eq!(cached.num_digits(), value.to_string().len());
    }
}
