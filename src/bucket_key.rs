//! Integer keys and their bucket placement.
//!
//! A key lands in bucket `key mod capacity`, using the Euclidean remainder
//! so negative keys still map into `0..capacity`. For non-negative keys this
//! is exactly the plain remainder.

use core::fmt::Debug;

/// Key types accepted by [`ChainedHashMap`](crate::ChainedHashMap).
pub trait BucketKey: Copy + Eq + Debug {
    /// Bucket index in `0..capacity`. `capacity` is never zero.
    fn bucket(self, capacity: usize) -> usize;
}

macro_rules! impl_bucket_key_via_i128 {
    ($($t:ty),* $(,)?) => {
        $(
            impl BucketKey for $t {
                #[inline]
                fn bucket(self, capacity: usize) -> usize {
                    debug_assert!(capacity > 0);
                    // Every type here widens to i128 without loss, and so
                    // does any usize capacity.
                    (self as i128).rem_euclid(capacity as i128) as usize
                }
            }
        )*
    };
}

impl_bucket_key_via_i128!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl BucketKey for u128 {
    #[inline]
    fn bucket(self, capacity: usize) -> usize {
        debug_assert!(capacity > 0);
        (self % capacity as u128) as usize
    }
}
