//! chained-hashmap: an integer-keyed separate-chaining hash map, plus two
//! small companion containers (a singly linked list and a fixed-capacity
//! array).
//!
//! Internal Design:
//!
//! Summary
//! - `ChainedHashMap<K, V>`: one bucket per index, each holding the head of
//!   a singly linked chain. Keys are primitive integers placed by
//!   `key mod capacity`. The table doubles as soon as the load factor
//!   reaches one half.
//! - `SinglyLinkedList<T>`: Box-owned nodes addressed by position.
//! - `FixedArray<T>`: bounded array that refuses to grow.
//!
//! Storage
//! - Chain nodes live in a `slotmap` arena; buckets and `next` links hold
//!   arena keys rather than pointers. Unlinking is a key rewrite plus an
//!   arena removal, and no node is reachable from two chains.
//! - Resize relinks the existing nodes into a fresh bucket array instead of
//!   copying them, so arena keys are stable for the life of an entry.
//!   Entries that share a new bucket keep their previous relative order.
//!
//! Keys
//! - Bucket placement uses the Euclidean remainder, so negative keys are
//!   valid and land in `0..capacity` like any other key.
//!
//! Absence and errors
//! - Misses are reported with `Option`/`bool`; there is no sentinel value.
//! - `Error` covers zero-capacity construction and fixed-capacity
//!   violations only.
//!
//! Constraints
//! - Single-threaded and synchronous. Every mutation takes `&mut self`, so
//!   no caller can observe a table mid-resize.
//! - Capacity never shrinks; `clear` keeps the grown bucket array.
//!
//! Logging
//! - Emits through the `log` facade: `debug` on every resize and `trace`
//!   on insert/overwrite/remove. Installing a logger is up to the binary.

mod bucket_key;
pub mod chained_hash_map;
mod chained_hash_map_proptest;
mod error;
pub mod fixed_array;
pub mod linked_list;

// Public surface
pub use bucket_key::BucketKey;
pub use chained_hash_map::{ChainedHashMap, DEFAULT_CAPACITY};
pub use error::{Error, Result};
pub use fixed_array::FixedArray;
pub use linked_list::SinglyLinkedList;
