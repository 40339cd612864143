//! Hash-map and hash-set aliases used throughout this crate.

/// Hashmap using [`hashbrown::HashMap`]
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;

/// Hashset using [`hashbrown::HashSet`]
pub type HashSet<K> = hashbrown::HashSet<K>;
