pub type BuildHasher = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;

pub type IndexSet<V> = indexmap::IndexSet<V, BuildHasher>;
pub type HashSet<V> = rustc_hash::FxHashSet<V>;
pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
