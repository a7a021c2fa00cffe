//! Caching structures built on the keyed containers

mod lru;

pub use lru::LruCache;
