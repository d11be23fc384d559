//! Compiled pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::ast::DatePattern;
use crate::error::ParseError;

/// Global cache for compiled date patterns.
static CACHE: Mutex<Option<LruCache<String, DatePattern>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(n) => n,
    None => panic!("cache size must be non-zero"),
};

/// Get or compile a date pattern, using the cache.
pub fn get_or_parse(pattern: &str) -> Result<DatePattern, ParseError> {
    let mut cache_guard = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(compiled) = cache.get(pattern) {
        return Ok(compiled.clone());
    }

    log::trace!("compiling date pattern {pattern:?}");
    let compiled = DatePattern::parse(pattern)?;
    cache.put(pattern.to_string(), compiled.clone());
    Ok(compiled)
}
