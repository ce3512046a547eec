use std::collections::HashMap;

use crate::{domain::ReportPayload, errors::Result};

use super::{CacheKey, CacheStore};

/// Process-local cache; entries live as long as the store.
#[derive(Debug, Default, Clone)]
pub struct MemoryCache {
    entries: HashMap<CacheKey, ReportPayload>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CacheStore for MemoryCache {
    fn has(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &CacheKey) -> Result<Option<ReportPayload>> {
        Ok(self.entries.get(key).cloned())
    }

    fn store(&mut self, key: CacheKey, payload: ReportPayload) -> Result<()> {
        self.entries.insert(key, payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cache::CacheProperties, domain::SummarizedReport};

    #[test]
    fn stored_payload_is_returned() {
        let mut cache = MemoryCache::new();
        let key = CacheProperties::new("yearInOutSummarized").key().unwrap();
        assert!(!cache.has(&key));
        assert_eq!(cache.get(&key).unwrap(), None);

        let payload = ReportPayload::Summarized(SummarizedReport::default());
        cache.store(key.clone(), payload.clone()).unwrap();
        assert!(cache.has(&key));
        assert_eq!(cache.get(&key).unwrap(), Some(payload));
        assert_eq!(cache.len(), 1);
    }
}
