//! 产品分页缓存

use mini_moka::sync::Cache;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::model::PageKey;

/// 以分页参数为键的 TTL 缓存
///
/// 条目在写入 `ttl` 之后过期，过期条目不会再被返回。任何成功的写操作
/// 都会调用 [`PageCache::clear`]。
#[derive(Clone)]
pub struct PageCache {
    pages: Cache<PageKey, Value>,
    ttl: Duration,
}

impl PageCache {
    pub fn new(ttl: Duration, max_pages: u64) -> Self {
        Self {
            pages: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(max_pages)
                .build(),
            ttl,
        }
    }

    pub fn get(&self, key: &PageKey) -> Option<Value> {
        let hit = self.pages.get(key);
        debug!(page = %key, hit = hit.is_some(), "分页缓存查询");
        hit
    }

    pub fn insert(&self, key: PageKey, page: Value) {
        self.pages.insert(key, page);
    }

    pub fn clear(&self) {
        debug!("清空分页缓存");
        self.pages.invalidate_all();
    }

    /// 近似的条目数量
    pub fn entry_count(&self) -> u64 {
        self.pages.entry_count()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PAGE: PageKey = PageKey {
        offset: 0,
        limit: 50,
    };

    #[test]
    fn test_get_after_insert() {
        let cache = PageCache::new(Duration::from_secs(60), 10);
        assert!(cache.get(&PAGE).is_none());

        cache.insert(PAGE, json!([{"id": 1}]));
        assert_eq!(cache.get(&PAGE), Some(json!([{"id": 1}])));

        let other = PageKey {
            offset: 50,
            limit: 50,
        };
        assert!(cache.get(&other).is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let cache = PageCache::new(Duration::from_secs(60), 10);
        cache.insert(PAGE, json!([1]));
        cache.insert(PAGE, json!([2]));
        assert_eq!(cache.get(&PAGE), Some(json!([2])));
    }

    #[test]
    fn test_clear() {
        let cache = PageCache::new(Duration::from_secs(60), 10);
        cache.insert(PAGE, json!([1]));
        cache.insert(PageKey { offset: 1, limit: 1 }, json!([2]));
        cache.clear();
        assert!(cache.get(&PAGE).is_none());
        assert!(cache.get(&PageKey { offset: 1, limit: 1 }).is_none());
    }

    #[tokio::test]
    async fn test_entries_expire() {
        let cache = PageCache::new(Duration::from_millis(50), 10);
        cache.insert(PAGE, json!([1]));
        assert!(cache.get(&PAGE).is_some());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(cache.get(&PAGE).is_none());
    }
}
