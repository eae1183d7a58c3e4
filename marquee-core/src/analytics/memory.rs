//! In-memory analytics backend for development mode and tests.

use async_trait::async_trait;
use marquee_search::Movie;
use parking_lot::RwLock;

use super::{AnalyticsError, NewTrendingRecord, SearchAnalytics, TrendingRecord};

/// Search tallies held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryAnalytics {
    records: RwLock<Vec<TrendingRecord>>,
}

impl InMemoryAnalytics {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with records.
    pub fn with_records(records: Vec<TrendingRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Snapshot of all records in insertion order.
    pub fn records(&self) -> Vec<TrendingRecord> {
        self.records.read().clone()
    }
}

#[async_trait]
impl SearchAnalytics for InMemoryAnalytics {
    async fn record_search(&self, search_term: &str, movie: &Movie) -> Result<(), AnalyticsError> {
        let mut records = self.records.write();

        if let Some(record) = records
            .iter_mut()
            .find(|record| record.search_term == search_term)
        {
            record.count += 1;
            return Ok(());
        }

        let id = uuid::Uuid::new_v4().simple().to_string();
        records.push(NewTrendingRecord::from_search(search_term, movie).into_record(id));
        Ok(())
    }

    async fn top_searches(&self, limit: usize) -> Result<Vec<TrendingRecord>, AnalyticsError> {
        let mut records = self.records();
        // stable sort keeps first-recorded terms ahead on ties
        records.sort_by(|a, b| b.count.cmp(&a.count));
        records.truncate(limit);
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
