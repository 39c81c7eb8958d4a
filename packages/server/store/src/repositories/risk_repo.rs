use domain::entities::{Assessment, RiskRecord};
use domain::scoring::Level;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    /// Last id handed out. Ids are never reused, even after a clear.
    last_id: i64,
    risks: BTreeMap<i64, RiskRecord>,
}

#[derive(Default)]
pub struct RiskRepository {
    inner: RwLock<Inner>,
}

impl RiskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, assessment: &Assessment) -> RiskRecord {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let record = RiskRecord::record(inner.last_id, assessment);
        inner.risks.insert(record.id, record.clone());
        record
    }

    /// All risks ordered by id, optionally restricted to one level.
    pub async fn list(&self, level: Option<Level>) -> Vec<RiskRecord> {
        let inner = self.inner.read().await;
        inner
            .risks
            .values()
            .filter(|r| level.map_or(true, |l| r.level == l))
            .cloned()
            .collect()
    }

    pub async fn find_by_id(&self, id: i64) -> Option<RiskRecord> {
        self.inner.read().await.risks.get(&id).cloned()
    }

    /// Returns false when no risk had this id.
    pub async fn delete(&self, id: i64) -> bool {
        self.inner.write().await.risks.remove(&id).is_some()
    }

    /// Removes every risk and reports how many were dropped.
    pub async fn delete_all(&self) -> usize {
        let mut inner = self.inner.write().await;
        let removed = inner.risks.len();
        inner.risks.clear();
        tracing::info!(removed, "Cleared risk collection");
        removed
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.risks.len()
    }
}
