use serde::{Deserialize, Serialize};

/// Most villas a guest can line up side by side.
pub const MAX_COMPARE_VILLAS: usize = 3;

/// Bounded selection of villas for side-by-side comparison. Adding past the
/// bound evicts the oldest entry; duplicates are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonSet {
    villa_ids: Vec<String>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, villa_id: impl Into<String>) {
        let villa_id = villa_id.into();
        if self.contains(&villa_id) {
            return;
        }
        if self.villa_ids.len() >= MAX_COMPARE_VILLAS {
            self.villa_ids.remove(0);
        }
        self.villa_ids.push(villa_id);
    }

    pub fn remove(&mut self, villa_id: &str) {
        self.villa_ids.retain(|id| id != villa_id);
    }

    pub fn clear(&mut self) {
        self.villa_ids.clear();
    }

    pub fn contains(&self, villa_id: &str) -> bool {
        self.villa_ids.iter().any(|id| id == villa_id)
    }

    pub fn villa_ids(&self) -> &[String] {
        &self.villa_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut set = ComparisonSet::new();
        set.add("v1");
        set.add("v2");
        set.add("v3");
        set.add("v4");
        assert_eq!(set.villa_ids(), ["v2", "v3", "v4"]);
        assert!(!set.contains("v1"));
    }

    #[test]
    fn test_duplicates_are_ignored() {
        let mut set = ComparisonSet::new();
        set.add("v1");
        set.add("v1");
        assert_eq!(set.villa_ids().len(), 1);
    }
}
