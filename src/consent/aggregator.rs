use std::sync::Arc;

use crate::consent::category::{CategoryId, CookieCategory};
use crate::consent::error::ConsentError;
use crate::consent::set::ConsentSet;

/// Working set of per-category agreements for one dialog instance.
///
/// Categories are supplied once and never change. The agreed set is always a
/// subset of them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsentAggregator {
    categories: Arc<[CookieCategory]>,
    agreed: ConsentSet,
}

impl ConsentAggregator {
    pub fn new(categories: impl Into<Arc<[CookieCategory]>>) -> Self {
        Self {
            categories: categories.into(),
            agreed: ConsentSet::new(),
        }
    }

    /// Supplied categories, in the order they were offered.
    pub fn categories(&self) -> &[CookieCategory] {
        &self.categories
    }

    pub fn is_offered(&self, id: &CategoryId) -> bool {
        self.categories.iter().any(|c| &c.id == id)
    }

    pub fn is_agreed(&self, id: &CategoryId) -> bool {
        self.agreed.contains(id)
    }

    /// Set membership of `id` to `agree`.
    ///
    /// Already being in the requested state is not an error. Ids that were
    /// not offered are rejected and leave the set untouched.
    pub fn toggle(&mut self, id: &CategoryId, agree: bool) -> Result<(), ConsentError> {
        if !self.is_offered(id) {
            return Err(ConsentError::UnknownCategory { id: id.clone() });
        }
        if agree {
            self.agreed.insert(id.clone());
        } else {
            self.agreed.remove(id);
        }
        Ok(())
    }

    pub fn current_selection(&self) -> ConsentSet {
        self.agreed.clone()
    }

    /// Every offered id, in supplied order.
    pub fn all_ids(&self) -> Vec<CategoryId> {
        self.categories.iter().map(|c| c.id.clone()).collect()
    }

    /// Agreed ids, in supplied order.
    pub fn selected_ids(&self) -> Vec<CategoryId> {
        self.categories
            .iter()
            .filter(|c| self.agreed.contains(&c.id))
            .map(|c| c.id.clone())
            .collect()
    }
}

impl Default for ConsentAggregator {
    fn default() -> Self {
        Self::new(Vec::<CookieCategory>::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> ConsentAggregator {
        ConsentAggregator::new(vec![
            CookieCategory::new("a", "A"),
            CookieCategory::new("b", "B"),
            CookieCategory::new("c", "C"),
        ])
    }

    #[test]
    fn starts_empty() {
        assert!(abc().current_selection().is_empty());
    }

    #[test]
    fn toggle_on_twice_matches_once() {
        let mut once = abc();
        once.toggle(&"a".into(), true).unwrap();
        let mut twice = abc();
        twice.toggle(&"a".into(), true).unwrap();
        twice.toggle(&"a".into(), true).unwrap();
        assert_eq!(once.current_selection(), twice.current_selection());
    }

    #[test]
    fn toggle_off_absent_is_ok() {
        let mut agg = abc();
        agg.toggle(&"b".into(), false).unwrap();
        agg.toggle(&"b".into(), false).unwrap();
        assert!(agg.current_selection().is_empty());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut agg = abc();
        let err = agg.toggle(&"tracking".into(), true).unwrap_err();
        assert_eq!(
            err,
            ConsentError::UnknownCategory {
                id: "tracking".into()
            }
        );
        assert!(agg.current_selection().is_empty());
    }

    #[test]
    fn selected_ids_follow_supplied_order() {
        let mut agg = abc();
        agg.toggle(&"c".into(), true).unwrap();
        agg.toggle(&"a".into(), true).unwrap();
        assert_eq!(agg.selected_ids(), vec!["a".into(), "c".into()]);
    }

    #[test]
    fn selection_stays_within_offered_categories() {
        let mut agg = abc();
        let ids = ["a", "x", "b", "c", "y", "a"];
        for (step, id) in ids.iter().enumerate() {
            let _ = agg.toggle(&CategoryId::from(*id), step % 3 != 2);
            assert!(agg.current_selection().iter().all(|id| agg.is_offered(id)));
        }
    }
}
