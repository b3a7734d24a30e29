use crate::decomposition::{Bag, LabelValue};
use crate::error::{Error, Result};
use ahash::RandomState;
use std::collections::HashMap;

/// A pure, named annotation computed for every tree-decomposition node.
/// Implementors may depend on labels already computed earlier in the same
/// registered list, by name, via `existing`; they must not observe anything
/// about the decomposition beyond the bag they're given.
pub trait LabelingFunction {
    fn name(&self) -> &str;

    fn compute_label(
        &self,
        bag: &Bag,
        existing: &HashMap<String, LabelValue, RandomState>,
    ) -> Result<LabelValue>;

    fn clone_box(&self) -> Box<dyn LabelingFunction>;
}

impl Clone for Box<dyn LabelingFunction> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// `BAG_SIZE(n) = |bag(n)|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BagSize;

impl LabelingFunction for BagSize {
    fn name(&self) -> &str {
        "BAG_SIZE"
    }

    fn compute_label(
        &self,
        bag: &Bag,
        _existing: &HashMap<String, LabelValue, RandomState>,
    ) -> Result<LabelValue> {
        Ok(LabelValue::Usize(bag.len()))
    }

    fn clone_box(&self) -> Box<dyn LabelingFunction> {
        Box::new(*self)
    }
}

/// `BAG_SIZE_TIMES_2(n) = 2 · BAG_SIZE(n)`. Demonstrates chaining: it reads
/// `BAG_SIZE` out of the snapshot rather than recomputing the bag size
/// itself, so it must be registered after [`BagSize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BagSizeTimesTwo;

impl LabelingFunction for BagSizeTimesTwo {
    fn name(&self) -> &str {
        "BAG_SIZE_TIMES_2"
    }

    fn compute_label(
        &self,
        _bag: &Bag,
        existing: &HashMap<String, LabelValue, RandomState>,
    ) -> Result<LabelValue> {
        let prior = existing
            .get("BAG_SIZE")
            .and_then(LabelValue::as_usize)
            .ok_or_else(|| Error::unknown_label("BAG_SIZE"))?;
        Ok(LabelValue::Usize(prior * 2))
    }

    fn clone_box(&self) -> Box<dyn LabelingFunction> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bag_size_times_two_requires_bag_size_first() {
        let empty = HashMap::with_hasher(RandomState::new());
        let bag = Bag::new();
        assert!(BagSizeTimesTwo.compute_label(&bag, &empty).is_err());
    }

    #[test]
    fn bag_size_times_two_chains_off_bag_size() {
        let mut existing = HashMap::with_hasher(RandomState::new());
        existing.insert("BAG_SIZE".to_owned(), LabelValue::Usize(3));
        let bag = Bag::new();
        let value = BagSizeTimesTwo.compute_label(&bag, &existing).unwrap();
        assert_eq!(value.as_usize(), Some(6));
    }
}
