use super::error::EngineError;
use crate::core::chemistry::ph::{self, ColorBucket, PhEstimate};
use crate::core::models::substance::{AcidBaseSubstance, SubstanceKind};
use tracing::trace;

/// A named acid/base mixture owned by one session.
///
/// The pH and color bucket are private and only written by [`Solution::recompute`], which
/// every mutator calls, so they always reflect the current acid and base lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    name: String,
    acids: Vec<AcidBaseSubstance>,
    bases: Vec<AcidBaseSubstance>,
    estimate: PhEstimate,
}

impl Default for Solution {
    fn default() -> Self {
        Self::new("Untitled Solution")
    }
}

impl Solution {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            acids: Vec::new(),
            bases: Vec::new(),
            estimate: PhEstimate::neutral(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn acids(&self) -> &[AcidBaseSubstance] {
        &self.acids
    }

    pub fn bases(&self) -> &[AcidBaseSubstance] {
        &self.bases
    }

    pub fn ph(&self) -> f64 {
        self.estimate.ph
    }

    pub fn color_bucket(&self) -> ColorBucket {
        self.estimate.color_bucket
    }

    pub fn estimate(&self) -> PhEstimate {
        self.estimate
    }

    pub fn is_empty(&self) -> bool {
        self.acids.is_empty() && self.bases.is_empty()
    }

    /// Adds a substance to the list matching its kind.
    pub fn add(&mut self, substance: AcidBaseSubstance) {
        match substance.kind {
            SubstanceKind::Acid => self.acids.push(substance),
            SubstanceKind::Base => self.bases.push(substance),
        }
        self.recompute();
    }

    pub fn add_acid(&mut self, substance: AcidBaseSubstance) -> Result<(), EngineError> {
        self.add_checked(substance, SubstanceKind::Acid)
    }

    pub fn add_base(&mut self, substance: AcidBaseSubstance) -> Result<(), EngineError> {
        self.add_checked(substance, SubstanceKind::Base)
    }

    fn add_checked(
        &mut self,
        substance: AcidBaseSubstance,
        expected: SubstanceKind,
    ) -> Result<(), EngineError> {
        if substance.kind != expected {
            return Err(EngineError::KindMismatch {
                id: substance.id,
                expected,
            });
        }
        self.add(substance);
        Ok(())
    }

    pub fn remove_acid(&mut self, index: usize) -> Result<AcidBaseSubstance, EngineError> {
        self.remove(SubstanceKind::Acid, index)
    }

    pub fn remove_base(&mut self, index: usize) -> Result<AcidBaseSubstance, EngineError> {
        self.remove(SubstanceKind::Base, index)
    }

    fn remove(
        &mut self,
        kind: SubstanceKind,
        index: usize,
    ) -> Result<AcidBaseSubstance, EngineError> {
        let list = match kind {
            SubstanceKind::Acid => &mut self.acids,
            SubstanceKind::Base => &mut self.bases,
        };
        if index >= list.len() {
            return Err(EngineError::IndexOutOfRange {
                kind,
                index,
                len: list.len(),
            });
        }
        let removed = list.remove(index);
        self.recompute();
        Ok(removed)
    }

    /// Empties both lists; the name is kept.
    pub fn clear(&mut self) {
        self.acids.clear();
        self.bases.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.estimate = ph::estimate(&self.acids, &self.bases);
        trace!(
            solution = %self.name,
            ph = self.estimate.ph,
            bucket = %self.estimate.color_bucket,
            "Recomputed solution pH"
        );
    }
}
