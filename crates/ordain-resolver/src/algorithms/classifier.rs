//! Group classification.
//!
//! Splits declared items into First / Middle / Last groups. Classification
//! looks at nothing but each item's own directive, so it cannot fail.

use crate::domain::entities::{ClassifiedItem, DeclaredItem, GroupPartition};
use crate::domain::value_objects::Directive;

/// Partition items into the three placement groups.
///
/// Baseline indices are assigned from declaration order and drive the
/// stable tie-break later; each group keeps declaration order internally.
pub fn classify_groups(items: &[DeclaredItem]) -> GroupPartition {
    let mut partition = GroupPartition::default();

    for (baseline, item) in items.iter().enumerate() {
        let classified = ClassifiedItem {
            name: item.name.clone(),
            directive: item.directive.clone(),
            baseline,
        };
        match item.directive {
            Directive::First => partition.first.push(classified),
            Directive::Last => partition.last.push(classified),
            Directive::None | Directive::Relative { .. } => partition.middle.push(classified),
        }
    }

    partition
}
