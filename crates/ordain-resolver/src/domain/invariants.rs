//! Domain invariants for order resolution.
//!
//! Checkable predicates over a resolved order, shared by unit and property
//! tests.

use super::entities::DeclaredItem;
use super::value_objects::{Directive, ItemName};
use std::collections::{HashMap, HashSet};

/// INVARIANT-1: Permutation
/// The resolved order contains every declared name exactly once and nothing
/// else.
pub fn invariant_permutation(items: &[DeclaredItem], order: &[ItemName]) -> bool {
    if items.len() != order.len() {
        return false;
    }

    let declared: HashSet<&str> = items.iter().map(|item| item.name.as_str()).collect();
    let resolved: HashSet<&str> = order.iter().map(String::as_str).collect();

    resolved.len() == order.len() && declared == resolved
}

/// INVARIANT-2: Group Boundaries
/// `First` items form the head of the order in declaration order, `Last`
/// items the tail in declaration order.
pub fn invariant_group_boundaries(items: &[DeclaredItem], order: &[ItemName]) -> bool {
    if items.len() != order.len() {
        return false;
    }

    let first: Vec<&str> = items
        .iter()
        .filter(|item| item.directive == Directive::First)
        .map(|item| item.name.as_str())
        .collect();
    let last: Vec<&str> = items
        .iter()
        .filter(|item| item.directive == Directive::Last)
        .map(|item| item.name.as_str())
        .collect();

    let head_ok = order[..first.len()]
        .iter()
        .map(String::as_str)
        .eq(first.iter().copied());
    let tail_ok = order[order.len() - last.len()..]
        .iter()
        .map(String::as_str)
        .eq(last.iter().copied());

    head_ok && tail_ok
}

/// INVARIANT-3: Relative Satisfaction
/// Every before/after declaration between two middle items holds in the
/// resolved order. Targets pinned `First` or `Last` carry no precedence
/// obligation and are not checked.
pub fn invariant_relative_satisfaction(items: &[DeclaredItem], order: &[ItemName]) -> bool {
    let position: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(index, name)| (name.as_str(), index))
        .collect();
    let middle = middle_names(items);

    for item in items {
        let Directive::Relative { before, after } = &item.directive else {
            continue;
        };
        let Some(&at) = position.get(item.name.as_str()) else {
            return false;
        };

        if let Some(target) = before {
            if middle.contains(target.as_str()) {
                match position.get(target.as_str()) {
                    Some(&target_at) if at < target_at => {}
                    _ => return false,
                }
            }
        }
        if let Some(target) = after {
            if middle.contains(target.as_str()) {
                match position.get(target.as_str()) {
                    Some(&target_at) if target_at < at => {}
                    _ => return false,
                }
            }
        }
    }

    true
}

/// INVARIANT-4: Baseline Stability
/// Middle items that touch no constraint edge keep their baseline relative
/// order. An item touches an edge when it declares a relative side against
/// another middle item, or is itself the middle target of one.
pub fn invariant_baseline_stability(items: &[DeclaredItem], order: &[ItemName]) -> bool {
    let position: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(index, name)| (name.as_str(), index))
        .collect();
    let middle = middle_names(items);

    let mut touched: HashSet<&str> = HashSet::new();
    for item in items {
        let Directive::Relative { before, after } = &item.directive else {
            continue;
        };
        for target in [before, after].into_iter().flatten() {
            if middle.contains(target.as_str()) {
                touched.insert(item.name.as_str());
                touched.insert(target.as_str());
            }
        }
    }

    let free: Vec<&str> = items
        .iter()
        .filter(|item| item.directive.is_middle() && !touched.contains(item.name.as_str()))
        .map(|item| item.name.as_str())
        .collect();

    // Declaration order of the free items must survive into the output.
    free.windows(2).all(|pair| {
        match (position.get(pair[0]), position.get(pair[1])) {
            (Some(earlier), Some(later)) => earlier < later,
            _ => false,
        }
    })
}

fn middle_names(items: &[DeclaredItem]) -> HashSet<&str> {
    items
        .iter()
        .filter(|item| item.directive.is_middle())
        .map(|item| item.name.as_str())
        .collect()
}
