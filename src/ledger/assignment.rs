use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::domain::BillItem;

/// Person-to-item assignment state for the by-item strategy.
///
/// Every item carries one whole-item flag per person. Items with quantity
/// above one can be expanded, switching that item to per-unit flags; while
/// expanded, whole-item toggles are ignored. Collapsing derives the
/// whole-item flags back from the unit totals, so the two modes never
/// disagree about who is on the hook for an item.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentSheet {
    whole: Vec<Vec<bool>>,
    units: BTreeMap<usize, Vec<Vec<bool>>>,
    expanded: BTreeSet<usize>,
    people_count: usize,
}

impl AssignmentSheet {
    pub fn new(items: &[BillItem], people_count: usize) -> Self {
        let mut sheet = Self {
            whole: Vec::new(),
            units: BTreeMap::new(),
            expanded: BTreeSet::new(),
            people_count,
        };
        sheet.rebuild(items, people_count);
        sheet
    }

    /// Re-sizes the sheet after the item list or person count changed.
    ///
    /// Whole-item flags survive for the positions that still exist; per-unit
    /// flags start over, matching how the original assignment grid behaves
    /// when people join or leave.
    pub fn rebuild(&mut self, items: &[BillItem], people_count: usize) {
        let previous = std::mem::take(&mut self.whole);
        self.whole = items
            .iter()
            .enumerate()
            .map(|(item, _)| {
                (0..people_count)
                    .map(|person| {
                        previous
                            .get(item)
                            .and_then(|row| row.get(person))
                            .copied()
                            .unwrap_or(false)
                    })
                    .collect()
            })
            .collect();

        self.units = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.quantity > 1)
            .map(|(index, item)| {
                let rows = (0..item.quantity)
                    .map(|_| vec![false; people_count])
                    .collect();
                (index, rows)
            })
            .collect();

        self.expanded.retain(|index| self.units.contains_key(index));
        self.people_count = people_count;
    }

    pub fn people_count(&self) -> usize {
        self.people_count
    }

    pub fn is_expanded(&self, item: usize) -> bool {
        self.expanded.contains(&item)
    }

    /// Only multi-quantity items offer per-unit assignment.
    pub fn can_expand(&self, item: usize) -> bool {
        self.units.contains_key(&item)
    }

    pub fn is_assigned(&self, item: usize, person: usize) -> bool {
        self.whole
            .get(item)
            .and_then(|row| row.get(person))
            .copied()
            .unwrap_or(false)
    }

    pub fn unit_assigned(&self, item: usize, unit: usize, person: usize) -> bool {
        self.units
            .get(&item)
            .and_then(|rows| rows.get(unit))
            .and_then(|row| row.get(person))
            .copied()
            .unwrap_or(false)
    }

    /// Flips a whole-item flag; ignored while the item is expanded.
    pub fn toggle_person(&mut self, item: usize, person: usize) {
        if self.is_expanded(item) {
            debug!(item, person, "ignored whole-item toggle on expanded item");
            return;
        }
        match self.whole.get_mut(item).and_then(|row| row.get_mut(person)) {
            Some(flag) => *flag = !*flag,
            None => debug!(item, person, "ignored toggle outside the sheet"),
        }
    }

    /// Flips a per-unit flag; only meaningful while the item is expanded.
    pub fn toggle_unit(&mut self, item: usize, unit: usize, person: usize) {
        if !self.is_expanded(item) {
            debug!(item, unit, "ignored unit toggle on collapsed item");
            return;
        }
        let slot = self
            .units
            .get_mut(&item)
            .and_then(|rows| rows.get_mut(unit))
            .and_then(|row| row.get_mut(person));
        match slot {
            Some(flag) => *flag = !*flag,
            None => debug!(item, unit, person, "ignored unit toggle outside the sheet"),
        }
    }

    /// Expands a multi-quantity item, or collapses it again.
    ///
    /// Collapsing derives the whole-item flags from the unit totals: a
    /// person stays flagged iff they hold at least one unit.
    pub fn toggle_expanded(&mut self, item: usize) {
        if !self.can_expand(item) {
            debug!(item, "ignored expand on single-quantity item");
            return;
        }
        if self.expanded.remove(&item) {
            let rows = &self.units[&item];
            if let Some(flags) = self.whole.get_mut(item) {
                for (person, flag) in flags.iter_mut().enumerate() {
                    *flag = rows.iter().any(|row| row.get(person).copied().unwrap_or(false));
                }
            }
        } else {
            self.expanded.insert(item);
        }
    }

    /// Resolves the effective assigned unit count per item and person.
    ///
    /// Expanded items count each person's flagged units; collapsed items
    /// grant the full quantity to every flagged person.
    pub fn effective_units(&self, items: &[BillItem]) -> Vec<Vec<u32>> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                if self.is_expanded(index) {
                    let rows = &self.units[&index];
                    (0..self.people_count)
                        .map(|person| {
                            rows.iter()
                                .filter(|row| row.get(person).copied().unwrap_or(false))
                                .count() as u32
                        })
                        .collect()
                } else {
                    (0..self.people_count)
                        .map(|person| {
                            if self.is_assigned(index, person) {
                                item.quantity
                            } else {
                                0
                            }
                        })
                        .collect()
                }
            })
            .collect()
    }

    /// True iff at least one item has zero assigned units across all people.
    ///
    /// The gate is permissive: any nonzero assignment satisfies it, so an
    /// expanded item with some units left unassigned still passes.
    pub fn has_unassigned_items(&self, items: &[BillItem]) -> bool {
        self.effective_units(items)
            .iter()
            .any(|row| row.iter().all(|units| *units == 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burger_and_soda() -> Vec<BillItem> {
        vec![
            BillItem::new("Burger", 10.0, 2),
            BillItem::new("Soda", 2.5, 1),
        ]
    }

    #[test]
    fn whole_item_assignment_grants_the_full_quantity() {
        let items = burger_and_soda();
        let mut sheet = AssignmentSheet::new(&items, 2);
        sheet.toggle_person(0, 0);
        sheet.toggle_person(1, 1);

        assert_eq!(sheet.effective_units(&items), vec![vec![2, 0], vec![0, 1]]);
        assert!(!sheet.has_unassigned_items(&items));
    }

    #[test]
    fn expanded_items_count_flagged_units_per_person() {
        let items = burger_and_soda();
        let mut sheet = AssignmentSheet::new(&items, 2);
        sheet.toggle_expanded(0);
        sheet.toggle_unit(0, 0, 0);
        sheet.toggle_unit(0, 1, 0);
        sheet.toggle_person(1, 1);

        assert_eq!(sheet.effective_units(&items), vec![vec![2, 0], vec![0, 1]]);
    }

    #[test]
    fn unassigned_gate_is_permissive_for_partially_assigned_units() {
        let items = vec![BillItem::new("Dumplings", 4.0, 3)];
        let mut sheet = AssignmentSheet::new(&items, 2);
        sheet.toggle_expanded(0);
        sheet.toggle_unit(0, 0, 0);
        sheet.toggle_unit(0, 1, 1);

        // Third unit has nobody, yet the item counts as assigned.
        assert_eq!(sheet.effective_units(&items), vec![vec![1, 1]]);
        assert!(!sheet.has_unassigned_items(&items));
    }

    #[test]
    fn unassigned_gate_trips_on_an_untouched_item() {
        let items = burger_and_soda();
        let mut sheet = AssignmentSheet::new(&items, 2);
        sheet.toggle_person(0, 0);

        assert!(sheet.has_unassigned_items(&items));

        sheet.toggle_person(1, 0);
        assert!(!sheet.has_unassigned_items(&items));
    }

    #[test]
    fn empty_ledger_has_nothing_unassigned() {
        let sheet = AssignmentSheet::new(&[], 2);
        assert!(!sheet.has_unassigned_items(&[]));
    }

    #[test]
    fn whole_toggle_is_ignored_while_expanded() {
        let items = burger_and_soda();
        let mut sheet = AssignmentSheet::new(&items, 2);
        sheet.toggle_expanded(0);
        sheet.toggle_person(0, 0);

        assert_eq!(sheet.effective_units(&items)[0], vec![0, 0]);
    }

    #[test]
    fn collapse_derives_whole_flags_from_unit_totals() {
        let items = burger_and_soda();
        let mut sheet = AssignmentSheet::new(&items, 2);
        sheet.toggle_person(0, 1);
        sheet.toggle_expanded(0);
        sheet.toggle_unit(0, 0, 0);
        sheet.toggle_unit(0, 1, 0);
        sheet.toggle_expanded(0);

        // Person 1's stale pre-expansion flag is gone; person 0 holds units.
        assert!(sheet.is_assigned(0, 0));
        assert!(!sheet.is_assigned(0, 1));
        assert_eq!(sheet.effective_units(&items)[0], vec![2, 0]);
    }

    #[test]
    fn rebuild_preserves_whole_flags_and_resets_units() {
        let items = burger_and_soda();
        let mut sheet = AssignmentSheet::new(&items, 2);
        sheet.toggle_person(0, 0);
        sheet.toggle_expanded(0);
        sheet.toggle_unit(0, 0, 1);

        sheet.rebuild(&items, 3);

        assert_eq!(sheet.people_count(), 3);
        assert!(sheet.is_assigned(0, 0));
        assert!(sheet.is_expanded(0));
        assert!(!sheet.unit_assigned(0, 0, 1));
    }

    #[test]
    fn single_quantity_items_never_expand() {
        let items = burger_and_soda();
        let mut sheet = AssignmentSheet::new(&items, 2);
        sheet.toggle_expanded(1);
        assert!(!sheet.is_expanded(1));
    }
}
