//! Colspan/rowspan resolution from sentinel cells.
//!
//! A cell whose whole content is `>` extends the cell to its left; `^`
//! extends the cell above. Sentinels are dropped and the extended cell gets
//! the accumulated span. A scan that meets the other sentinel kind stops
//! without assigning anything: spans of different kinds do not combine.

use std::collections::{BTreeMap, BTreeSet};

use crate::parsing::{blocks::kinds::ExtendedTable, tokens::Token};

use super::build::ContentMap;

/// Cell coordinates, `(row, column)`.
pub type CellPos = (usize, usize);

/// Span attributes to set and sentinel cells to remove.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanPlan {
    pub colspans: BTreeMap<CellPos, usize>,
    pub rowspans: BTreeMap<CellPos, usize>,
    pub removed: BTreeSet<CellPos>,
}

impl SpanPlan {
    pub fn is_empty(&self) -> bool {
        self.colspans.is_empty() && self.rowspans.is_empty() && self.removed.is_empty()
    }

    /// Writes the span attributes onto the `td_open` tokens addressed by
    /// `cells` and returns the token indices of the cells to delete.
    pub fn apply(&self, cells: &[Vec<usize>], tokens: &mut [Token]) -> BTreeSet<usize> {
        let index = |&(r, c): &CellPos| cells.get(r).and_then(|row| row.get(c)).copied();

        for (pos, span) in &self.colspans {
            if let Some(i) = index(pos) {
                tokens[i].attrs.set("colspan", span.to_string());
            }
        }
        for (pos, span) in &self.rowspans {
            if let Some(i) = index(pos) {
                tokens[i].attrs.set("rowspan", span.to_string());
            }
        }
        self.removed.iter().filter_map(index).collect()
    }
}

/// Computes the span plan for a padded content map.
pub fn resolve_spans(content: &ContentMap) -> SpanPlan {
    let mut plan = SpanPlan::default();

    for row in 0..content.height() {
        for col in 0..content.width() {
            match content.get(row, col) {
                ExtendedTable::COLSPAN if col > 0 => {
                    plan.removed.insert((row, col));
                    let mut factor = 2;
                    for k in (0..col).rev() {
                        match content.get(row, k) {
                            ExtendedTable::COLSPAN => {
                                plan.removed.insert((row, k));
                                factor += 1;
                            }
                            ExtendedTable::ROWSPAN => break,
                            _ => {
                                plan.colspans.insert((row, k), factor);
                                break;
                            }
                        }
                    }
                }
                ExtendedTable::ROWSPAN if row > 0 => {
                    plan.removed.insert((row, col));
                    let mut factor = 2;
                    for k in (0..row).rev() {
                        match content.get(k, col) {
                            ExtendedTable::ROWSPAN => {
                                plan.removed.insert((k, col));
                                factor += 1;
                            }
                            ExtendedTable::COLSPAN => break,
                            _ => {
                                plan.rowspans.insert((k, col), factor);
                                break;
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }

    if !plan.is_empty() {
        log::trace!(
            "resolved {} colspans, {} rowspans, {} sentinel cells",
            plan.colspans.len(),
            plan.rowspans.len(),
            plan.removed.len()
        );
    }
    plan
}
