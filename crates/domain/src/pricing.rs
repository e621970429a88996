// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Price quoting for a package plus selected add-ons.
//!
//! ## Invariants
//!
//! - `total = package base price + Σ(price of each known selected add-on)`
//! - `deposit = total × 30%`, rounded half-up on whole currency units
//! - Unknown ids price as zero rather than erroring, so a stale selection
//!   (e.g. a draft rehydrated against a newer catalog) can always be quoted
//!
//! Quoting is pure and cheap; it is safe to recompute on every state change.

use crate::catalog::Catalog;
use crate::types::{AddOnId, PackageId};

/// The deposit rate, as a percentage of the total.
pub const DEPOSIT_RATE_PERCENT: i64 = 30;

/// A computed price for a package/add-on selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// The total price in whole currency units.
    pub total: i64,
    /// The up-front deposit in whole currency units.
    pub deposit: i64,
}

/// Computes the quote for a package and a set of add-on selections.
///
/// Ids not present in the catalog contribute zero. Duplicate add-on ids in
/// the input are counted once per occurrence; callers that maintain the
/// selection as a set never pass duplicates.
///
/// # Arguments
///
/// * `catalog` - The catalog to price against
/// * `package_id` - The selected package
/// * `add_on_ids` - The selected add-ons
#[must_use]
pub fn quote(catalog: &Catalog, package_id: &PackageId, add_on_ids: &[AddOnId]) -> Quote {
    let base: i64 = catalog.package(package_id).map_or(0, |p| p.base_price);

    let extras: i64 = add_on_ids
        .iter()
        .filter_map(|id| catalog.add_on(id))
        .map(|a| a.price)
        .sum();

    let total: i64 = base + extras;

    Quote {
        total,
        deposit: deposit_for(total),
    }
}

/// Computes the deposit for a total, rounding half-up.
#[must_use]
pub const fn deposit_for(total: i64) -> i64 {
    (total * DEPOSIT_RATE_PERCENT + 50) / 100
}
