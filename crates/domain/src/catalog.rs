// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The studio's bookable offering as read-only reference data.
//!
//! The catalog holds packages, add-ons, time slots, and the blocked-date
//! list consulted by the availability filter. It is built once at process
//! start and never mutated; all lookups return `Option` so callers decide
//! per call site whether a miss is an error or a tolerated absence.

use crate::types::{AddOn, AddOnId, Package, PackageId, TimeSlot};
use chrono::NaiveDate;

/// Read-only lookup tables for the studio's offering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    packages: Vec<Package>,
    add_ons: Vec<AddOn>,
    time_slots: Vec<TimeSlot>,
    blocked_dates: Vec<NaiveDate>,
    default_package: PackageId,
}

impl Catalog {
    /// Creates a catalog from explicit parts.
    ///
    /// # Arguments
    ///
    /// * `packages` - The bookable packages (must contain `default_package`)
    /// * `add_ons` - The optional extras
    /// * `time_slots` - The daily start times
    /// * `default_package` - The package pre-selected when a wizard opens
    #[must_use]
    pub const fn new(
        packages: Vec<Package>,
        add_ons: Vec<AddOn>,
        time_slots: Vec<TimeSlot>,
        default_package: PackageId,
    ) -> Self {
        Self {
            packages,
            add_ons,
            time_slots,
            blocked_dates: Vec::new(),
            default_package,
        }
    }

    /// Replaces the blocked-date list.
    #[must_use]
    pub fn with_blocked_dates(mut self, blocked_dates: Vec<NaiveDate>) -> Self {
        self.blocked_dates = blocked_dates;
        self
    }

    /// The studio's published offering.
    ///
    /// Prices are whole currency units. Slot availability is static data:
    /// the early-morning and late-evening slots are kept off the public
    /// calendar.
    #[must_use]
    pub fn standard() -> Self {
        let packages: Vec<Package> = vec![
            Package::new(
                "hourly",
                "Hourly Session",
                "1 hour",
                75,
                "Quick shoots and content refreshes",
                vec![
                    String::from("Full studio access"),
                    String::from("Basic lighting kit"),
                    String::from("Changing room"),
                ],
            ),
            Package::new(
                "half-day",
                "Half Day Session",
                "4 hours",
                250,
                "Product shoots and small campaigns",
                vec![
                    String::from("Full studio access"),
                    String::from("Basic lighting kit"),
                    String::from("Changing room"),
                    String::from("Backdrop selection"),
                ],
            ),
            Package::new(
                "full-day",
                "Full Day Session",
                "8 hours",
                450,
                "Full campaigns, lookbooks, and video productions",
                vec![
                    String::from("Full studio access"),
                    String::from("Pro lighting kit"),
                    String::from("Changing room"),
                    String::from("Backdrop selection"),
                    String::from("Client lounge"),
                ],
            )
            .popular(),
            Package::new(
                "two-day",
                "Two Day Production",
                "2 days",
                850,
                "Extended productions with overnight set hold",
                vec![
                    String::from("Full studio access"),
                    String::from("Pro lighting kit"),
                    String::from("Overnight set hold"),
                    String::from("Client lounge"),
                    String::from("Dedicated parking"),
                ],
            )
            .luxury(),
        ];

        let add_ons: Vec<AddOn> = vec![
            AddOn::new(
                "premium-lighting",
                "Premium Lighting Kit",
                75,
                Some("Profoto strobes with modifiers"),
            ),
            AddOn::new(
                "studio-assistant",
                "Studio Assistant",
                100,
                Some("On-set assistant for the full session"),
            ),
            AddOn::new(
                "equipment-rental",
                "Camera Equipment Rental",
                120,
                Some("Camera body and lens set"),
            ),
            AddOn::new(
                "editing-suite",
                "Editing Suite Access",
                150,
                Some("Post-session editing bay, same day"),
            ),
            AddOn::new("rush-processing", "Rush Processing", 90, None),
        ];

        let time_slots: Vec<TimeSlot> = vec![
            TimeSlot::new("8:00 AM", false),
            TimeSlot::new("9:00 AM", true),
            TimeSlot::new("10:00 AM", true),
            TimeSlot::new("11:00 AM", true),
            TimeSlot::new("12:00 PM", true),
            TimeSlot::new("1:00 PM", true),
            TimeSlot::new("2:00 PM", true),
            TimeSlot::new("3:00 PM", true),
            TimeSlot::new("4:00 PM", true),
            TimeSlot::new("5:00 PM", true),
            TimeSlot::new("6:00 PM", false),
        ];

        Self::new(
            packages,
            add_ons,
            time_slots,
            PackageId::new("full-day"),
        )
    }

    /// Looks up a package by id.
    #[must_use]
    pub fn package(&self, id: &PackageId) -> Option<&Package> {
        self.packages.iter().find(|p| &p.id == id)
    }

    /// Looks up an add-on by id.
    #[must_use]
    pub fn add_on(&self, id: &AddOnId) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| &a.id == id)
    }

    /// Looks up a time slot by its label.
    #[must_use]
    pub fn time_slot(&self, label: &str) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|s| s.label == label)
    }

    /// Returns all packages in display order.
    #[must_use]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Returns all add-ons in display order.
    #[must_use]
    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Returns all time slots in display order.
    #[must_use]
    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    /// Returns the blocked dates consulted by the availability filter.
    #[must_use]
    pub fn blocked_dates(&self) -> &[NaiveDate] {
        &self.blocked_dates
    }

    /// Returns the package pre-selected when a wizard opens.
    #[must_use]
    pub const fn default_package(&self) -> &PackageId {
        &self.default_package
    }
}
