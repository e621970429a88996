// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The downloadable plain-text booking confirmation.
//!
//! Pure formatting over a well-formed booking record; no validation
//! happens here.

use knows_booking::BookingRecord;
use std::fmt::Write as _;

/// The studio name as it appears on documents.
const STUDIO_NAME: &str = "KNOWS STUDIOS";

/// The studio's street address lines.
const STUDIO_ADDRESS: [&str; 2] = ["2847 Meridian Avenue, Suite 12", "Portland, OR 97211"];

/// The studio's contact footer line.
const STUDIO_CONTACT: &str = "(503) 555-0172 | hello@knowsstudios.com";

/// Renders the fixed confirmation template for a booking record.
#[must_use]
pub fn render_confirmation_text(record: &BookingRecord) -> String {
    let mut doc: String = String::new();

    let _ = writeln!(doc, "{STUDIO_NAME}");
    let _ = writeln!(doc, "Booking Confirmation");
    let _ = writeln!(doc, "=====================================");
    let _ = writeln!(doc);
    let _ = writeln!(doc, "Confirmation Number: {}", record.confirmation_number);
    let _ = writeln!(doc, "Date: {}", record.date.format("%B %-d, %Y"));
    let _ = writeln!(doc, "Time: {}", record.time_slot);
    let _ = writeln!(doc);
    let _ = writeln!(
        doc,
        "Package: {} ({})",
        record.package_name, record.package_duration
    );
    if record.add_ons.is_empty() {
        let _ = writeln!(doc, "Add-ons: none");
    } else {
        let _ = writeln!(doc, "Add-ons:");
        for add_on in &record.add_ons {
            let _ = writeln!(doc, "  - {} (${})", add_on.name, add_on.price);
        }
    }
    let _ = writeln!(doc, "Total: ${}", record.total);
    let _ = writeln!(doc, "Deposit Due: ${}", record.deposit);
    let _ = writeln!(doc);
    let _ = writeln!(doc, "Client: {}", record.contact.name);
    let _ = writeln!(doc, "Email: {}", record.contact.email);
    let _ = writeln!(doc, "Phone: {}", record.contact.phone);
    if !record.contact.project_notes.trim().is_empty() {
        let _ = writeln!(doc, "Project: {}", record.contact.project_notes);
    }
    let _ = writeln!(doc);
    let _ = writeln!(doc, "{STUDIO_NAME}");
    for line in STUDIO_ADDRESS {
        let _ = writeln!(doc, "{line}");
    }
    let _ = writeln!(doc, "{STUDIO_CONTACT}");

    doc
}

/// The download filename for a booking's confirmation document.
#[must_use]
pub fn confirmation_filename(record: &BookingRecord) -> String {
    format!(
        "KNOWS-STUDIOS-Confirmation-{}.txt",
        record.confirmation_number
    )
}
