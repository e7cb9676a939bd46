//! Share action for upcoming birthdays.
//!
//! Desktop has no native share sheet, so the platform route is a `mailto:`
//! URL handed to the default mail client. When that fails the caller copies
//! the message to the clipboard instead. Either way the user never sees an
//! error; failures are logged only.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::utils::date::format_month_day;

/// Human-readable share message for a birthday.
pub fn share_message(name: &str, next_occurrence: NaiveDate) -> String {
    format!(
        "Hey! {}'s birthday is coming up on {}! Let's plan something! 🎂",
        name,
        format_month_day(next_occurrence)
    )
}

/// Open the share message in the default mail client.
pub fn share_via_mailto(name: &str, next_occurrence: NaiveDate) -> Result<()> {
    let subject = format!("{name}'s Birthday");
    let body = share_message(name, next_occurrence);
    let url = format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    );

    webbrowser::open(&url).context("Failed to open mail client for share")
}
