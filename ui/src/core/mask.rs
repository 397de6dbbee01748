//! Privacy masking for identity fields.
//!
//! Masking is one-way and lossy; nothing in the application can undo it.
//! The transforms run exactly once, immediately after load and before the
//! table is cached, so every downstream view (table panel, CSV export) only
//! ever sees masked values.

use super::columns;
use super::table::{DataTable, Value};

/// Replace every whitespace-separated token with its first character plus
/// one asterisk per remaining character. Empty input passes through.
pub fn mask_name(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => {
                    let rest = chars.count();
                    let mut masked = String::with_capacity(rest + 1);
                    masked.push(first);
                    masked.extend(std::iter::repeat('*').take(rest));
                    masked
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Student identifiers keep their first three characters; anything shorter
/// is masked entirely. The suffix is always exactly five asterisks so the
/// output length leaks nothing about the identifier beyond its prefix.
pub fn mask_student_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 3 {
        "*".repeat(chars.len())
    } else {
        let prefix: String = chars[..3].iter().collect();
        format!("{prefix}*****")
    }
}

/// Phone numbers are reduced to digits first; the first three digits stay
/// visible and the rest are masked one asterisk per digit.
pub fn mask_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() <= 3 {
        "*".repeat(digits.len())
    } else {
        let masked = digits.len() - 3;
        format!("{}{}", &digits[..3], "*".repeat(masked))
    }
}

/// Apply all masking passes to the identity columns that exist. The phone
/// pass prefers the WhatsApp column and falls back to the generic phone
/// column, matching the survey's historical layouts.
pub fn apply_masking(table: &mut DataTable) {
    table.map_column(columns::FULL_NAME, |cell| {
        Value::Text(mask_name(&cell.display()))
    });
    table.map_column(columns::STUDENT_ID, |cell| {
        Value::Text(mask_student_id(&cell.display()))
    });

    let phone_column = if table.has_column(columns::WHATSAPP) {
        columns::WHATSAPP
    } else {
        columns::PHONE
    };
    table.map_column(phone_column, |cell| {
        Value::Text(mask_phone(&cell.display()))
    });
}
