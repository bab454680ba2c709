use super::payment::PaymentRow;
use super::profile::Profile;

/// Title-case a display name: a letter following a non-letter is upper-cased,
/// every other letter is lower-cased (`mary-JANE o'neil` -> `Mary-Jane O'Neil`)
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous_is_letter = false;

    for c in name.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }

    out
}

/// Normalize the columns later checks read
///
/// Strict sheets get title-cased names and upper-cased currency codes.
/// Lenient sheets pass through untouched.
pub fn normalize(rows: Vec<PaymentRow>, profile: Profile) -> Vec<PaymentRow> {
    if !profile.is_strict() {
        return rows;
    }

    rows.into_iter()
        .map(|mut row| {
            row.first_name = row.first_name.as_deref().map(title_case);
            row.currency = row.currency.to_uppercase();
            row
        })
        .collect()
}
