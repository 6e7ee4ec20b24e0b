//! Field validators
//!
//! Plain syntax checks for the three validated employee fields. Name and
//! position are free text and have no validator.

/// Check that an employee ID is exactly three ASCII digits
pub fn is_valid_id(id: &str) -> bool {
    id.len() == 3 && id.bytes().all(|b| b.is_ascii_digit())
}

/// Check a phone number against the `XX-XXX-XXXX` and `XXX-XXXX-XXXX` shapes
pub fn is_valid_phone(phone: &str) -> bool {
    if phone.len() != 11 && phone.len() != 13 {
        return false;
    }

    let parts: Vec<&str> = phone.split('-').collect();
    let [area, prefix, line] = parts.as_slice() else {
        return false;
    };

    if !parts.iter().all(|p| is_digits(p)) {
        return false;
    }

    matches!(area.len(), 2 | 3) && matches!(prefix.len(), 3 | 4) && line.len() == 4
}

/// Check for a minimal `local@domain.tld` shape
///
/// Deliberately loose: the address is split on the last `@`, the local part
/// only has to be non-empty, and the domain needs a dot with a final segment
/// of at least two characters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || !domain.contains('.') {
        return false;
    }

    domain
        .rsplit('.')
        .next()
        .is_some_and(|tld| tld.chars().count() >= 2)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
