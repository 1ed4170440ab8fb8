// src/core/sanitize.rs

/// Collapse whitespace runs to a single space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Keep only ASCII digits and parse them; no digits at all is 0.
///
/// Signs and decimal points are dropped along with every other non-digit,
/// so `"-3"` is 3 and `"1.5"` is 15. Stats on the page are plain counts.
/// Values past `u32::MAX` saturate.
pub fn clean_int(text: &str) -> u32 {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d))
}

/// Three characters, all uppercase: a nationality code such as `NED` sitting
/// next to the driver's name.
pub fn is_nation_code(fragment: &str) -> bool {
    fragment.chars().count() == 3
        && fragment.chars().any(char::is_alphabetic)
        && !fragment.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_int_strips_noise() {
        assert_eq!(clean_int(""), 0);
        assert_eq!(clean_int("P12."), 12);
        assert_eq!(clean_int(" 25 pts"), 25);
        assert_eq!(clean_int("DQ"), 0);
        assert_eq!(clean_int("-7"), 7);
        assert_eq!(clean_int("1.5"), 15);
        assert_eq!(clean_int("007"), 7);
    }

    #[test]
    fn clean_int_saturates_instead_of_zeroing() {
        assert_eq!(clean_int("4294967295"), u32::MAX);
        assert_eq!(clean_int("4294967296"), u32::MAX);
        assert_eq!(clean_int("99999999999999999999 pts"), u32::MAX);
        assert_eq!(clean_int("0000000000000000000042"), 42);
    }

    #[test]
    fn clean_int_is_stable_on_its_output() {
        for x in ["", "P12.", "abc", "3rd", "1,024", "99999999999999999999"] {
            let once = clean_int(x);
            assert_eq!(clean_int(&once.to_string()), once, "input {x:?}");
        }
    }

    #[test]
    fn nation_codes() {
        assert!(is_nation_code("NED"));
        assert!(is_nation_code("GBR"));
        assert!(!is_nation_code("Max"));
        assert!(!is_nation_code("VERS"));
        assert!(!is_nation_code("123"));
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  Max \n\t Verstappen "), "Max Verstappen");
    }
}
