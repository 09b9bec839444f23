//! Mobile number rules.

/// Required length of a mobile number, in characters. The content is not
/// checksummed; see `ValidationErrors::exact_len`.
pub const MOBILE_LEN: usize = 10;

/// Mask all but the last four characters, for log lines.
///
/// ```
/// use attendance_domain::mobile::mask_mobile;
/// assert_eq!(mask_mobile("9876543210"), "******3210");
/// assert_eq!(mask_mobile("123"), "***");
/// ```
pub fn mask_mobile(mobile: &str) -> String {
    let chars: Vec<char> = mobile.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible = chars.len() - 4;
    let tail: String = chars[visible..].iter().collect();
    format!("{}{}", "*".repeat(visible), tail)
}
