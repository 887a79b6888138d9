/// Converts a run of digits and `.` characters to an `f64`, permissively.
///
/// Only the longest prefix that forms a valid literal (`digits [. digits]`)
/// takes part in the conversion; everything from the second `.` onwards is
/// ignored. A prefix without any digit (such as a lone `.`) converts to
/// `0.0`.
///
/// ## Parameters
/// - `text`: The literal text. Characters other than ASCII digits and `.`
///   end the valid prefix as well.
///
/// ## Returns
/// The converted value. This function never fails.
///
/// ## Example
/// ```
/// use kaleido::util::num::parse_permissive_float;
///
/// assert_eq!(parse_permissive_float("3.14"), 3.14);
/// assert_eq!(parse_permissive_float("1.2.3"), 1.2);
/// assert_eq!(parse_permissive_float("."), 0.0);
/// assert_eq!(parse_permissive_float("5."), 5.0);
/// ```
#[must_use]
pub fn parse_permissive_float(text: &str) -> f64 {
    let mut seen_dot = false;
    let mut seen_digit = false;
    let mut end = 0;

    for (i, c) in text.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return 0.0;
    }

    // `str::parse` accepts `5.` and `.5`, which covers every prefix shape
    // produced above.
    text[..end].parse().unwrap_or(0.0)
}
