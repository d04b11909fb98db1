/// Write an iterator of items separated by a delimiter into a string.
pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut first = true;
    for v in values {
        if !first {
            out.push_str(separator);
        }
        first = false;
        f(out, v);
    }
}

/// Largest char boundary of `value` not greater than `index`.
pub fn floor_char_boundary(value: &str, index: usize) -> usize {
    if index >= value.len() {
        return value.len();
    }
    let mut result = index;
    while !value.is_char_boundary(result) {
        result -= 1;
    }
    result
}

#[macro_export]
/// Truncate long strings for logging and error messages purpose.
///
/// Returns a `format_args!` that yields at most 497 bytes from the start of
/// the input, cut on a char boundary, followed by `...` when truncation occurred.
///
/// # Examples
/// ```ignore
/// use cellquery_core::truncate_long;
/// let short = "SELECT 1";
/// assert_eq!(format!("{}", truncate_long!(short)), "SELECT 1");
/// ```
macro_rules! truncate_long {
    ($query:expr) => {
        format_args!(
            "{}{}",
            &$query[..$crate::floor_char_boundary(&$query, 497)].trim(),
            if $query.len() > 497 { "..." } else { "" },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::{floor_char_boundary, separated_by};

    #[test]
    fn separated() {
        let mut out = String::new();
        separated_by(&mut out, ["a", "b", "c"], |out, v| out.push_str(v), ".");
        assert_eq!(out, "a.b.c");

        let mut out = String::from("FROM ");
        separated_by(&mut out, ["", "b"], |out, v| out.push_str(v), ".");
        assert_eq!(out, "FROM .b");
    }

    #[test]
    fn truncate_multibyte() {
        let value = "x".repeat(496) + "étail";
        assert_eq!(floor_char_boundary(&value, 497), 496);
        assert_eq!(floor_char_boundary(&value, 498), 498);
        assert_eq!(floor_char_boundary("abc", 497), 3);
        let truncated = format!("{}", truncate_long!(value));
        assert_eq!(truncated, "x".repeat(496) + "...");
        let truncated = format!("{}", truncate_long!("short"));
        assert_eq!(truncated, "short");
    }
}
