/// Returns the fields' values when every one is present and non-empty.
///
/// Whitespace is not trimmed; `" "` counts as present.
pub fn require_all<const N: usize>(fields: [Option<&str>; N]) -> Option<[&str; N]> {
    let mut out = [""; N];
    for (slot, field) in out.iter_mut().zip(fields) {
        match field {
            Some(v) if !v.is_empty() => *slot = v,
            _ => return None,
        }
    }
    Some(out)
}

/// Treats an empty string the same as an absent value.
pub fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|v| !v.is_empty())
}
