//! Path splitting ahead of field parsing.

/// Final path component. Both `/` and `\` count as separators so that
/// Windows-style paths split the same way on every platform.
pub fn file_name(input: &str) -> &str {
    input.rsplit(['/', '\\']).next().unwrap_or(input)
}

/// Remove `extension` (leading dot included) from the end of `name` if present.
pub fn strip_extension<'a>(name: &'a str, extension: Option<&str>) -> &'a str {
    match extension {
        Some(ext) if !ext.is_empty() => name.strip_suffix(ext).unwrap_or(name),
        _ => name,
    }
}

/// Split a file name at its last dot into stem and extension (dot kept).
/// Names without a dot, or starting with their only dot, have no extension.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(pos) if pos > 0 => (&name[..pos], Some(&name[pos..])),
        _ => (name, None),
    }
}
