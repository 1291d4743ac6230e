/// Whether `needle` occurs in `list`
pub fn in_slice<T: PartialEq>(needle: &T, list: &[T]) -> bool {
    list.contains(needle)
}

/// Whether `needle` equals any string in `list`
pub fn string_in_slice<S: AsRef<str>>(needle: &str, list: &[S]) -> bool {
    list.iter().any(|item| item.as_ref() == needle)
}

pub fn int_in_slice(needle: i64, list: &[i64]) -> bool {
    in_slice(&needle, list)
}
