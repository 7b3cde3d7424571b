/// Split `s` on every occurrence of `sep`.
///
/// An empty `sep` splits `s` into its chars (Unicode scalar values), so an
/// empty `s` then gives an empty vector. With a non-empty `sep`, an empty
/// `s` gives `[""]` and adjacent separators give empty pieces.
pub fn explode(s: &str, sep: &str) -> Vec<String> {
    if sep.is_empty() {
        return s.chars().map(String::from).collect();
    }
    s.split(sep).map(String::from).collect()
}
