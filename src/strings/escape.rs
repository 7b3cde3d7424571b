/// Quote `s` with backslashes: `'`, `"` and `\` each get a `\` in front.
///
/// Works byte-wise. The three trigger bytes are ASCII and never appear
/// inside a multi-byte UTF-8 sequence, so walking chars is equivalent.
pub fn addslashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        if matches!(c, '\'' | '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
