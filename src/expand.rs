//! Shell-style variable expansion against a caller-supplied context.
//!
//! Replaces `$NAME` and `${NAME}` references in a directive's command text.
//! The lookup is explicit rather than reading the process environment
//! directly, so substitution is unit-testable and concurrent walks in one
//! process cannot observe each other's variables.

/// Expand `$NAME` and `${NAME}` references in `template`.
///
/// Unknown variables expand to the empty string. A `$` not followed by a name
/// or `{` is kept literally, as is an unterminated `${`. Bare names are
/// `[A-Za-z_][A-Za-z0-9_]*`.
pub fn expand<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => {
                    out.push_str(&lookup(&braced[..end]).unwrap_or_default());
                    rest = &braced[end + 1..];
                }
                None => {
                    // Unterminated reference stays as written.
                    out.push_str(&rest[dollar..]);
                    rest = "";
                }
            }
        } else {
            let name_len = bare_name_len(after);
            if name_len == 0 {
                out.push('$');
                rest = after;
            } else {
                out.push_str(&lookup(&after[..name_len]).unwrap_or_default());
                rest = &after[name_len..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Length of the leading variable name in `s`, or 0 if `s` does not start
/// with one.
fn bare_name_len(s: &str) -> usize {
    let mut len = 0;
    for (i, c) in s.char_indices() {
        let valid = if i == 0 {
            c.is_ascii_alphabetic() || c == '_'
        } else {
            c.is_ascii_alphanumeric() || c == '_'
        };
        if !valid {
            break;
        }
        len = i + c.len_utf8();
    }
    len
}
