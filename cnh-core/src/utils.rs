//! Escaping and validation of user-entered values.

use crate::{Error, Result};

/// Render `value` as a JS string literal delimited by `quote`.
pub fn quote_js(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Whether `name` can be used as an unquoted JS property key.
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Project names end up in shell command lines and directory names.
pub fn validate_project_name(name: &str) -> Result<()> {
    validate_shell_word("project name", name, false)
}

/// Paths interpolated into shell command lines (e.g. `> ./schema.graphql`).
pub fn validate_shell_path(path: &str) -> Result<()> {
    validate_shell_word("path", path, true)
}

fn validate_shell_word(what: &str, value: &str, allow_tilde: bool) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation(what, value, "must not be empty"));
    }
    if value.starts_with('-') {
        return Err(Error::validation(what, value, "must not start with '-'"));
    }
    let allowed = |c: char| {
        c.is_ascii_alphanumeric()
            || matches!(c, '.' | '_' | '/' | '@' | '+' | '-')
            || (allow_tilde && c == '~')
    };
    if let Some(bad) = value.chars().find(|&c| !allowed(c)) {
        return Err(Error::validation(
            what,
            value,
            format!("character {:?} is not allowed", bad),
        ));
    }
    Ok(())
}
