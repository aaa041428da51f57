//! Escape chuỗi để dùng an toàn như một argument trong POSIX shell.

/// Ký tự không cần escape
fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ',' | ':' | '+' | '/' | '@')
}

/// Escape bằng backslash, newline được bọc thành `'\n'`, chuỗi rỗng thành `''`
pub fn shell_escape(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }

    let mut escaped = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        match c {
            '\n' => escaped.push_str("'\n'"),
            c if is_safe(c) => escaped.push(c),
            c => {
                escaped.push('\\');
                escaped.push(c);
            }
        }
    }
    escaped
}
