//! Markup neutralization for text embedded in issue bodies.
//!
//! Issues are rendered as GitHub-flavoured Markdown, so every character that
//! can open or close a Markdown/HTML construct is removed outright rather than
//! escaped. Targeting another renderer means re-deriving [`MARKUP_CHARS`].

/// Characters stripped from every submitted field.
pub const MARKUP_CHARS: &[char] = &['[', ']', '(', ')', '#', '*', '`', '_', '~', '<', '>', '\\'];

/// Sanitize a single-line field (name, email, subject).
///
/// Truncates to `max_units` UTF-16 code units, strips [`MARKUP_CHARS`], folds
/// each line break into one space, and trims.
pub fn sanitize_line(input: &str, max_units: usize) -> String {
    let stripped = strip_markup(input, max_units);

    let mut out = String::with_capacity(stripped.len());
    let mut chars = stripped.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' => out.push(' '),
            c => out.push(c),
        }
    }

    out.trim().to_string()
}

/// Sanitize the free-text message body. Line breaks survive.
pub fn sanitize_message(input: &str, max_units: usize) -> String {
    strip_markup(input, max_units).trim().to_string()
}

/// Number of UTF-16 code units in `s`, the unit browsers measure text in.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn strip_markup(input: &str, max_units: usize) -> String {
    truncate_utf16(input, max_units)
        .chars()
        .filter(|c| !MARKUP_CHARS.contains(c))
        .collect()
}

/// Longest prefix of `input` that fits in `max_units` UTF-16 code units.
///
/// A surrogate pair straddling the limit is dropped whole.
fn truncate_utf16(input: &str, max_units: usize) -> &str {
    let mut units = 0;
    for (i, c) in input.char_indices() {
        units += c.len_utf16();
        if units > max_units {
            return &input[..i];
        }
    }
    input
}

/// Minimal `local@domain.tld` shape check. Says nothing about deliverability.
pub fn is_email_shape(email: &str) -> bool {
    if email.chars().any(is_space) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // A dot with at least one character on either side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
