//! Terminal output sanitization
//!
//! Contact fields come from a user-editable JSON file. Before a field is
//! printed it goes through [`sanitize`] so that escape sequences stored in the
//! file cannot clear the screen, move the cursor or recolor the menu.

/// Strips ANSI CSI escape sequences and control characters from a field
///
/// # Examples
///
/// ```
/// use contact_book::utils::terminal::sanitize;
///
/// assert_eq!(sanitize("\x1b[31mJane\x1b[0m Doe"), "Jane Doe");
/// ```
pub fn sanitize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        // CSI sequence: ESC [ params letter
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        // Fields are single-line, so newlines and tabs go too
        if ch.is_control() {
            continue;
        }

        result.push(ch);
    }

    result
}
