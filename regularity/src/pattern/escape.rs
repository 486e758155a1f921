use std::borrow::Cow;

/// Characters that have to be escaped to be matched literally.
///
/// All of them are also metacharacters of the [`regex`] crate, so escaping them is always valid.
pub const META_CHARACTERS: [char; 14] = [
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

#[inline]
pub fn is_meta_character(c: char) -> bool {
    META_CHARACTERS.contains(&c)
}

/// Escape all [`META_CHARACTERS`] in `text` with a backslash, so it can be embedded in a larger pattern.
///
/// Other characters are left as is. No allocation if there is nothing to escape.
///
/// ## Example
/// ```
/// use regularity::pattern::escape;
///
/// assert_eq!(escape("one.two"), r"one\.two");
/// assert_eq!(escape("(a|b)"), r"\(a\|b\)");
/// assert_eq!(escape("a-z"), "a-z");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(is_meta_character) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = String::with_capacity(text.len() + 4);
    escaped.push_str(&text[..first]);
    for c in text[first..].chars() {
        if is_meta_character(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}
