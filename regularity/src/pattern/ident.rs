/*!
Special identifiers, i.e. reserved words that expand to character classes instead of being matched literally.

| Identifier | Pattern |
| --- | --- |
| `digit` | `[0-9]` |
| `lowercase` | `[a-z]` |
| `uppercase` | `[A-Z]` |
| `letter` | `[A-Za-z]` |
| `alphanumeric` | `[A-Za-z0-9]` |
| `whitespace` | `\s` |
| `space` | `" "` |
| `tab` | `\t` |

Plural forms (`digits`, `letters`, ...) are accepted too.
*/

/// All identifiers, in singular form.
pub const IDENTIFIERS: [&str; 8] = [
    "digit",
    "lowercase",
    "uppercase",
    "letter",
    "alphanumeric",
    "whitespace",
    "space",
    "tab",
];

/// Look up the character class of a singular identifier.
pub fn lookup(name: &str) -> Option<&'static str> {
    Some(match name {
        "digit" => "[0-9]",
        "lowercase" => "[a-z]",
        "uppercase" => "[A-Z]",
        "letter" => "[A-Za-z]",
        "alphanumeric" => "[A-Za-z0-9]",
        "whitespace" => r"\s",
        "space" => " ",
        "tab" => r"\t",
        _ => return None,
    })
}

/// Remove one trailing `s`, if any.
///
/// `gas` becomes `ga`. Since [`translate`] only uses the result as the lookup key, words that are not identifiers are not affected.
#[inline]
pub fn singularize(word: &str) -> &str {
    word.strip_suffix('s').unwrap_or(word)
}

/// Translate an identifier like `digits` to `[0-9]`.
///
/// Returns `token` unchanged (not singularized) if it is not an identifier.
///
/// ## Example
/// ```
/// use regularity::pattern::ident::translate;
///
/// assert_eq!(translate("digit"), "[0-9]");
/// assert_eq!(translate("letters"), "[A-Za-z]");
/// assert_eq!(translate("gas"), "gas");
/// ```
pub fn translate(token: &str) -> &str {
    lookup(singularize(token)).unwrap_or(token)
}
