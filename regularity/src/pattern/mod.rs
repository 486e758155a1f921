/*!
Pure pattern string utilities used by [`Regularity`](crate::Regularity).

- [`escape`]: Escape metacharacters in a literal.
- [`ident`]: Translate special identifiers like `digits` to character classes.
- [`group`]: Non-capturing groups, alternations and anchors.
- [`quantify`]: Repetitions.

All functions here work on plain strings and never fail. Whether the result is a valid regex is up to the engine.

## Example
```
use regularity::pattern::{escape, ident::translate, quantify::exactly};

assert_eq!(exactly(translate(&escape("digits")), 3), "(?:[0-9]){3}");
assert_eq!(exactly(translate(&escape("$")), 1), r"\$");
```
*/
mod escape;
pub mod group;
pub mod ident;
pub mod quantify;

pub use escape::{escape, is_meta_character, META_CHARACTERS};
