use std::sync::OnceLock;

use regex::Regex;

fn tag_pattern() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    // A trailing `<` with no closing `>` is stripped through end of input.
    TAGS.get_or_init(|| Regex::new(r"<[^>]*>?").expect("tag pattern is a valid regex"))
}

/// Remove every `<...>` fragment from user input.
///
/// This is a naive tag strip, not HTML escaping: entities such as `&amp;` and
/// stray `>` characters pass through untouched.
pub fn sanitize(text: &str) -> String {
    tag_pattern().replace_all(text, "").into_owned()
}
