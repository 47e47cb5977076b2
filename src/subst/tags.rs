// ABOUTME: Reserved tag syntax constants and boundary-safe tag helpers
// ABOUTME: All tag rewriting goes through whole-token replacement, never bare names

/// Opening delimiter of a placeholder tag.
pub const TAG_OPEN: &str = "[[+";

/// Closing delimiter of a placeholder tag.
pub const TAG_CLOSE: &str = "]]";

/// The reserved substitution point inside a wrapper template.
pub const WRAPPER_TAG: &str = "[[+wrapper]]";

/// Opening sigil of an uncached tag, resolved outside of this engine.
pub const UNCACHED_SIGIL: &str = "[[!";

/// Private marker the uncached sigil is masked to while lazy mode is on.
pub const UNCACHED_MASK: &str = "[[¡";

/// Build the full delimited tag for a placeholder name.
pub fn placeholder_tag(name: &str) -> String {
    format!("{TAG_OPEN}{name}{TAG_CLOSE}")
}

/// Replace every exact occurrence of the tag for `name` with `value`.
///
/// Matching is on the whole delimited token, so `a` never matches inside
/// the tag for `a2`, and tags carrying modifiers (`[[+a:default]]`) are
/// left untouched.
pub fn replace_tag(template: &str, name: &str, value: &str) -> String {
    template.replace(&placeholder_tag(name), value)
}

/// Insert a key-path prefix into every remaining placeholder tag,
/// `[[+name]]` becoming `[[+prefix.name]]`.
pub fn namespace_tags(template: &str, prefix: &str) -> String {
    template.replace(TAG_OPEN, &format!("{TAG_OPEN}{prefix}."))
}

/// Mask uncached sigils so the substitution engine skips those tags.
pub fn mask_uncached(template: &str) -> String {
    template.replace(UNCACHED_SIGIL, UNCACHED_MASK)
}

/// Restore masked sigils so an outer rendering pass can still process them.
pub fn unmask_uncached(template: &str) -> String {
    template.replace(UNCACHED_MASK, UNCACHED_SIGIL)
}
