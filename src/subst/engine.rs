// ABOUTME: Substitution engine seam consumed by ChunkEngine::process
// ABOUTME: Provides the TagSubstituter trait and a literal-replacement default

use std::collections::BTreeMap;

use super::tags;

/// The low-level substitution engine the compositor hands its flattened
/// template to. Implementations replace every exact `[[+key]]` tag with the
/// mapped value and leave modifier-bearing tags untouched.
pub trait TagSubstituter: Send {
    fn substitute(&self, template: &str, placeholders: &BTreeMap<String, String>) -> String;
}

/// Plain literal tag replacement, applied in sorted key order.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicTagSubstituter;

impl TagSubstituter for BasicTagSubstituter {
    fn substitute(&self, template: &str, placeholders: &BTreeMap<String, String>) -> String {
        let mut output = template.to_string();
        for (key, value) in placeholders {
            output = tags::replace_tag(&output, key, value);
        }
        output
    }
}
