//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Replace placeholders in a single left-to-right pass.
///
/// Inserted values are never rescanned, so a value that happens to contain
/// another placeholder (a title, user markup) is emitted verbatim.
pub fn substitute(content: &str, pairs: &[(&str, &str)]) -> String {
    debug_assert!(pairs.iter().all(|(key, _)| !key.is_empty()));

    let extra: usize = pairs.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(content.len() + extra);
    let mut rest = content;

    loop {
        let next = pairs
            .iter()
            .filter_map(|(key, value)| rest.find(key).map(|pos| (pos, *key, *value)))
            .min_by_key(|(pos, _, _)| *pos);

        let Some((pos, key, value)) = next else {
            out.push_str(rest);
            return out;
        };

        out.push_str(&rest[..pos]);
        out.push_str(value);
        rest = &rest[pos + key.len()..];
    }
}
