// SPDX-License-Identifier: MPL-2.0
//! BEM-style CSS class string construction.
//!
//! Display layers attach these strings to whatever they render; the manager
//! itself never depends on them. Naming follows the `block__element` and
//! `block--modifier` convention.

/// Joins the classes that are present into a single space-separated string.
///
/// `None` entries and empty strings are skipped, so call sites can inline
/// conditional classes without pre-filtering.
#[must_use]
pub fn cn<I, S>(classes: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for class in classes.into_iter().flatten() {
        let class = class.as_ref();
        if class.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(class);
    }
    joined
}

/// Builds a BEM element class: `block__element`.
#[must_use]
pub fn bem_element(block: &str, element: &str) -> String {
    format!("{block}__{element}")
}

/// Builds a BEM modifier class: `block--modifier`.
#[must_use]
pub fn bem_modifier(block: &str, modifier: &str) -> String {
    format!("{block}--{modifier}")
}
