//! `{{tag}}` substitution for path templates such as `build/proof_{{taskId}}.json`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

/// Tag name replaced by the prover task id
pub const TASK_ID_TAG: &str = "taskId";

/// Tag name replaced by the current local date (`YYYYMMDD`)
pub const DATE_TAG: &str = "date";

pub type TemplateTags = BTreeMap<String, String>;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("tag pattern is valid")
});

/// Tags every template can use without the caller providing them
#[must_use]
pub fn default_tags() -> TemplateTags {
    let mut tags = TemplateTags::new();
    tags.insert(
        DATE_TAG.to_string(),
        chrono::Local::now().format("%Y%m%d").to_string(),
    );
    tags
}

/// Replace every `{{name}}` in `template` with its value from `tags`.
///
/// Unknown tags are left in place untouched.
#[must_use]
pub fn parse_template_tag(template: &str, tags: &TemplateTags) -> String {
    TAG_PATTERN
        .replace_all(template, |caps: &Captures<'_>| {
            tags.get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
