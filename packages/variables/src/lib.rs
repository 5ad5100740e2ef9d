//! # Template Variable Extraction
//!
//! Scans compiled HTML for `{{identifier}}` placeholder tokens.
//!
//! A token is two opening braces, one or more word characters, and two
//! closing braces. Anything else (`{{ name }}`, `{{first-name}}`) is plain
//! text as far as the extractor is concerned.
//!
//! This pass is deliberately separate from rendering: it only ever sees the
//! final HTML string.
//!
//! ```rust
//! use mailblocks_variables::extract_variables;
//!
//! let vars = extract_variables("<p>Hi {{name}}, your code is {{code}}. Bye {{name}}</p>");
//! let names: Vec<_> = vars.iter().map(|v| v.name.as_str()).collect();
//! assert_eq!(names, ["name", "code"]);
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// One template variable referenced by a compiled template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub name: String,

    /// Sample text shown in editors; defaults to the name
    pub placeholder: String,

    #[serde(default)]
    pub default_value: Option<String>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            placeholder: name.clone(),
            name,
            default_value: None,
        }
    }

    /// The token as it appears in template text
    pub fn token(&self) -> String {
        format!("{{{{{}}}}}", self.name)
    }
}

/// Placeholder token pattern; capture group 1 is the identifier. Word
/// characters are ASCII only.
pub fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{\{((?-u:\w)+)\}\}").expect("Invalid placeholder regex")
    })
}

/// Unique variable names in `text`, in first-occurrence order
pub fn variable_names(text: &str) -> Vec<String> {
    collect_names([text])
}

/// Variables referenced by `html`, de-duplicated in first-occurrence order
pub fn extract_variables(html: &str) -> Vec<Variable> {
    extract_variables_from([html])
}

/// Variables across several texts, de-duplicated across all of them in the
/// order the texts are given
pub fn extract_variables_from<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<Variable> {
    collect_names(texts).into_iter().map(Variable::new).collect()
}

fn collect_names<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for text in texts {
        for captures in placeholder_regex().captures_iter(text) {
            let name = &captures[1];
            if seen.insert(name.to_string()) {
                names.push(name.to_string());
            }
        }
    }

    names
}
