use crate::models::VariableMapping;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `{{name}}` where `name` contains no braces
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("placeholder pattern is valid"));

/// Replace every `{{name}}` with its value from `vars`.
///
/// Unknown names resolve to the empty string. Substitution is a single
/// pass: values containing `{{...}}` are inserted verbatim and never
/// expanded again. Lone braces are left untouched.
pub fn resolve_template(template: &str, vars: &VariableMapping) -> String {
    if template.is_empty() {
        return String::new();
    }

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            vars.get(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned()
}

/// Absent templates stay absent
pub fn resolve_optional(template: Option<&str>, vars: &VariableMapping) -> Option<String> {
    template.map(|t| resolve_template(t, vars))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> VariableMapping {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let v = vars(&[("endpoint", "http://h")]);
        assert_eq!(resolve_template("{{endpoint}}/x", &v), "http://h/x");
        assert_eq!(resolve_template("{{missing}}/x", &v), "/x");
        assert_eq!(
            resolve_template("{{endpoint}}/a?b={{endpoint}}", &v),
            "http://h/a?b=http://h"
        );
    }

    #[test]
    fn test_resolve_empty_and_absent() {
        let v = vars(&[("a", "1")]);
        assert_eq!(resolve_template("", &v), "");
        assert_eq!(resolve_optional(None, &v), None);
        assert_eq!(resolve_optional(Some("{{a}}"), &v).as_deref(), Some("1"));
    }

    #[test]
    fn test_lone_braces_untouched() {
        let v = vars(&[("a", "1")]);
        assert_eq!(resolve_template("{a} {{a} {{ {{a}}", &v), "{a} {{a} {{ 1");
        assert_eq!(resolve_template("{{a{b}}", &v), "{{a{b}}");
    }

    #[test]
    fn test_values_are_not_re_expanded() {
        let v = vars(&[("a", "{{b}}"), ("b", "deep")]);
        assert_eq!(resolve_template("{{a}}", &v), "{{b}}");
    }
}
