//! Placeholder substitution for message templates
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::format::FormatterRegistry;
use crate::message::MessageBundle;
use valor_core::Params;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// Replace `{name}` placeholders with formatted parameter values
///
/// Names are made of ASCII letters, digits, `_`, `.` and `-`. A placeholder
/// without a parameter stays in the output as `{name}` and is logged. Braces
/// that do not form a placeholder are copied through unchanged.
pub fn interpolate(template: &str, params: &Params, bundle: &MessageBundle<'_>, registry: &FormatterRegistry) -> String {
    if !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let name_len = after.find(|c: char| !is_name_char(c)).unwrap_or(after.len());
        let name = &after[..name_len];

        if name.is_empty() || !after[name_len..].starts_with('}') {
            out.push('{');
            rest = after;
            continue;
        }

        match params.get(name) {
            Some(value) => out.push_str(&registry.format(value, bundle)),
            None => {
                tracing::warn!(placeholder = name, "no parameter for placeholder");
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[name_len + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::Catalog;
    use crate::locale::Locale;
    use pretty_assertions::assert_eq;
    use valor_core::Value;

    fn params(entries: &[(&str, Value)]) -> Params {
        entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    fn render(template: &str, params: &Params, tag: &str) -> String {
        let catalog = Catalog::builtin().unwrap();
        let bundle = MessageBundle::new(&catalog, Locale::parse(tag).unwrap());
        interpolate(template, params, &bundle, &FormatterRegistry::new())
    }

    #[test]
    fn test_substitutes_formatted_values() {
        let params = params(&[("min", Value::UInt(3)), ("max", Value::UInt(1000))]);
        assert_eq!(
            render("Size must be between {min} and {max}", &params, ""),
            "Size must be between 3 and 1,000"
        );
        assert_eq!(render("{min}-{max}", &params, "de"), "3-1.000");
    }

    #[test]
    fn test_missing_parameter_stays_visible() {
        let params = params(&[("min", Value::UInt(3))]);
        assert_eq!(render("Between {min} and {max}", &params, ""), "Between 3 and {max}");
    }

    #[test]
    fn test_non_placeholders_are_copied() {
        let params = params(&[("a", Value::Int(1))]);
        assert_eq!(render("{ a } {} {a b} {{a}} {a", &params, ""), "{ a } {} {a b} {1} {a");
    }

    #[test]
    fn test_lists_are_joined() {
        let params = params(&[(
            "values",
            Value::List(vec![Value::from("a"), Value::Decimal("1.50".parse().unwrap())]),
        )]);
        assert_eq!(render("One of {values}", &params, "pt_BR"), "One of a, 1,50");
    }

    #[test]
    fn test_dotted_and_dashed_names() {
        let params = params(&[("user.first-name", Value::from("Ana"))]);
        assert_eq!(render("Hi {user.first-name}", &params, ""), "Hi Ana");
    }

    #[test]
    fn test_template_without_placeholders_is_unchanged() {
        let params = params(&[("a", Value::Int(1))]);
        assert_eq!(render("Must not be blank", &params, ""), "Must not be blank");
    }
}
