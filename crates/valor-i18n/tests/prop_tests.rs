//! Property-based tests for resolution, interpolation and number formatting

use bigdecimal::BigDecimal;
use proptest::prelude::*;
use std::str::FromStr;
use valor_core::{Params, Value, DEFAULT_MESSAGE_BUNDLE};
use valor_i18n::{interpolate, Catalog, FormatterRegistry, Locale, MessageBundle, MessageResolver, NumberFormat};

fn locale_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z]{2}",
        "[a-z]{2}_[A-Z]{2}",
        Just("pt_BR".to_string()),
        Just("de_AT".to_string()),
        Just("es_419".to_string()),
    ]
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("valor.constraints.NotBlank".to_string()),
        Just("valor.constraints.Size.max".to_string()),
        Just("valor.constraints.DecimalDigits".to_string()),
        "[a-z]{1,8}\\.[a-z]{1,8}",
    ]
}

proptest! {
    #[test]
    fn prop_resolution_is_deterministic(tag in locale_strategy(), key in key_strategy()) {
        let catalog = Catalog::builtin().unwrap();
        let resolver = MessageResolver::new(&catalog);
        let locale = Locale::parse(&tag).unwrap();

        let first = resolver.resolve("app/messages", &key, &locale, DEFAULT_MESSAGE_BUNDLE, &locale);
        let second = resolver.resolve("app/messages", &key, &locale, DEFAULT_MESSAGE_BUNDLE, &locale);
        prop_assert_eq!(&first, &second);

        if key.starts_with("valor.constraints.") {
            prop_assert_ne!(first, key);
        }
    }

    #[test]
    fn prop_interpolation_is_idempotent(text in "[^{}]{0,60}", n in any::<i64>()) {
        let catalog = Catalog::builtin().unwrap();
        let bundle = MessageBundle::new(&catalog, Locale::root());
        let registry = FormatterRegistry::new();
        let mut params = Params::new();
        params.insert("n".to_string(), Value::Int(n));

        prop_assert_eq!(interpolate(&text, &params, &bundle, &registry), text.clone());

        let template = format!("{}{{n}}", text);
        let once = interpolate(&template, &params, &bundle, &registry);
        let twice = interpolate(&once, &params, &bundle, &registry);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_number_format_keeps_every_digit(
        integer in "[1-9][0-9]{0,12}",
        fraction in "[0-9]{0,8}",
        negative in any::<bool>(),
    ) {
        let text = if fraction.is_empty() {
            integer.clone()
        } else {
            format!("{}.{}", integer, fraction)
        };
        let text = if negative { format!("-{}", text) } else { text };
        let decimal = BigDecimal::from_str(&text).unwrap();

        let rendered = NumberFormat::new().format_decimal(&decimal, &Locale::parse("pt_BR").unwrap());
        let digits: String = rendered.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(digits, format!("{}{}", integer, fraction));
        prop_assert_eq!(rendered.starts_with('-'), negative);
        prop_assert_eq!(rendered.contains(','), !fraction.is_empty());
    }
}
