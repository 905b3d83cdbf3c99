//! End-to-end rendering of violations into localized messages

use bigdecimal::BigDecimal;
use std::any::Any;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use valor_core::{collect, tags, validate, Constraint, CustomValue, ToValue, TypeTag, Value, ValueType};
use valor_i18n::{Catalog, FormatContext, FormatterRegistry, Locale, MessageConfig, Messages, NumberFormat};

fn locale(tag: &str) -> Locale {
    Locale::parse(tag).unwrap()
}

#[derive(Debug)]
struct Employee {
    id: i64,
    name: String,
    email: String,
    salary: f64,
}

fn invalid_employee_messages(messages: &Messages, tag: &str) -> Vec<(String, String)> {
    let employee = Employee {
        id: -1,
        name: "aa".into(),
        email: "aaa".into(),
        salary: 9999.999,
    };

    let error = validate(employee, |v| {
        v.property("id", |e| e.id).is_positive();
        v.property("name", |e| &e.name).is_not_blank().has_size(3, 30);
        v.property("email", |e| &e.email).is_not_blank().is_email();
        v.property("salary", |e| e.salary).has_max_decimal_digits(2);
    })
    .unwrap_err();

    messages
        .to_messages(error.violations(), None, &locale(tag))
        .into_iter()
        .map(|m| (m.property, m.message))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected.iter().map(|(p, m)| (p.to_string(), m.to_string())).collect()
}

#[cfg(test)]
mod employee_messages {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_english_root_messages() {
        let messages = Messages::builtin().unwrap();
        assert_eq!(
            invalid_employee_messages(&messages, "en_US"),
            pairs(&[
                ("id", "Must be positive"),
                ("name", "Size must be between 3 and 30"),
                ("email", "Must be a valid email address"),
                ("salary", "Must have at most 2 decimal digits"),
            ])
        );
    }

    #[test]
    fn test_brazilian_portuguese_messages() {
        let messages = Messages::builtin().unwrap();
        assert_eq!(
            invalid_employee_messages(&messages, "pt_BR"),
            pairs(&[
                ("id", "Deve ser positivo"),
                ("name", "O tamanho deve estar entre 3 e 30"),
                ("email", "Deve ser um endereço de e-mail válido"),
                ("salary", "Deve ter no máximo 2 casas decimais"),
            ])
        );
    }

    #[test]
    fn test_offending_value_keeps_exact_scale() {
        let messages = Messages::builtin().unwrap();
        let error = validate(
            Employee {
                id: 1,
                name: "Ana".into(),
                email: "ana@acme.com".into(),
                salary: 9999.999,
            },
            |v| {
                v.property("salary", |e| e.salary).has_max_decimal_digits(2);
            },
        )
        .unwrap_err();

        let rendered = messages.to_messages(error.violations(), None, &locale("pt_BR"));
        assert_eq!(rendered[0].value, Value::Float(9999.999));
        assert_eq!(messages.format(&rendered[0].value, &locale("pt_BR")), "9.999,999");
        assert_eq!(messages.format(&rendered[0].value, &Locale::root()), "9,999.999");
    }

    struct Payroll {
        salary: f32,
    }

    #[test]
    fn test_single_precision_value_keeps_its_digits() {
        let messages = Messages::builtin().unwrap();
        let violations = collect(&Payroll { salary: 9999.999 }, |v| {
            v.property("salary", |p| p.salary).has_max_decimal_digits(2);
        });

        let rendered = messages.to_messages(&violations, None, &Locale::root());
        assert_eq!(rendered[0].value, Value::Float(9999.999));
        assert_eq!(messages.format(&rendered[0].value, &Locale::root()), "9,999.999");
        assert_eq!(messages.format(&rendered[0].value, &locale("de")), "9.999,999");
    }
}

#[cfg(test)]
mod bundle_fallback {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app_messages() -> Messages {
        let mut catalog = Catalog::builtin().unwrap();
        catalog
            .register_str(
                "app/messages",
                Locale::root(),
                "valor.constraints.Positive=The {field} must be positive\n",
            )
            .unwrap();
        catalog
            .register_str("app/messages", locale("pt_BR"), "valor.constraints.NotBlank=Campo obrigatório\n")
            .unwrap();
        Messages::new(Arc::new(catalog))
    }

    #[test]
    fn test_application_bundle_overrides_core() {
        let messages = app_messages();
        let rendered = invalid_employee_messages_with(&messages, Some("app/messages"), "pt_BR");

        // NotBlank comes from the app bundle, Size falls back to the core pt_BR bundle
        assert_eq!(rendered[0], "Campo obrigatório");
        assert_eq!(rendered[1], "O tamanho deve estar entre 3 e 30");
    }

    #[test]
    fn test_unfilled_placeholder_stays_visible() {
        let messages = app_messages();
        let violations = collect(&-5i64, |v| {
            v.current().is_positive();
        });
        let rendered = messages.to_messages(&violations, Some("app/messages"), &locale("de"));
        assert_eq!(rendered[0].message, "The {field} must be positive");
    }

    #[test]
    fn test_configured_base_name_and_fallback_locale() {
        let config = MessageConfig::default()
            .with_base_name("app/messages")
            .with_fallback_locale(locale("es"));
        let messages = app_messages().with_config(config);

        let rendered = invalid_employee_messages_with(&messages, None, "fr");
        assert_eq!(rendered[0], "No debe estar en blanco");
    }

    #[test]
    fn test_configured_base_name_overrides_value_wording() {
        let mut catalog = Catalog::builtin().unwrap();
        catalog
            .register_str(
                "app/messages",
                locale("pt_BR"),
                "valor.values.true=sim\nvalor.formats.date=%d-%m-%Y\n",
            )
            .unwrap();
        let messages = Messages::new(Arc::new(catalog))
            .with_config(MessageConfig::default().with_base_name("app/messages"));
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        assert_eq!(messages.format(&Value::Bool(true), &locale("pt_BR")), "sim");
        assert_eq!(messages.format(&Value::Date(date), &locale("pt_BR")), "09-03-2024");
        // Keys the app bundle leaves out come from the core bundle
        assert_eq!(messages.format(&Value::Bool(false), &locale("pt_BR")), "falso");
        assert_eq!(messages.format(&Value::Bool(true), &locale("de")), "wahr");
    }

    #[test]
    fn test_untranslated_locale_is_deterministic() {
        let messages = Messages::builtin().unwrap();
        let first = invalid_employee_messages(&messages, "ja_JP");
        let second = invalid_employee_messages(&messages, "ja_JP");
        assert_eq!(first, second);
        assert_eq!(first[0].1, "Must be positive");
    }

    #[test]
    fn test_unknown_key_renders_key() {
        let messages = Messages::builtin().unwrap();
        let violations = collect(&"x".to_string(), |v| {
            v.current().validate(Constraint::new("Custom"), |_| false);
        });
        let rendered = messages.to_messages(&violations, None, &locale("de"));
        assert_eq!(rendered[0].message, "valor.constraints.Custom");
    }

    fn invalid_employee_messages_with(messages: &Messages, base_name: Option<&str>, tag: &str) -> Vec<String> {
        let violations = collect(&String::from(" "), |v| {
            v.current().is_not_blank().has_size(3, 30);
        });
        messages
            .to_messages(&violations, base_name, &locale(tag))
            .into_iter()
            .map(|m| m.message)
            .collect()
    }
}

#[cfg(test)]
mod custom_formatters {
    use super::*;
    use pretty_assertions::assert_eq;

    const MONEY: TypeTag = TypeTag::new("money");

    #[derive(Debug, Clone, PartialEq)]
    struct Money {
        amount: BigDecimal,
        currency: &'static str,
    }

    impl Money {
        fn new(amount: &str, currency: &'static str) -> Self {
            Self {
                amount: BigDecimal::from_str(amount).unwrap(),
                currency,
            }
        }

        fn minor_unit(&self) -> usize {
            match self.currency {
                "JPY" => 0,
                _ => 2,
            }
        }
    }

    impl fmt::Display for Money {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} {}", self.amount, self.currency)
        }
    }

    impl CustomValue for Money {
        fn value_type(&self) -> ValueType {
            ValueType::new(MONEY, &[tags::NUMBER, tags::ANY])
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_decimal(&self) -> Option<BigDecimal> {
            Some(self.amount.clone())
        }
    }

    impl ToValue for Money {
        fn to_value(&self) -> Value {
            Value::custom(self.clone())
        }
    }

    fn money_registry() -> Arc<FormatterRegistry> {
        let registry = FormatterRegistry::new();
        registry.register(MONEY, |value: &Value, context: &FormatContext<'_>| {
            let money = match value {
                Value::Custom(custom) => custom.as_any().downcast_ref::<Money>(),
                _ => None,
            };
            match money {
                Some(money) => format!(
                    "{} {}",
                    NumberFormat::new()
                        .with_min_fraction_digits(money.minor_unit())
                        .format_decimal(&money.amount, context.locale()),
                    money.currency
                ),
                None => value.to_string(),
            }
        });
        Arc::new(registry)
    }

    struct Account {
        balance: Money,
    }

    fn below_minimum(balance: Money) -> Vec<String> {
        let mut catalog = Catalog::builtin().unwrap();
        catalog
            .register_str("bank/messages", Locale::root(), "bank.MinBalance=Balance must be at least {min}\n")
            .unwrap();
        catalog
            .register_str(
                "bank/messages",
                locale("pt_BR"),
                "bank.MinBalance=O saldo deve ser de pelo menos {min}\n",
            )
            .unwrap();
        let messages = Messages::new(Arc::new(catalog)).with_registry(money_registry());

        let minimum = Money::new("1000", "BRL");
        let constraint = Constraint::new("MinBalance")
            .with_bundle("bank/messages")
            .with_key("bank.MinBalance")
            .with_param("min", minimum.to_value());

        let violations = collect(&Account { balance }, |v| {
            v.property("balance", |a| &a.balance)
                .validate(constraint, |b| b.map_or(true, |b| b.amount >= minimum.amount));
        });

        ["", "pt_BR"]
            .iter()
            .map(|tag| messages.to_messages(&violations, None, &locale(tag))[0].message.clone())
            .collect()
    }

    #[test]
    fn test_currency_formatter_pads_minor_unit() {
        assert_eq!(
            below_minimum(Money::new("10", "BRL")),
            ["Balance must be at least 1,000.00 BRL", "O saldo deve ser de pelo menos 1.000,00 BRL"]
        );
    }

    #[test]
    fn test_global_registry_is_untouched_by_injected_one() {
        let _ = money_registry();
        let messages = Messages::builtin().unwrap();
        assert_eq!(
            messages.format(&Money::new("1000", "BRL").to_value(), &Locale::root()),
            "1,000"
        );
    }
}

#[cfg(test)]
mod concurrency {
    use super::*;

    #[test]
    fn test_register_and_format_concurrently() {
        let registry = Arc::new(FormatterRegistry::new());
        let catalog = Catalog::builtin().unwrap();

        std::thread::scope(|scope| {
            for writer in 0..2 {
                let registry = Arc::clone(&registry);
                scope.spawn(move || {
                    for i in 0..200 {
                        if (i + writer) % 2 == 0 {
                            registry.register(tags::STRING, |v: &Value, _: &FormatContext<'_>| format!("<{}>", v));
                        } else {
                            registry.remove(tags::STRING);
                        }
                    }
                });
            }

            for _ in 0..4 {
                let registry = Arc::clone(&registry);
                let catalog = &catalog;
                scope.spawn(move || {
                    let bundle = valor_i18n::MessageBundle::new(catalog, Locale::root());
                    for _ in 0..200 {
                        let rendered = registry.format(&Value::from("x"), &bundle);
                        assert!(rendered == "x" || rendered == "<x>", "unexpected {}", rendered);
                    }
                });
            }
        });
    }
}
