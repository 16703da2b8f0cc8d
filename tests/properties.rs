use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

use typed_params::{params, Schema};

fn field_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,10}").unwrap()
}

fn descriptor() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("string".to_string()),
        Just("number".to_string()),
        Just("boolean".to_string()),
        Just("string?".to_string()),
        Just("number?".to_string()),
        Just("boolean?".to_string()),
        Just("boolean=true".to_string()),
        Just("boolean=false".to_string()),
        (-1000i64..1000).prop_map(|n| format!("number={}", n)),
        "[A-Za-z0-9 ]{0,8}".prop_map(|s| format!("string={}", s)),
    ]
}

fn raw_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("true".to_string()),
        Just("false".to_string()),
        (-1000i64..1000).prop_map(|n| n.to_string()),
        "[A-Za-z0-9]{1,6}",
    ]
}

fn schema_input() -> impl Strategy<Value = BTreeMap<String, String>> {
    proptest::collection::btree_map(field_name(), descriptor(), 0..8)
}

proptest! {
    #[test]
    fn compile_keeps_every_field(input in schema_input()) {
        let schema = Schema::compile(input.clone()).unwrap();
        prop_assert_eq!(schema.len(), input.len());
        let names: Vec<&str> = schema.names().collect();
        let expected: Vec<&str> = input.keys().map(String::as_str).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn parse_is_pure_and_compile_is_repeatable(
        input in schema_input(),
        values in proptest::collection::vec(raw_value(), 8),
    ) {
        let raw: HashMap<String, String> = input
            .keys()
            .cloned()
            .zip(values)
            .collect();

        let first = params(input.clone()).unwrap();
        let second = params(input).unwrap();

        let a = first.parse_map(&raw);
        let b = first.parse_map(&raw);
        let c = second.parse_map(&raw);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);

        if let Ok(parsed) = a {
            for (name, _) in parsed.iter() {
                prop_assert!(first.get(name).is_some());
            }
        }
    }
}
