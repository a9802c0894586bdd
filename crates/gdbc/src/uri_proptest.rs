#[cfg(test)]
mod tests {
    use crate::uri::parse;
    use proptest::prelude::*;

    proptest! {
        // Every authority-form component comes back out of the parser unchanged
        #[test]
        fn test_authority_components_survive_parsing(
            alias in "[a-z][a-z0-9_-]{0,15}",
            user in "[a-z][a-z0-9]{0,10}",
            password in "[a-zA-Z0-9]{1,12}",
            host in "[a-z][a-z0-9]{0,15}",
            port in 1..=u16::MAX,
            database in "[a-z][a-z0-9_]{0,10}",
            value in "[a-z0-9]{1,10}",
        ) {
            let uri = format!("gdbc:{alias}://{user}:{password}@{host}:{port}/{database}?key={value}");

            let data_source = parse(&uri).expect("well-formed URI should parse");

            prop_assert_eq!(data_source.driver_name(), alias.as_str());
            prop_assert_eq!(data_source.url_username(), Some(user.clone()));
            prop_assert_eq!(data_source.url_password(), Some(password.clone()));
            prop_assert_eq!(data_source.host(), Some(host.as_str()));
            prop_assert_eq!(data_source.port(), Some(port));
            let expected_path = format!("/{database}");
            prop_assert_eq!(data_source.path(), expected_path.as_str());
            prop_assert_eq!(data_source.query_value("key"), Some(value));
        }

        // Opaque-form URIs keep their opaque segment
        #[test]
        fn test_opaque_component_survives_parsing(
            alias in "[a-z][a-z0-9_-]{0,15}",
            opaque in "[a-z][a-z0-9_.]{0,20}",
        ) {
            let data_source = parse(&format!("gdbc:{alias}:{opaque}")).expect("should parse");

            prop_assert_eq!(data_source.driver_name(), alias.as_str());
            prop_assert_eq!(data_source.opaque(), Some(opaque.as_str()));
        }

        // Parsing is deterministic and never panics, whatever the input
        #[test]
        fn test_parse_is_pure(input in ".{0,64}") {
            let first = parse(&input);
            let second = parse(&input);

            match (first, second) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
                _ => prop_assert!(false, "parse gave different outcomes for {:?}", input),
            }
        }

        // Anything not in the gdbc scheme is rejected
        #[test]
        fn test_foreign_scheme_is_rejected(
            scheme in "[a-fh-z][a-z]{0,7}",
            rest in "[a-z]{1,8}:[a-z]{1,8}",
        ) {
            let result = parse(&format!("{scheme}:{rest}"));
            prop_assert!(result.is_err());
        }
    }
}
