//! Stack definition integration tests.

#[cfg(test)]
mod tests {
    use stackname_core::{ConfigError, Environment, Region};
    use stackname_naming::{
        NamingError, RecordingProvider, StackProps, define_stack, is_valid_bucket_name,
    };

    use crate::{clock_on, config_from, synthesize};

    #[test]
    fn test_should_declare_single_valid_bucket() {
        let config = config_from(&[
            ("STACK_ENVIRONMENT", "test"),
            ("STACK_REGION", "eu-west-3"),
            ("STACK_DATE", "2024-03-07"),
        ]);

        let (result, provider) = synthesize(&config);
        let stack = result.unwrap();

        assert_eq!(provider.buckets().len(), 1, "only one bucket is expected");
        let bucket = &provider.buckets()[0];
        assert_eq!(bucket.bucket_name, "test-eu-west-3-2024-03-07");
        assert!(is_valid_bucket_name(&bucket.bucket_name));
        assert_eq!(stack.bucket_name, bucket.bucket_name);
    }

    #[test]
    fn test_should_use_defaults_when_unconfigured() {
        let config = config_from(&[("STACK_DATE", "2025-11-30")]);

        let (result, _) = synthesize(&config);
        let stack = result.unwrap();

        assert_eq!(stack.stack_id, "EMD-CaseStudy");
        assert_eq!(stack.environment, Environment::Development);
        assert_eq!(stack.region, Region::UsEast1);
        assert_eq!(stack.bucket_name, "development-us-east-1-2025-11-30");
    }

    #[test]
    fn test_should_abort_on_unknown_environment() {
        let config = config_from(&[("STACK_ENVIRONMENT", "qa")]);

        let (result, provider) = synthesize(&config);

        assert!(matches!(
            result,
            Err(NamingError::Config(ConfigError::InvalidEnvironment { ref value, .. })) if value == "qa"
        ));
        assert!(provider.buckets().is_empty());
    }

    #[test]
    fn test_should_abort_on_empty_region() {
        let config = config_from(&[("STACK_REGION", "")]);

        let (result, provider) = synthesize(&config);

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("invalid region: <absent>"));
        assert!(provider.buckets().is_empty());
    }

    #[test]
    fn test_should_serialize_defined_stack() {
        let props = StackProps::new("Demo", "staging", Some("us-west-2".to_owned()));
        let mut provider = RecordingProvider::new();
        let stack = define_stack(&props, &clock_on("2024-01-09"), &mut provider).unwrap();

        let json = serde_json::to_value(&stack).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "stackId": "Demo",
                "environment": "staging",
                "region": "us-west-2",
                "bucketName": "staging-us-west-2-2024-01-09",
            })
        );
    }
}
