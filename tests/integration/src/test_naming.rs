//! Naming round-trip integration tests.

#[cfg(test)]
mod tests {
    use stackname_core::{Environment, Region};
    use stackname_naming::{
        generate_bucket_name, is_valid_bucket_name, validate_environment, validate_region,
    };

    use crate::clock_on;

    #[test]
    fn test_should_validate_every_generated_name() {
        let clock = clock_on("2024-03-07");
        for environment in Environment::ALL {
            for region in Region::ALL {
                let environment = validate_environment(environment.as_str()).unwrap();
                let region = validate_region(Some(region.as_str())).unwrap();
                let name = generate_bucket_name(environment, region, &clock);
                assert!(is_valid_bucket_name(&name), "expected valid: {name}");
                assert!(name.ends_with("-2024-03-07"));
            }
        }
    }

    #[test]
    fn test_should_collide_within_the_same_day() {
        let name_on = |date| {
            generate_bucket_name(Environment::Production, Region::EuWest1, &clock_on(date))
        };

        let morning = name_on("2024-06-01");
        let evening = name_on("2024-06-01");
        let next_day = name_on("2024-06-02");

        assert_eq!(morning, evening);
        assert_ne!(morning, next_day);
    }
}
