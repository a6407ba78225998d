//! End-to-end integration tests
//!
//! These tests replay predefined command scripts through a full session.
//! Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Replays it with the script strategy
//! 3. Compares the transcript with expected.txt
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - The savings and current account scenarios
//! - Non-positive amounts
//! - Switching with an overdrawn balance under both switch policies
//! - Malformed input rows
//! - Overdraft floor boundaries

#[cfg(test)]
mod tests {
    use bank_session::cli::InputMode;
    use bank_session::strategy::{create_strategy, SessionStrategy};
    use bank_session::{Session, SessionConfig, SwitchPolicy};
    use rstest::rstest;
    use std::fs;
    use std::path::Path;

    /// Replay tests/fixtures/{fixture_name}/input.csv and compare with expected.txt
    fn run_test_fixture(fixture_name: &str, switch_policy: SwitchPolicy) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.txt", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let mut frontend = create_strategy(
            InputMode::Script,
            Some(input_path.into()),
            Box::new(std::io::empty()),
        )
        .unwrap_or_else(|e| panic!("Failed to create strategy: {}", e));

        let mut session = Session::with_config(SessionConfig {
            switch_policy,
            ..SessionConfig::default()
        });
        let mut output = Vec::new();

        frontend
            .run(&mut session, &mut output)
            .unwrap_or_else(|e| panic!("Failed to replay script: {}", e));

        let actual_output = String::from_utf8(output).expect("Transcript is not UTF-8");
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (policy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, switch_policy, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("savings_scenario")]
    #[case("current_scenario")]
    #[case("invalid_amounts")]
    #[case("overdrawn_switch")]
    #[case("malformed_input")]
    #[case("boundary_values")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture, SwitchPolicy::Carry);
    }

    #[test]
    fn test_reject_policy_fixture() {
        run_test_fixture("overdrawn_switch_rejected", SwitchPolicy::Reject);
    }

    /// Fixtures whose balance never leaves the savings floor behave the same under both policies
    #[rstest]
    #[case("savings_scenario")]
    #[case("current_scenario")]
    #[case("boundary_values")]
    fn test_policy_independent_fixtures(
        #[case] fixture: &str,
        #[values(SwitchPolicy::Carry, SwitchPolicy::Reject)] policy: SwitchPolicy,
    ) {
        run_test_fixture(fixture, policy);
    }
}
