// Unit test for environment-driven configuration
//
// Environment variables are process-global, so all mutation happens inside
// a single test function to keep the parallel test runner out of trouble.

use ensek_verify::config::Config;

#[test]
fn config_reads_environment() {
    std::env::set_var("ENSEK_BASE_URL", "http://localhost:9000");
    std::env::remove_var("ENSEK_USERNAME");
    std::env::remove_var("ENSEK_PASSWORD");

    let config = Config::from_env().expect("base URL alone is sufficient");
    assert_eq!(config.base_url, "http://localhost:9000");
    assert!(config.credentials.is_none());
    assert!(config.validate().is_ok());

    std::env::set_var("ENSEK_USERNAME", "test-user");
    std::env::remove_var("ENSEK_PASSWORD");
    let config = Config::from_env().expect("config loads");
    assert!(
        config.credentials.is_none(),
        "username without password must not produce credentials"
    );

    std::env::set_var("ENSEK_PASSWORD", "test-pass");
    let config = Config::from_env().expect("config loads");
    let credentials = config.credentials.expect("both variables set");
    assert_eq!(credentials.username, "test-user");
    assert_eq!(credentials.password, "test-pass");

    std::env::remove_var("ENSEK_BASE_URL");
    assert!(
        Config::from_env().is_err(),
        "missing base URL must be a configuration error"
    );

    std::env::remove_var("ENSEK_USERNAME");
    std::env::remove_var("ENSEK_PASSWORD");
}
