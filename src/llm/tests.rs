use std::time::Duration;

use super::client::LlmClientConfig;

#[test]
fn default_config_uses_spec_bounds() {
    let config = LlmClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert!(config.max_tokens >= 150 && config.max_tokens <= 250);
    assert!((config.temperature - 0.7).abs() < f64::EPSILON);
}
