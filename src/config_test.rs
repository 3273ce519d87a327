use super::*;

#[test]
fn new_trims_trailing_slash_from_base_url() {
    let config = AppConfig::new("https://api.example.com/", "client-1");
    assert_eq!(config.api_base_url, "https://api.example.com");
    assert_eq!(config.client_id, "client-1");
}

#[test]
fn new_keeps_base_url_without_trailing_slash() {
    let config = AppConfig::new("http://127.0.0.1:8000", "client-1");
    assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
}

#[test]
fn from_build_env_yields_usable_defaults() {
    let config = AppConfig::from_build_env();
    assert!(!config.api_base_url.is_empty());
    assert!(!config.api_base_url.ends_with('/'));
    assert!(!config.client_id.is_empty());
}
