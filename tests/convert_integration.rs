use tempfile::tempdir;
use wiremock::ResponseTemplate;

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const USD_RATES_BODY: &str =
        r#"{"base": "USD", "date": "2024-01-01", "rates": {"USD": 1.0, "EUR": 0.9, "INR": 83.1}}"#;

    /// Mock rate service answering `GET /<base>`, verifying the request count.
    pub async fn mock_rate_server(
        base: &str,
        template: ResponseTemplate,
        expected_requests: u64,
    ) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/{base}")))
            .respond_with(template)
            .expect(expected_requests)
            .mount(&mock_server)
            .await;

        mock_server
    }

    /// Writes a config pointing at the mock server, caching into `dir`.
    pub fn write_config(
        dir: &std::path::Path,
        base_url: &str,
        retry_delay_secs: u64,
    ) -> std::path::PathBuf {
        let config_path = dir.join("config.yaml");
        let config_content = format!(
            r#"
service:
  base_url: "{base_url}"
  timeout_secs: 5
  max_retries: 3
  retry_delay_secs: {retry_delay_secs}
cache:
  ttl_secs: 3600
  data_path: "{}"
"#,
            dir.display()
        );
        std::fs::write(&config_path, config_content).expect("Failed to write config file");
        config_path
    }
}

#[test_log::test(tokio::test)]
async fn test_convert_flow_with_mock_service() {
    let dir = tempdir().unwrap();
    let mock_server = test_utils::mock_rate_server(
        "USD",
        ResponseTemplate::new(200).set_body_string(test_utils::USD_RATES_BODY),
        1,
    )
    .await;
    let config_path = test_utils::write_config(dir.path(), &mock_server.uri(), 0);

    let result = fxc::run_convert(100.0, "usd", "eur", Some(config_path.to_str().unwrap())).await;
    assert!(result.is_ok(), "Conversion failed: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_second_conversion_served_from_cache() {
    let dir = tempdir().unwrap();
    // expect(1): the second run must not reach the service
    let mock_server = test_utils::mock_rate_server(
        "USD",
        ResponseTemplate::new(200).set_body_string(test_utils::USD_RATES_BODY),
        1,
    )
    .await;
    let config_path = test_utils::write_config(dir.path(), &mock_server.uri(), 0);
    let config_path = config_path.to_str().unwrap();

    fxc::run_convert(100.0, "USD", "EUR", Some(config_path))
        .await
        .expect("First conversion failed");
    fxc::run_convert(50.0, "USD", "INR", Some(config_path))
        .await
        .expect("Second conversion failed");
}

#[test_log::test(tokio::test)]
async fn test_retry_exhaustion_reports_unavailable() {
    let dir = tempdir().unwrap();
    // Three attempts, all answered with a server error
    let mock_server = test_utils::mock_rate_server("USD", ResponseTemplate::new(500), 3).await;
    let config_path = test_utils::write_config(dir.path(), &mock_server.uri(), 0);

    let result = fxc::run_convert(100.0, "USD", "EUR", Some(config_path.to_str().unwrap())).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("unavailable"));
}

#[test_log::test(tokio::test)]
async fn test_malformed_body_fails_without_retry() {
    let dir = tempdir().unwrap();
    let mock_server = test_utils::mock_rate_server(
        "USD",
        ResponseTemplate::new(200).set_body_string("no rates here"),
        1,
    )
    .await;
    let config_path = test_utils::write_config(dir.path(), &mock_server.uri(), 0);

    let result = fxc::run_convert(100.0, "USD", "EUR", Some(config_path.to_str().unwrap())).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Malformed"));
}

#[test_log::test(tokio::test)]
async fn test_unknown_target_currency_fails() {
    let dir = tempdir().unwrap();
    let mock_server = test_utils::mock_rate_server(
        "USD",
        ResponseTemplate::new(200).set_body_string(test_utils::USD_RATES_BODY),
        1,
    )
    .await;
    let config_path = test_utils::write_config(dir.path(), &mock_server.uri(), 0);

    let result = fxc::run_convert(100.0, "USD", "ZZZ", Some(config_path.to_str().unwrap())).await;
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Unknown target currency")
    );
}

#[test_log::test(tokio::test)]
async fn test_unwritable_cache_path_degrades_to_memory() {
    let dir = tempdir().unwrap();
    // Point the cache at a regular file so the disk backend cannot open
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let mock_server = test_utils::mock_rate_server(
        "USD",
        ResponseTemplate::new(200).set_body_string(test_utils::USD_RATES_BODY),
        1,
    )
    .await;

    let config_path = dir.path().join("config.yaml");
    let config_content = format!(
        r#"
service:
  base_url: "{}"
cache:
  data_path: "{}"
"#,
        mock_server.uri(),
        blocker.display()
    );
    std::fs::write(&config_path, config_content).unwrap();

    let result = fxc::run_convert(100.0, "USD", "EUR", Some(config_path.to_str().unwrap())).await;
    assert!(result.is_ok(), "Conversion failed: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_missing_config_path_fails() {
    let result = fxc::run_convert(100.0, "USD", "EUR", Some("/nonexistent/config.yaml")).await;
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file")
    );
}
