// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置设置测试模块
///
/// 测试配置加载以及环境变量覆盖

#[cfg(test)]
mod tests {
    use pagetext::config::settings::Settings;
    use pagetext::domain::services::extraction_service::OutputFormat;
    use std::time::Duration;

    #[test]
    fn test_environment_overrides_defaults() {
        std::env::set_var("PAGETEXT__SERVER__PORT", "9123");
        std::env::set_var("PAGETEXT__FETCH__TIMEOUT_SECS", "15");
        std::env::set_var("PAGETEXT__EXTRACTION__OUTPUT_FORMAT", "formatted");

        let result = Settings::new();

        std::env::remove_var("PAGETEXT__SERVER__PORT");
        std::env::remove_var("PAGETEXT__FETCH__TIMEOUT_SECS");
        std::env::remove_var("PAGETEXT__EXTRACTION__OUTPUT_FORMAT");

        let settings = match result {
            Ok(settings) => settings,
            Err(e) => panic!("Failed to load configuration: {}", e),
        };

        assert_eq!(settings.server.port, 9123);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.fetch.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(settings.extraction.output_format, OutputFormat::Formatted);
    }
}
