// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use pagetext::utils::telemetry;

    #[test]
    fn test_telemetry_initialization_is_idempotent() {
        telemetry::init_telemetry();
        // A second call must not panic on the already-installed subscriber
        telemetry::init_telemetry();

        tracing::debug!("This is a debug message");
        tracing::info!(url = "https://example.com", chars = 42, "Extracted page text");
        tracing::warn!(status_code = 404, "Target returned error status");
    }
}
