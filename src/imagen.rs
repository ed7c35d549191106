use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "imagen-4.0-fast-generate-001";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, thiserror::Error)]
pub enum ImagenError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("image API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("image payload was not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("image API returned no images")]
    Empty,
}

pub trait ImageGenerator {
    fn generate(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        count: u32,
    ) -> Result<Vec<Vec<u8>>, ImagenError>;
}

pub struct ImagenClient {
    client: reqwest::blocking::Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: [PredictInstance<'a>; 1],
    parameters: PredictParameters<'a>,
}

#[derive(Debug, Serialize)]
struct PredictInstance<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters<'a> {
    sample_count: u32,
    aspect_ratio: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
}

impl ImagenClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, ImagenError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:predict", self.base_url, self.model)
    }
}

impl ImageGenerator for ImagenClient {
    fn generate(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        count: u32,
    ) -> Result<Vec<Vec<u8>>, ImagenError> {
        let body = PredictRequest {
            instances: [PredictInstance { prompt }],
            parameters: PredictParameters {
                sample_count: count.max(1),
                aspect_ratio,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ImagenError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: PredictResponse = response.json()?;
        decode_predictions(payload)
    }
}

fn decode_predictions(payload: PredictResponse) -> Result<Vec<Vec<u8>>, ImagenError> {
    let images = payload
        .predictions
        .into_iter()
        .filter_map(|prediction| prediction.bytes_base64_encoded)
        .map(|encoded| STANDARD.decode(encoded))
        .collect::<Result<Vec<Vec<u8>>, base64::DecodeError>>()?;

    if images.is_empty() {
        return Err(ImagenError::Empty);
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{ImagenClient, ImagenError, PredictResponse, decode_predictions};

    #[test]
    fn decode_predictions_reads_base64_images() {
        let payload: PredictResponse = serde_json::from_str(
            r#"{"predictions": [{"bytesBase64Encoded": "iVBORw==", "mimeType": "image/png"}, {"raiFilteredReason": "blocked"}]}"#,
        )
        .expect("response should parse");

        let images = decode_predictions(payload).expect("one image");
        assert_eq!(images, vec![vec![0x89, b'P', b'N', b'G']]);
    }

    #[test]
    fn decode_predictions_reports_empty_results() {
        let payload: PredictResponse = serde_json::from_str("{}").expect("empty response");
        assert!(matches!(decode_predictions(payload), Err(ImagenError::Empty)));
    }

    #[test]
    fn decode_predictions_rejects_bad_base64() {
        let payload: PredictResponse =
            serde_json::from_str(r#"{"predictions": [{"bytesBase64Encoded": "@@@"}]}"#)
                .expect("response should parse");
        assert!(matches!(decode_predictions(payload), Err(ImagenError::Decode(_))));
    }

    #[test]
    fn endpoint_joins_base_url_and_model() {
        let client = ImagenClient::new(
            "key".to_string(),
            "imagen-test".to_string(),
            "http://localhost:9/v1beta/".to_string(),
            Duration::from_secs(1),
        )
        .expect("client should build");
        assert_eq!(client.endpoint(), "http://localhost:9/v1beta/models/imagen-test:predict");
        assert_eq!(client.model(), "imagen-test");
    }
}
