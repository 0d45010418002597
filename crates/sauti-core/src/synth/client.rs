//! HTTP client for the upstream synthesis provider

use bytes::Bytes;
use futures::TryStreamExt;
use serde_json::json;
use tracing::{error, info};

use crate::audio;
use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use crate::synth::request::{SynthesisPayload, SynthesisRequest};
use crate::synth::stream::AudioStream;

/// Query string asking the provider for raw 16 kHz PCM
const OUTPUT_FORMAT: &str = "pcm_16000";

/// Header carrying the provider API key
const API_KEY_HEADER: &str = "xi-api-key";

/// Client for the provider's text-to-speech endpoints.
///
/// Owns the outbound connection for the lifetime of one call; the configured
/// timeout bounds the whole exchange, connect included. One instance is
/// shared across requests — the underlying pool is managed by `reqwest`.
pub struct SynthesisClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl SynthesisClient {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Synthesize `request` and return the complete audio as one WAV blob.
    ///
    /// The provider's raw PCM response is framed before being returned, so
    /// the caller always holds playable audio.
    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<Bytes> {
        request.validate()?;

        let url = format!(
            "{}/v1/text-to-speech/{}?output_format={}",
            self.config.base_url, request.voice_id, OUTPUT_FORMAT
        );

        info!("Requesting synthesis for voice {}", request.voice_id);
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&self.payload(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Provider returned {} for voice {}: {}",
                status, request.voice_id, body
            );
            return Err(Error::UpstreamStatus {
                code: status.as_u16(),
                body,
            });
        }

        let pcm = response.bytes().await?;
        let wav = audio::pcm_to_wav(&pcm)?;
        Ok(Bytes::from(wav))
    }

    /// Open a streaming synthesis exchange and return the chunk sequence.
    ///
    /// A non-2xx initial status is read to completion and returned as an
    /// error here; the stream is only handed out once the provider has
    /// committed to sending audio. Read failures after that surface as
    /// errors on the stream itself.
    pub async fn synthesize_stream(&self, request: &SynthesisRequest) -> Result<AudioStream> {
        request.validate()?;

        let url = format!(
            "{}/v1/text-to-speech/{}/stream?output_format={}",
            self.config.base_url, request.voice_id, OUTPUT_FORMAT
        );

        info!("Starting streaming synthesis for voice {}", request.voice_id);
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&self.payload(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Provider returned {} for streaming voice {}: {}",
                status, request.voice_id, body
            );
            return Err(Error::UpstreamStatus {
                code: status.as_u16(),
                body,
            });
        }

        Ok(AudioStream::new(
            response.bytes_stream().map_err(Error::from),
        ))
    }

    fn payload<'a>(&'a self, request: &'a SynthesisRequest) -> SynthesisPayload<'a> {
        SynthesisPayload {
            text: &request.text,
            model_id: &self.config.model_id,
            voice_settings: json!({}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::WAV_HEADER_LEN;
    use futures::StreamExt;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> ProviderConfig {
        ProviderConfig {
            base_url,
            api_key: "test-key".to_string(),
            ..ProviderConfig::default()
        }
    }

    #[tokio::test]
    async fn test_synthesize_frames_provider_pcm() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/voice1"))
            .and(query_param("output_format", "pcm_16000"))
            .and(header("xi-api-key", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "text": "hello",
                "model_id": "eleven_turbo_v2_5",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 320]))
            .expect(1)
            .mount(&server)
            .await;

        let client = SynthesisClient::new(test_config(server.uri())).unwrap();
        let wav = client
            .synthesize(&SynthesisRequest::new("voice1", "hello"))
            .await
            .unwrap();

        assert_eq!(wav.len(), WAV_HEADER_LEN + 320);
        assert_eq!(&wav[0..4], b"RIFF");
    }

    #[tokio::test]
    async fn test_synthesize_maps_non_2xx_to_upstream_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let client = SynthesisClient::new(test_config(server.uri())).unwrap();
        let err = client
            .synthesize(&SynthesisRequest::new("voice1", "hello"))
            .await
            .unwrap_err();

        match err {
            Error::UpstreamStatus { code, body } => {
                assert_eq!(code, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_synthesize_maps_refused_connection() {
        // Nothing listens here; the connect attempt itself fails.
        let client = SynthesisClient::new(test_config("http://127.0.0.1:9".to_string())).unwrap();
        let err = client
            .synthesize(&SynthesisRequest::new("voice1", "hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Connection(_)));
        assert!(err.to_string().contains("Service unavailable"));
    }

    #[tokio::test]
    async fn test_synthesize_times_out_on_slow_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(std::time::Duration::from_secs(5))
                    .set_body_bytes(vec![0u8; 2]),
            )
            .mount(&server)
            .await;

        let config = ProviderConfig {
            timeout_secs: 1,
            ..test_config(server.uri())
        };
        let client = SynthesisClient::new(config).unwrap();
        let err = client
            .synthesize(&SynthesisRequest::new("voice1", "hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Timeout));
    }

    #[tokio::test]
    async fn test_empty_text_fails_before_any_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = SynthesisClient::new(test_config(server.uri())).unwrap();
        let err = client
            .synthesize(&SynthesisRequest::new("voice1", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));

        let err = client
            .synthesize_stream(&SynthesisRequest::new("", "hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_synthesize_stream_relays_bytes_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/voice1/stream"))
            .and(query_param("output_format", "pcm_16000"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"aabbcc".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let client = SynthesisClient::new(test_config(server.uri())).unwrap();
        let stream = client
            .synthesize_stream(&SynthesisRequest::new("voice1", "hello"))
            .await
            .unwrap();

        let chunks: Vec<Bytes> = stream.map(|c| c.unwrap()).collect().await;
        assert!(chunks.iter().all(|c| c.len() <= crate::synth::MAX_CHUNK_BYTES));
        assert_eq!(chunks.concat(), b"aabbcc");
    }

    #[tokio::test]
    async fn test_synthesize_stream_rejects_bad_initial_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("provider exploded"))
            .mount(&server)
            .await;

        let client = SynthesisClient::new(test_config(server.uri())).unwrap();
        let err = client
            .synthesize_stream(&SynthesisRequest::new("voice1", "hello"))
            .await
            .unwrap_err();

        match err {
            Error::UpstreamStatus { code, body } => {
                assert_eq!(code, 500);
                assert_eq!(body, "provider exploded");
            }
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }
}
