use crate::consts::{DEFAULT_SERVER_URL, GENERATE_ENDPOINT};
use crate::error::{CellviewError, Result};
use crate::request::{SimulationRequest, SimulationResponse};

/// Something that turns simulation parameters into an image payload.
pub trait ImageBackend: Send + Sync {
    fn generate(&self, request: &SimulationRequest) -> Result<SimulationResponse>;
}

/// JSON-over-HTTP client for the generation endpoint.
pub struct HttpBackend {
    base_url: String,
    agent: ureq::Agent,
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATE_ENDPOINT)
    }
}

impl ImageBackend for HttpBackend {
    fn generate(&self, request: &SimulationRequest) -> Result<SimulationResponse> {
        let url = self.endpoint();
        let body = request.to_json()?;
        tracing::debug!(%url, %body, "sending payload");

        let response = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_string(&body);

        match response {
            Ok(resp) => {
                tracing::debug!(status = resp.status(), "response received");
                SimulationResponse::from_reader(resp.into_reader())
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                tracing::warn!(status, "generation request rejected");
                Err(CellviewError::HttpStatus { status, body })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(CellviewError::Transport(transport.to_string()))
            }
        }
    }
}
