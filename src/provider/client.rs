//! HTTP client for the character-lookup sites.

use crate::error::{provider::ProviderError, Error};
use crate::provider::Source;

/// Default endpoint template for the primary lookup site.
pub const PEOPLE_ENDPOINT: &str =
    "http://people.anarchy-online.com/character/bio/d/5/name/{name}/bio.xml";
/// Default endpoint template for the fallback lookup site.
pub const RUBIKA_ENDPOINT: &str =
    "https://rubi-ka.net/services/characters.asmx/GetAoCharacterXml?name={name}";

const NAME_PLACEHOLDER: &str = "{name}";

/// HTTP client over both character-lookup sites.
///
/// One `fetch` is one outbound GET; retries and fallback between sites are
/// the resolution service's job, not this client's. No request timeout is
/// configured here beyond reqwest's own connection defaults.
#[derive(Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    people_endpoint: String,
    rubika_endpoint: String,
}

impl LookupClient {
    /// Creates a builder preconfigured with the production endpoints.
    pub fn builder() -> LookupClientBuilder {
        LookupClientBuilder::default()
    }

    /// The URL a lookup for `character_name` against `source` will hit.
    ///
    /// The character name is URL-escaped before being interpolated into the
    /// endpoint template.
    pub fn character_url(&self, source: Source, character_name: &str) -> String {
        self.endpoint(source)
            .replace(NAME_PLACEHOLDER, &urlencoding::encode(character_name))
    }

    /// Fetches the raw character document for `character_name` from `source`.
    ///
    /// Returns the body on HTTP 200. Any other status, or a request that
    /// never completes, is a [`ProviderError`]; a successful-but-empty body
    /// is returned as-is and left to the parser to classify.
    pub async fn fetch(
        &self,
        source: Source,
        character_name: &str,
    ) -> Result<String, ProviderError> {
        let url = self.character_url(source, character_name);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|reason| ProviderError::Request {
                provider: source,
                reason,
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ProviderError::Status {
                provider: source,
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|reason| ProviderError::Request {
            provider: source,
            reason,
        })
    }

    fn endpoint(&self, source: Source) -> &str {
        match source {
            Source::PeopleAnarchyOnline => &self.people_endpoint,
            Source::RubiKa => &self.rubika_endpoint,
        }
    }
}

/// Builder for [`LookupClient`].
pub struct LookupClientBuilder {
    user_agent: String,
    people_endpoint: String,
    rubika_endpoint: String,
}

impl Default for LookupClientBuilder {
    fn default() -> Self {
        Self {
            user_agent: concat!("whompah/", env!("CARGO_PKG_VERSION")).to_string(),
            people_endpoint: PEOPLE_ENDPOINT.to_string(),
            rubika_endpoint: RUBIKA_ENDPOINT.to_string(),
        }
    }
}

impl LookupClientBuilder {
    /// Sets the user agent sent on every lookup request.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Overrides the primary endpoint template (`{name}` placeholder).
    pub fn people_endpoint(mut self, endpoint: &str) -> Self {
        self.people_endpoint = endpoint.to_string();
        self
    }

    /// Overrides the fallback endpoint template (`{name}` placeholder).
    pub fn rubika_endpoint(mut self, endpoint: &str) -> Self {
        self.rubika_endpoint = endpoint.to_string();
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<LookupClient, Error> {
        let http = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .build()?;

        Ok(LookupClient {
            http,
            people_endpoint: self.people_endpoint,
            rubika_endpoint: self.rubika_endpoint,
        })
    }
}
