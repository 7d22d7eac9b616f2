//! Mock lookup-endpoint creation utilities.
//!
//! Registers mock HTTP endpoints on the setup's server under the same
//! paths the [`crate::TestSetup`] endpoint templates produce. Each mock
//! verifies it was called the expected number of times.

use mockito::Mock;

use crate::fixtures::character::CharacterFixtures;

impl<'a> CharacterFixtures<'a> {
    /// Create a mock endpoint for the primary site's bio document.
    pub fn create_bio_endpoint(
        &mut self,
        character_name: &str,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/character/bio/d/5/name/{}/bio.xml", character_name);

        self.setup
            .server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "text/xml")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock primary-site endpoint that returns an error status code.
    pub fn create_bio_endpoint_error(
        &mut self,
        character_name: &str,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/character/bio/d/5/name/{}/bio.xml", character_name);

        self.setup
            .server
            .mock("GET", path.as_str())
            .with_status(status_code)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for the fallback site's ASMX document.
    pub fn create_rubika_endpoint(
        &mut self,
        character_name: &str,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        let path = format!(
            "/services/characters.asmx/GetAoCharacterXml?name={}",
            character_name
        );

        self.setup
            .server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "text/xml")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock fallback-site endpoint that returns an error status code.
    pub fn create_rubika_endpoint_error(
        &mut self,
        character_name: &str,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        let path = format!(
            "/services/characters.asmx/GetAoCharacterXml?name={}",
            character_name
        );

        self.setup
            .server
            .mock("GET", path.as_str())
            .with_status(status_code)
            .expect(expected_requests)
            .create()
    }
}
