use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment: a mock HTTP server standing in for both lookup sites
/// and an in-memory SQLite database.
///
/// The endpoint template helpers point a lookup client at the mock server;
/// the paths they produce are the same ones the fixture endpoint builders
/// register mocks under.
pub struct TestSetup {
    pub server: ServerGuard,
    pub db: DatabaseConnection,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let db = Database::connect("sqlite::memory:").await.unwrap();

        Ok(TestSetup {
            server: mock_server,
            db,
            mocks: Vec::new(),
        })
    }

    /// Primary endpoint template pointing at the mock server.
    pub fn people_endpoint(&self) -> String {
        format!(
            "{}/character/bio/d/5/name/{{name}}/bio.xml",
            self.server.url()
        )
    }

    /// Fallback endpoint template pointing at the mock server.
    pub fn rubika_endpoint(&self) -> String {
        format!(
            "{}/services/characters.asmx/GetAoCharacterXml?name={{name}}",
            self.server.url()
        )
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on all mocks held by this setup to verify they were
    /// invoked the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
