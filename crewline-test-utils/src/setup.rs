use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{error::TestError, fixtures::seed::SeedContext};

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
    pub session: Session,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        // FK constraints must fire so rollback behavior matches postgres
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        Ok(TestSetup {
            state: TestAppState { db },
            session,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Fixture seeding context bound to this setup's database.
    pub fn seed(&self) -> SeedContext<'_> {
        SeedContext::new(&self.state.db)
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_onboarding_tables {
    () => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Company),
                schema.create_table_from_entity(entity::prelude::AppUser),
                schema.create_table_from_entity(entity::prelude::Job),
                schema.create_table_from_entity(entity::prelude::Candidate),
                schema.create_table_from_entity(entity::prelude::Document),
                schema.create_table_from_entity(entity::prelude::OnboardingTemplate),
                schema.create_table_from_entity(entity::prelude::OnboardingTaskTemplate),
                schema.create_table_from_entity(entity::prelude::TemplateTaskMap),
                schema.create_table_from_entity(entity::prelude::NewHire),
                schema.create_table_from_entity(entity::prelude::OnboardingTask),
                schema.create_table_from_entity(entity::prelude::Note),
                schema.create_table_from_entity(entity::prelude::NewHireNote),
                schema.create_table_from_entity(entity::prelude::NewHireDocument),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
