//! Declarative test builder.
//!
//! Tables are queued on the builder and created when [`TestBuilder::build`] runs.

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// ```no_run
/// use entity::prelude::*;
/// use sena_test_utils::TestBuilder;
///
/// # async fn example() -> Result<(), sena_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_table(Regional)
///     .with_table(Center)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Add an entity table to the test database.
    ///
    /// Tables are created in the order they are added, so parents should be added before the
    /// tables referencing them.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add every table of the schema, parents first.
    pub fn with_all_tables(self) -> Self {
        use entity::prelude::*;

        self.with_table(Person)
            .with_table(User)
            .with_table(Rol)
            .with_table(UserRol)
            .with_table(Form)
            .with_table(RolForm)
            .with_table(Module)
            .with_table(FormModule)
            .with_table(Regional)
            .with_table(Center)
            .with_table(Sede)
            .with_table(UserSede)
            .with_table(Program)
            .with_table(Aprendiz)
            .with_table(Instructor)
            .with_table(AprendizProgram)
            .with_table(InstructorProgram)
            .with_table(Process)
            .with_table(TypeModality)
            .with_table(RegisterySofia)
            .with_table(Concept)
            .with_table(Enterprise)
            .with_table(State)
            .with_table(Verification)
            .with_table(AprendizProcessInstructor)
            .with_table(ChangeLog)
    }

    /// Connect to a fresh in-memory database and create the queued tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;
        test.with_tables(self.tables).await?;

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
