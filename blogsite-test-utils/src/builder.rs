//! Declarative test builder.
//!
//! `TestBuilder` queues table creation and fixture inserts, then runs them all in
//! `build()` against a fresh in-memory database.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_blog_tables: bool,

    users: Vec<String>,
    regions: Vec<String>,
    categories: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_blog_tables: false,
            users: Vec::new(),
            regions: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Add every blogsite table to the test database.
    ///
    /// Tables are created parents first: BlogsiteUser, Region, District, Category,
    /// Site, Blog, BlogCategory, BlogViewing, Comment and Message.
    pub fn with_blog_tables(mut self) -> Self {
        self.include_blog_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; they are created in call order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use blogsite_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), blogsite_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Region)
    ///     .with_table(District)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the given username during `build()`.
    ///
    /// The email is derived as `<username>@example.com`.
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Insert a region with the given name during `build()`.
    pub fn with_region(mut self, name: impl Into<String>) -> Self {
        self.regions.push(name.into());
        self
    }

    /// Insert a category during `build()`, using the lowercased name as slug.
    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.categories.push(name.into());
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_blog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::BlogsiteUser),
                schema.create_table_from_entity(entity::prelude::Region),
                schema.create_table_from_entity(entity::prelude::District),
                schema.create_table_from_entity(entity::prelude::Category),
                schema.create_table_from_entity(entity::prelude::Site),
                schema.create_table_from_entity(entity::prelude::Blog),
                schema.create_table_from_entity(entity::prelude::BlogCategory),
                schema.create_table_from_entity(entity::prelude::BlogViewing),
                schema.create_table_from_entity(entity::prelude::Comment),
                schema.create_table_from_entity(entity::prelude::Message),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for username in self.users {
            setup.user().insert_user(&username).await?;
        }

        for name in self.regions {
            setup.region().insert_region(&name).await?;
        }

        for name in self.categories {
            let slug = name.to_lowercase();
            setup.blog().insert_category(&name, &slug).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
