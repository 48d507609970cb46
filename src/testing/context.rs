use crate::testing::*;
use crate::{Dao, Declaration, Service};
pub use test_context::test_context;
use test_context::AsyncTestContext;

/// A fresh in-memory database holding the `chats` table.
pub struct SqliteTestContext {
    pub service: Service,
    pub chats: Dao,
}

impl AsyncTestContext for SqliteTestContext {
    async fn setup() -> Self {
        crate::testing::common_init();
        let model = chats();
        let service = Service::new("sqlite::memory:", [model.clone()]);
        let chats = Dao::define(model, [Declaration::inferred("sql_find_all_by_type")])
            .expect("chat dao should define");
        Self { service, chats }
    }

    async fn teardown(self) {
        self.service.close().await;
    }
}

mod sqlite_context_tests {
    use super::*;

    #[test_context(SqliteTestContext)]
    #[tokio::test]
    async fn can_connect(ctx: &mut SqliteTestContext) -> crate::Result {
        let pool = ctx.service.try_connect().await?;
        sqlx::query("SELECT 1;").fetch_one(&pool).await?;
        Ok(())
    }

    #[test_context(SqliteTestContext)]
    #[tokio::test]
    async fn contexts_are_isolated(ctx: &mut SqliteTestContext) -> crate::Result {
        let rows = ctx.service.try_execute(&ctx.chats.find_all()).await?;
        assert!(rows.is_empty());
        Ok(())
    }
}
