use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One statement, so all three share a created_at and list in id order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                INSERT INTO items (name, priority)
                VALUES
                    ('Item 1', 'P3'),
                    ('Item 2', 'P3'),
                    ('Item 3', 'P3')
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DELETE FROM items WHERE name IN ('Item 1', 'Item 2', 'Item 3') AND id <= 3",
            )
            .await?;

        Ok(())
    }
}
