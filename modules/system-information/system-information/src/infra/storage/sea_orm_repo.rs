use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, TransactionTrait};
use serde_json::Value;

use crate::domain::repo::SettingsStore;

use super::entity::{self, Entity as SettingsEntity};
use super::mapper;

/// Settings store backed by the application database.
///
/// Values are upserted by key; `apply` stages the whole batch inside one
/// database transaction so a failure mid-batch rolls back every write.
pub struct SeaOrmSettingsStore {
    db: DatabaseConnection,
}

impl SeaOrmSettingsStore {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsStore for SeaOrmSettingsStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Value>> {
        let found = SettingsEntity::find_by_id(key.to_owned())
            .one(&self.db)
            .await?;

        found
            .map(|model| mapper::decode(&model.value))
            .transpose()
            .map_err(Into::into)
    }

    async fn apply(&self, changes: &[(String, Value)]) -> anyhow::Result<()> {
        // Encode outside the transaction; a bad value must not leave a
        // half-applied batch behind.
        let staged = changes
            .iter()
            .map(|(key, value)| Ok((key.clone(), mapper::encode(value)?)))
            .collect::<Result<Vec<_>, DbErr>>()?;

        self.db
            .transaction::<_, (), DbErr>(move |txn| {
                Box::pin(async move {
                    for (key, value) in staged {
                        let model = entity::ActiveModel {
                            key: ActiveValue::Set(key),
                            value: ActiveValue::Set(value),
                        };

                        SettingsEntity::insert(model)
                            .on_conflict(
                                OnConflict::column(entity::Column::Key)
                                    .update_column(entity::Column::Value)
                                    .to_owned(),
                            )
                            .exec(txn)
                            .await?;
                    }

                    Ok(())
                })
            })
            .await?;

        Ok(())
    }
}

// The sqlite driver is always present in test builds via dev-dependencies.
#[cfg(test)]
mod tests {
    use super::super::migrations::Migrator;
    use super::*;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;
    use serde_json::json;

    async fn connect() -> SeaOrmSettingsStore {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmSettingsStore::new(db)
    }

    #[tokio::test]
    async fn applies_and_reads_back_a_batch() {
        let store = connect().await;

        store
            .apply(&[
                ("organization".to_owned(), json!("Sample")),
                ("fqdn".to_owned(), json!("example.com")),
            ])
            .await
            .unwrap();

        assert_eq!(
            store.get("organization").await.unwrap(),
            Some(json!("Sample"))
        );
        assert_eq!(store.get("fqdn").await.unwrap(), Some(json!("example.com")));
        assert_eq!(store.get("http_type").await.unwrap(), None);
    }

    #[tokio::test]
    async fn overwrites_existing_keys() {
        let store = connect().await;

        store
            .apply(&[("organization".to_owned(), json!("First"))])
            .await
            .unwrap();
        store
            .apply(&[("organization".to_owned(), json!("Second"))])
            .await
            .unwrap();

        assert_eq!(
            store.get("organization").await.unwrap(),
            Some(json!("Second"))
        );
    }

    #[tokio::test]
    async fn empty_batch_is_a_no_op() {
        let store = connect().await;

        store.apply(&[]).await.unwrap();

        assert_eq!(store.get("organization").await.unwrap(), None);
    }
}
