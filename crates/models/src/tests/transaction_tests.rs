use crate::provider;
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, Set, TransactionTrait};
use anyhow::Result;
use uuid::Uuid;

use super::setup_test_db;

#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let txn = db.begin().await?;
    let created = provider::ActiveModel {
        id: NotSet,
        name: Set(format!("tx_commit_{}", Uuid::new_v4())),
        country: Set("Spain".into()),
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    assert!(provider::Entity::find_by_id(created.id).one(&db).await?.is_some());
    provider::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_transaction_rollback_on_drop() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let created = {
        let txn = db.begin().await?;
        provider::ActiveModel {
            id: NotSet,
            name: Set(format!("tx_drop_{}", Uuid::new_v4())),
            country: Set("Spain".into()),
        }
        .insert(&txn)
        .await?
        // dropped without commit
    };

    assert!(provider::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}
