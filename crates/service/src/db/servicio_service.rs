use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use models::servicio::{self, Entity as ServicioEntity, ServicioInput};
use crate::errors::ServiceError;

/// List every record in storage order.
pub async fn list_servicios(db: &DatabaseConnection) -> Result<Vec<servicio::Model>, ServiceError> {
    let rows = ServicioEntity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Records whose id equals `id` (zero or one).
pub async fn find_servicios_by_id(db: &DatabaseConnection, id: i32) -> Result<Vec<servicio::Model>, ServiceError> {
    let rows = ServicioEntity::find()
        .filter(servicio::Column::Id.eq(id))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Insert one record; the id comes back from storage.
pub async fn create_servicio(db: &DatabaseConnection, input: ServicioInput) -> Result<servicio::Model, ServiceError> {
    let created = input.into_active_model().insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(created)
}

/// Overwrite all text columns of row `id`; returns affected rows.
pub async fn replace_servicio(db: &DatabaseConnection, id: i32, input: ServicioInput) -> Result<u64, ServiceError> {
    let res = ServicioEntity::update_many()
        .set(input.into_active_model())
        .filter(servicio::Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}

/// Delete row `id`; returns affected rows.
pub async fn delete_servicio(db: &DatabaseConnection, id: i32) -> Result<u64, ServiceError> {
    let res = ServicioEntity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}
