use async_trait::async_trait;
use models::db::{Connector, Lease};
use models::errors::ModelError;
use models::servicio::{Model, ServicioInput};
use tracing::{debug, instrument};

use crate::db::servicio_service;
use crate::errors::ServiceError;

#[async_trait]
pub trait ServicioRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
    /// Exact id match; an unknown id yields an empty list, not an error.
    async fn get(&self, id: i32) -> Result<Vec<Model>, ServiceError>;
    async fn create(&self, input: ServicioInput) -> Result<Model, ServiceError>;
    /// `NotFound` when no row has this id.
    async fn replace(&self, id: i32, input: ServicioInput) -> Result<(), ServiceError>;
    /// `NotFound` when no row has this id.
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository. Every call checks out its own connection.
pub struct SeaOrmServicioRepository {
    pub connector: Connector,
}

impl SeaOrmServicioRepository {
    pub fn new(connector: Connector) -> Self { Self { connector } }

    async fn lease(&self) -> Result<Lease, ServiceError> {
        self.connector.acquire().await.map_err(|e| ServiceError::Model(ModelError::from(e)))
    }
}

fn require_rows(affected: u64) -> Result<(), ServiceError> {
    if affected == 0 {
        return Err(ServiceError::not_found("servicio"));
    }
    Ok(())
}

#[async_trait]
impl ServicioRepository for SeaOrmServicioRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        let lease = self.lease().await?;
        let res = servicio_service::list_servicios(lease.conn()).await;
        lease.release().await;
        if let Ok(rows) = &res { debug!(count = rows.len(), "listed servicios"); }
        res
    }

    #[instrument(skip(self))]
    async fn get(&self, id: i32) -> Result<Vec<Model>, ServiceError> {
        let lease = self.lease().await?;
        let res = servicio_service::find_servicios_by_id(lease.conn(), id).await;
        lease.release().await;
        res
    }

    #[instrument(skip(self, input), fields(nombre = %input.nombre))]
    async fn create(&self, input: ServicioInput) -> Result<Model, ServiceError> {
        let lease = self.lease().await?;
        let res = servicio_service::create_servicio(lease.conn(), input).await;
        lease.release().await;
        res
    }

    #[instrument(skip(self, input))]
    async fn replace(&self, id: i32, input: ServicioInput) -> Result<(), ServiceError> {
        let lease = self.lease().await?;
        let res = servicio_service::replace_servicio(lease.conn(), id, input).await;
        lease.release().await;
        require_rows(res?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let lease = self.lease().await?;
        let res = servicio_service::delete_servicio(lease.conn(), id).await;
        lease.release().await;
        require_rows(res?)
    }
}
