//! Workshop service record, stored in the `taller` table.

use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "taller")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub correo: String,
    pub telefono: String,
    pub equipo: String,
    #[sea_orm(column_type = "Text")]
    pub diagnostico: String,
    #[sea_orm(column_type = "Text")]
    pub resultados: String,
    pub decision: String,
    pub taller: String,
    pub servicio: String,
    pub entrega: String,
    pub fecha: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Request body for create and full replace.
///
/// Missing or `null` fields become empty strings; an `id` in the body is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicioInput {
    #[serde(deserialize_with = "null_as_empty")]
    pub nombre: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub correo: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub telefono: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub equipo: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub diagnostico: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub resultados: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub decision: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub taller: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub servicio: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub entrega: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub fecha: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ServicioInput {
    /// Active model with every text column set and the id left to storage.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            nombre: Set(self.nombre),
            correo: Set(self.correo),
            telefono: Set(self.telefono),
            equipo: Set(self.equipo),
            diagnostico: Set(self.diagnostico),
            resultados: Set(self.resultados),
            decision: Set(self.decision),
            taller: Set(self.taller),
            servicio: Set(self.servicio),
            entrega: Set(self.entrega),
            fecha: Set(self.fecha),
        }
    }

    pub fn with_id(self, id: i32) -> Model {
        Model {
            id,
            nombre: self.nombre,
            correo: self.correo,
            telefono: self.telefono,
            equipo: self.equipo,
            diagnostico: self.diagnostico,
            resultados: self.resultados,
            decision: self.decision,
            taller: self.taller,
            servicio: self.servicio,
            entrega: self.entrega,
            fecha: self.fecha,
        }
    }
}

/// `{"servicios": [...]}` envelope returned by the list and get endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Servicios {
    pub servicios: Vec<Model>,
}

impl From<Vec<Model>> for Servicios {
    fn from(servicios: Vec<Model>) -> Self {
        Self { servicios }
    }
}
