use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub message: String, pub error: Option<String> }

#[derive(utoipa::ToSchema)]
pub struct ServicioInputDoc {
    pub nombre: String,
    pub correo: String,
    pub telefono: String,
    pub equipo: String,
    pub diagnostico: String,
    pub resultados: String,
    pub decision: String,
    pub taller: String,
    pub servicio: String,
    pub entrega: String,
    pub fecha: String,
}

#[derive(utoipa::ToSchema)]
pub struct ServicioDoc {
    pub id: i32,
    pub nombre: String,
    pub correo: String,
    pub telefono: String,
    pub equipo: String,
    pub diagnostico: String,
    pub resultados: String,
    pub decision: String,
    pub taller: String,
    pub servicio: String,
    pub entrega: String,
    pub fecha: String,
}

#[derive(utoipa::ToSchema)]
pub struct ServiciosDoc { pub servicios: Vec<ServicioDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::servicios::list,
        crate::servicios::get,
        crate::servicios::create,
        crate::servicios::replace,
        crate::servicios::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            ErrorDoc,
            ServicioInputDoc,
            ServicioDoc,
            ServiciosDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "servicio")
    )
)]
pub struct ApiDoc;
