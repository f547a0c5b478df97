pub mod repository;

pub use repository::{SeaOrmServicioRepository, ServicioRepository};
