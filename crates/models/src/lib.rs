pub mod errors;
pub mod db;
pub mod servicio;

pub use servicio::{ServicioInput, Servicios};
