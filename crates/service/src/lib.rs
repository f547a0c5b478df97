//! Record access layer for workshop service records.
//! - `db` holds the statements, one function per operation.
//! - `servicio` wraps them behind a repository trait that owns connection lifecycle.

pub mod errors;
pub mod db;
pub mod servicio;
#[cfg(test)]
pub mod test_support;
