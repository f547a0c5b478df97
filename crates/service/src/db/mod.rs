pub mod servicio_service;
