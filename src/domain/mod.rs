// Domain layer: navigation models and the services deriving menu state from them
pub mod models;
pub mod services;
