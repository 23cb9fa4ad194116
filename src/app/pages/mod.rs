pub mod admin;
pub mod routes;
