/// Distance fields, perfect-maze verification and solving routes
pub mod structure;
