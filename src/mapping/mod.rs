pub mod mapping_model;
pub mod store;
pub mod suggest;
