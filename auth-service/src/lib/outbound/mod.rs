pub mod registries;
pub mod repositories;
