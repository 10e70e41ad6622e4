//! Repository structs providing data access per table.

mod product_repo;

pub use product_repo::ProductRepo;
