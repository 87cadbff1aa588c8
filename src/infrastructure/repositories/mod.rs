// src/infrastructure/repositories/mod.rs
mod in_memory_category;

pub use in_memory_category::InMemoryCategoryRegistry;
