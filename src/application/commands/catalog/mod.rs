mod register;
mod service;

pub use register::RegisterCategoryCommand;
pub use service::CatalogCommandService;
