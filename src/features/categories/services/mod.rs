mod category_service;

pub(crate) use category_service::category_visible;
pub use category_service::CategoryService;
