mod navbar_category_handler;

pub use navbar_category_handler::*;
