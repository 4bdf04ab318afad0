mod navbar_category;

pub use navbar_category::NavbarCategory;
