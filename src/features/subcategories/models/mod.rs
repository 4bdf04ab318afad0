mod subcategory;

pub use subcategory::SubCategory;
