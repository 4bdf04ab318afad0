mod contact_enquiry_handler;
mod product_enquiry_handler;

pub use contact_enquiry_handler::*;
pub use product_enquiry_handler::*;
