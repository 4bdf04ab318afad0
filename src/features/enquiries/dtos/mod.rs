mod enquiry_dto;

pub use enquiry_dto::*;
