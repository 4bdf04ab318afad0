mod enquiry_service;

pub use enquiry_service::EnquiryService;
