mod classification;
mod photo;
mod report_service;

pub use classification::{assign_department, infer_priority};
pub use photo::{decode_photo_data_url, PhotoError};
pub use report_service::ReportService;
