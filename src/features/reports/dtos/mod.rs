mod report_dto;

pub use report_dto::{coerce_comment, CreateReportDto, ReviewInputDto, UpdateReportDto};
