mod report_dto;

pub use report_dto::{
    CreateReportDto, ReportCreatedResponseDto, ReportListResponseDto, ReportResponseDto,
    REQUIRED_FIELDS_MESSAGE,
};
