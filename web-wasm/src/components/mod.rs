pub mod career_form;
pub mod header;
pub mod progress_bar;
pub mod resume_results;
pub mod resume_upload;
pub mod status_indicator;
