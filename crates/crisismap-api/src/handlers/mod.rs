pub mod health;
pub mod report_list;
pub mod report_submit;

pub use health::health_check;
pub use report_list::list_reports;
pub use report_submit::submit_report;

use serde::Serialize;

/// Simple message body used by success responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
