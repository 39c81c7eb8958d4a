pub mod assessment;
pub mod risk;

pub use assessment::{Assessment, AssessmentError};
pub use risk::RiskRecord;
