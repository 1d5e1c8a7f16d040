mod dataset;
mod round;
mod section;

pub use dataset::{BreakdownRow, Dataset, DatasetError, DatasetField, DatasetRow};
pub use round::RoundRecord;
pub use section::TutorialSection;
