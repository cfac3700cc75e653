pub mod analytics;
pub mod assignment;
pub mod learning_resource;
pub mod student;
pub mod submission;
pub mod teacher;

pub use analytics::{PerformanceData, StudentProgress};
pub use assignment::Assignment;
pub use learning_resource::LearningResource;
pub use student::Student;
pub use submission::Submission;
pub use teacher::Teacher;
