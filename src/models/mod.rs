pub mod course;
pub mod enrollment;

pub use course::{Category, Course, CourseSummary, Level, NewCourse};
pub use enrollment::{EnrollRequest, Enrollment, EnrollmentStatus, EnrollmentWithCourse};
