//! Business logic services

pub mod access_service;
pub mod batch_service;
pub mod course_service;
pub mod department_service;
pub mod faculty_service;
pub mod practical_service;
pub mod student_service;
pub mod submission_service;

pub use access_service::AccessService;
pub use batch_service::BatchService;
pub use course_service::CourseService;
pub use department_service::DepartmentService;
pub use faculty_service::FacultyService;
pub use practical_service::PracticalService;
pub use student_service::StudentService;
pub use submission_service::SubmissionService;
