//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod access_repo;
pub mod batch_repo;
pub mod course_repo;
pub mod department_repo;
pub mod faculty_repo;
pub mod language_repo;
pub mod practical_repo;
pub mod student_repo;
pub mod submission_repo;

pub use access_repo::AccessRepository;
pub use batch_repo::BatchRepository;
pub use course_repo::CourseRepository;
pub use department_repo::DepartmentRepository;
pub use faculty_repo::FacultyRepository;
pub use language_repo::LanguageRepository;
pub use practical_repo::PracticalRepository;
pub use student_repo::StudentRepository;
pub use submission_repo::SubmissionRepository;
