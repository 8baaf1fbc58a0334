//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod course_repo;
pub mod department_repo;
pub mod enrollment_repo;
pub mod instructor_repo;
pub mod person_repo;
pub mod role_repo;
pub mod student_repo;

pub use course_repo::CourseRepo;
pub use department_repo::DepartmentRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use instructor_repo::InstructorRepo;
pub use person_repo::PersonRepo;
pub use role_repo::RoleRepo;
pub use student_repo::StudentRepo;
