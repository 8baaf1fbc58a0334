pub mod course;
pub mod department;
pub mod enrollment;
pub mod instructor;
pub mod person;
pub mod role;
pub mod student;
