pub mod auth;
pub mod departments;
pub mod instructors;
pub mod students;
