pub mod announcement_api;
