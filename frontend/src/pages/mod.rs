pub mod home_page;
pub mod search_page;
pub mod filter_page;
pub mod announcement_page;
