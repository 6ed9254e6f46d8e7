pub mod search_bar;
pub mod filter_chip_bar;
pub mod sort_button;
pub mod announcement_list;
pub mod announcement_card;
