pub mod filter_state;
