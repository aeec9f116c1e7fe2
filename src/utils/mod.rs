pub mod constants;
pub mod wait_for_button;
