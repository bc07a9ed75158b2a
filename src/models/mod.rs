pub mod add_on;
pub mod booking;
pub mod compare;
pub mod filter;
pub mod quote;
pub mod villa;
