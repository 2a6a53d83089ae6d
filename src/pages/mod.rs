pub mod category;
pub mod home;
pub mod listing;
pub mod search;
