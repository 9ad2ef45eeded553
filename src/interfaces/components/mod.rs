pub mod banner;
pub mod card;
pub mod check_item;
