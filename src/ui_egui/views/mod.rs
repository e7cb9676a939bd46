pub mod card_list;
pub mod palette;
