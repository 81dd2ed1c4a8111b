pub mod dto;
pub mod indicator;
pub mod terminal;
pub mod view;
