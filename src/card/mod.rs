pub mod card_model;
pub mod defaults;
pub mod price;
pub mod renderer;
