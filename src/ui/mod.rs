pub mod components;
pub mod highlight;
pub mod layout;
pub mod theme;
