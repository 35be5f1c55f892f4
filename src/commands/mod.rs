pub mod advance;
pub mod permissions;
pub mod photos;
pub mod render;
pub mod show;
pub mod stage;
