pub mod camera;
pub mod hud;
pub mod page;
pub mod particles;
pub mod plugin;
pub mod pointer;
