pub mod broadcaster;
pub mod entities;
pub mod images;
pub mod state;
pub mod traits;
