pub mod positions;
pub mod services;
pub mod traits;
