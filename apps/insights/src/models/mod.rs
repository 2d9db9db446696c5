pub mod personnel;
pub mod prediction;
pub mod session;
