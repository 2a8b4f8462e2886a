pub mod session;
pub mod stream;
pub mod style;
