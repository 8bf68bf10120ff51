pub mod args;
pub mod drivers;
pub mod form;
pub mod session;
