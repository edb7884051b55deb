//! API middleware.

mod panic;

pub use panic::handle_panic;
