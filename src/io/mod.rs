pub mod launch;
pub mod rollover;
pub mod store_io;
