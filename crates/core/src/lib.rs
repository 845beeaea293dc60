pub mod driver;
pub mod value;

pub use driver::{ConnectParams, Connection, Cursor, Driver, DriverError};
pub use value::SqlValue;
