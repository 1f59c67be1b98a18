mod arguments;
mod command;
mod error;
mod log;
mod options;

pub use arguments::{Arguments, Operation};
pub use command::execute;
pub use error::ApplicationError;
pub use options::Options;
