pub mod parser;
pub mod registry;

pub use parser::{load_registry, parse_record, LoadError, Loaded, MalformedPolicy, ParseError};
pub use registry::{Point, Registry};
