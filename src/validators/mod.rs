mod name_validators;
mod output_format;
mod reserved_words;
mod validation_error;
mod validation_request;

pub use name_validators::*;
pub use output_format::*;
pub use reserved_words::*;
pub use validation_error::*;
pub use validation_request::*;
