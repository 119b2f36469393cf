mod error;
mod request_current_location;


pub use self::{error::Error, request_current_location::*};
