mod form_state;
mod geolocation;
mod notify;

pub use self::{form_state::*, geolocation::*, notify::*};
