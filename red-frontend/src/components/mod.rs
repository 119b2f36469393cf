mod location_field;
mod navbar;

pub use self::{location_field::*, navbar::*};
