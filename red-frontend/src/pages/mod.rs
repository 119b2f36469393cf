mod blood_request;
mod donor_profile;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    BloodRequest,
    DonorProfile,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::BloodRequest => "/",
            Self::DonorProfile => "/donor-profile",
        }
    }
}

pub use self::{blood_request::*, donor_profile::*};

const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
