use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Selectable cities for a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Location {
    #[default]
    Pune,
    Mumbai,
    Nashik,
    Nagpur,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Service {
    /// Preselected on a fresh booking form.
    #[default]
    Cleaning,
    Sweeping,
    Cooking,
    Gardening,
    Babysitting,
    #[serde(rename = "Patient Care")]
    PatientCare,
    #[serde(rename = "Pet Care")]
    PetCare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Worker {
    #[default]
    #[serde(rename = "Helper 1")]
    Helper1,
    #[serde(rename = "Helper 2")]
    Helper2,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Pune,
        Location::Mumbai,
        Location::Nashik,
        Location::Nagpur,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Location::Pune => "Pune",
            Location::Mumbai => "Mumbai",
            Location::Nashik => "Nashik",
            Location::Nagpur => "Nagpur",
        }
    }
}

impl Service {
    pub const ALL: [Service; 7] = [
        Service::Cleaning,
        Service::Sweeping,
        Service::Cooking,
        Service::Gardening,
        Service::Babysitting,
        Service::PatientCare,
        Service::PetCare,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Service::Cleaning => "Cleaning",
            Service::Sweeping => "Sweeping",
            Service::Cooking => "Cooking",
            Service::Gardening => "Gardening",
            Service::Babysitting => "Babysitting",
            Service::PatientCare => "Patient Care",
            Service::PetCare => "Pet Care",
        }
    }
}

impl Worker {
    pub const ALL: [Worker; 2] = [Worker::Helper1, Worker::Helper2];

    pub fn label(&self) -> &'static str {
        match self {
            Worker::Helper1 => "Helper 1",
            Worker::Helper2 => "Helper 2",
        }
    }
}

macro_rules! label_conversions {
    ($($ty:ident),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $ty::ALL
                        .iter()
                        .copied()
                        .find(|v| v.label() == s)
                        .ok_or_else(|| s.to_string())
                }
            }
        )+
    };
}

label_conversions!(Location, Service, Worker);

/// A listed professional on a service page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpertProfile {
    pub name: &'static str,
    pub gender: &'static str,
    pub experience_years: u8,
    pub location: &'static str,
    pub hourly_rate_inr: u32,
}

const SWEEPING_EXPERTS: &[ExpertProfile] = &[
    ExpertProfile {
        name: "John Doe",
        gender: "Male",
        experience_years: 5,
        location: "Delhi",
        hourly_rate_inr: 450,
    },
    ExpertProfile {
        name: "Jane Smith",
        gender: "Female",
        experience_years: 3,
        location: "Mumbai",
        hourly_rate_inr: 460,
    },
    ExpertProfile {
        name: "Mike Johnson",
        gender: "Male",
        experience_years: 4,
        location: "Bangalore",
        hourly_rate_inr: 470,
    },
    ExpertProfile {
        name: "Emily Davis",
        gender: "Female",
        experience_years: 2,
        location: "Chennai",
        hourly_rate_inr: 440,
    },
    ExpertProfile {
        name: "Robert Wilson",
        gender: "Male",
        experience_years: 6,
        location: "Kolkata",
        hourly_rate_inr: 500,
    },
];

/// Experts currently listed for a service. Only sweeping has a roster so far.
pub fn available_experts(service: Service) -> &'static [ExpertProfile] {
    match service {
        Service::Sweeping => SWEEPING_EXPERTS,
        _ => &[],
    }
}
