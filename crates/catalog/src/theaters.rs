//! Fixed theater directory.

use serde::Serialize;

/// Showtimes offered by every theater.
pub const SHOWTIMES: &[&str] = &["10:00 AM", "1:30 PM", "4:30 PM", "7:30 PM", "10:30 PM"];

/// A single theater and the showtimes it sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theater {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub showtimes: &'static [&'static str],
}

/// Theaters grouped by city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityTheaters {
    pub city: &'static str,
    pub theaters: &'static [Theater],
}

static DIRECTORY: &[CityTheaters] = &[
    CityTheaters {
        city: "Bengaluru",
        theaters: &[
            Theater {
                id: "blr-pvr-orion",
                name: "PVR Orion Mall",
                address: "Brigade Gateway, Dr Rajkumar Rd, Bengaluru",
                showtimes: SHOWTIMES,
            },
            Theater {
                id: "blr-inox-garuda",
                name: "INOX Garuda Mall",
                address: "Magrath Rd, Ashok Nagar, Bengaluru",
                showtimes: SHOWTIMES,
            },
        ],
    },
    CityTheaters {
        city: "Mumbai",
        theaters: &[
            Theater {
                id: "mum-pvr-icon",
                name: "PVR ICON, Phoenix Mall",
                address: "Lower Parel, Mumbai",
                showtimes: SHOWTIMES,
            },
            Theater {
                id: "mum-cinepolis-andheri",
                name: "Cinépolis Andheri",
                address: "Andheri West, Mumbai",
                showtimes: SHOWTIMES,
            },
        ],
    },
    CityTheaters {
        city: "Delhi",
        theaters: &[
            Theater {
                id: "del-pvr-pacific",
                name: "PVR Pacific Mall",
                address: "Tagore Garden, New Delhi",
                showtimes: SHOWTIMES,
            },
            Theater {
                id: "del-inox-nehrup",
                name: "INOX Nehru Place",
                address: "Nehru Place, New Delhi",
                showtimes: SHOWTIMES,
            },
        ],
    },
];

/// Returns every city with its theaters.
pub fn theaters() -> &'static [CityTheaters] {
    DIRECTORY
}

/// Looks up a theater by id together with its city.
pub fn find_theater(id: &str) -> Option<(&'static str, &'static Theater)> {
    DIRECTORY.iter().find_map(|city| {
        city.theaters
            .iter()
            .find(|theater| theater.id == id)
            .map(|theater| (city.city, theater))
    })
}
