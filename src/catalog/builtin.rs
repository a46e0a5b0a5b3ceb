//! Built-in fallback catalog: Indian states and territories.
//!
//! Used when no catalog file is found. Coordinates are rough centroids;
//! hints name the region or a well-known trait without giving the
//! answer away.

use super::types::PlaceRecord;

struct BuiltinPlace {
    name: &'static str,
    hint: &'static str,
    lat: f64,
    lon: f64,
}

const BUILTIN_PLACES: &[BuiltinPlace] = &[
    BuiltinPlace {
        name: "Kerala",
        hint: "Southern coastal state, backwaters",
        lat: 10.8505, lon: 76.2711,
    },
    BuiltinPlace {
        name: "Goa",
        hint: "Smallest state, western beaches",
        lat: 15.2993, lon: 74.1240,
    },
    BuiltinPlace {
        name: "Delhi",
        hint: "National capital territory",
        lat: 28.7041, lon: 77.1025,
    },
    BuiltinPlace {
        name: "Tamil Nadu",
        hint: "Southeastern tip, temple towns",
        lat: 11.1271, lon: 78.6569,
    },
    BuiltinPlace {
        name: "Karnataka",
        hint: "Southern plateau, tech hub capital",
        lat: 15.3173, lon: 75.7139,
    },
    BuiltinPlace {
        name: "Maharashtra",
        hint: "West, largest state economy",
        lat: 19.7515, lon: 75.7139,
    },
    BuiltinPlace {
        name: "Gujarat",
        hint: "Westernmost state, salt flats",
        lat: 22.2587, lon: 71.1924,
    },
    BuiltinPlace {
        name: "Rajasthan",
        hint: "Northwest, Thar desert",
        lat: 27.0238, lon: 74.2179,
    },
    BuiltinPlace {
        name: "Punjab",
        hint: "Northwest, land of five rivers",
        lat: 31.1471, lon: 75.3412,
    },
    BuiltinPlace {
        name: "Himachal Pradesh",
        hint: "Northern hill state",
        lat: 31.1048, lon: 77.1734,
    },
    BuiltinPlace {
        name: "Uttarakhand",
        hint: "North, Himalayan shrines",
        lat: 30.0668, lon: 79.0193,
    },
    BuiltinPlace {
        name: "Uttar Pradesh",
        hint: "North, most populous state",
        lat: 26.8467, lon: 80.9462,
    },
    BuiltinPlace {
        name: "Bihar",
        hint: "East, on the middle Ganges",
        lat: 25.0961, lon: 85.3131,
    },
    BuiltinPlace {
        name: "West Bengal",
        hint: "East, delta state",
        lat: 22.9868, lon: 87.8550,
    },
    BuiltinPlace {
        name: "Odisha",
        hint: "Eastern coast, Sun Temple",
        lat: 20.9517, lon: 85.0985,
    },
    BuiltinPlace {
        name: "Assam",
        hint: "Northeast, tea valleys",
        lat: 26.2006, lon: 92.9376,
    },
    BuiltinPlace {
        name: "Meghalaya",
        hint: "Northeast, wettest place on Earth",
        lat: 25.4670, lon: 91.3662,
    },
    BuiltinPlace {
        name: "Sikkim",
        hint: "Small Himalayan state, Kanchenjunga",
        lat: 27.5330, lon: 88.5122,
    },
    BuiltinPlace {
        name: "Andhra Pradesh",
        hint: "Southeastern coast",
        lat: 15.9129, lon: 79.7400,
    },
    BuiltinPlace {
        name: "Telangana",
        hint: "South-central plateau, newest state",
        lat: 18.1124, lon: 79.0193,
    },
    BuiltinPlace {
        name: "Madhya Pradesh",
        hint: "Central heartland",
        lat: 22.9734, lon: 78.6569,
    },
    BuiltinPlace {
        name: "Chhattisgarh",
        hint: "Central east, forests and waterfalls",
        lat: 21.2787, lon: 81.8661,
    },
    BuiltinPlace {
        name: "Jharkhand",
        hint: "East, mineral belt",
        lat: 23.6102, lon: 85.2799,
    },
    BuiltinPlace {
        name: "Ladakh",
        hint: "Far north, high-altitude desert",
        lat: 34.1526, lon: 77.5771,
    },
    BuiltinPlace {
        name: "Andaman and Nicobar Islands",
        hint: "Island chain in the Bay of Bengal",
        lat: 11.7401, lon: 92.6586,
    },
];

/// The embedded dataset as owned records, in table order.
pub fn builtin_places() -> Vec<PlaceRecord> {
    BUILTIN_PLACES
        .iter()
        .map(|p| PlaceRecord {
            name: p.name.to_string(),
            hint: p.hint.to_string(),
            coords: [p.lat, p.lon],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::loader::validate_entries;
    use super::super::types::MIN_PLACES;
    use super::*;

    #[test]
    fn test_builtin_is_playable() {
        let places = builtin_places();
        assert!(places.len() >= MIN_PLACES);
    }

    #[test]
    fn test_builtin_names_unique() {
        let places = builtin_places();
        for (i, a) in places.iter().enumerate() {
            for b in places.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_builtin_passes_validation() {
        // The built-in set must satisfy the same contract as a file catalog.
        let raw = serde_json::to_value(builtin_places()).unwrap();
        let entries = raw.as_array().unwrap();
        let (valid, problems) = validate_entries(entries);
        assert_eq!(valid.len(), builtin_places().len());
        assert!(problems.is_empty());
    }

    #[test]
    fn test_builtin_coords_in_range() {
        for p in builtin_places() {
            assert!((-90.0..=90.0).contains(&p.lat()));
            assert!((-180.0..=180.0).contains(&p.lon()));
        }
    }
}
