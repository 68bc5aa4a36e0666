use crate::airport::tests::utils::{StubPlane, airport, arb_weather, full_airport, id, set_weather};
use crate::error::AirportError;
use crate::weather::Weather;
use proptest::prelude::*;
use proptest::proptest;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Movement {
    Land(usize),
    Takeoff(usize),
    Weather(Weather),
}

fn arb_movement() -> impl Strategy<Value = Movement> {
    prop_oneof![
        (0..8usize).prop_map(Movement::Land),
        (0..8usize).prop_map(Movement::Takeoff),
        arb_weather().prop_map(Movement::Weather),
    ]
}

proptest! {
    #[test]
    fn test_capacity_is_a_hard_limit(capacity in 0..50usize) {
        let mut airport = full_airport(capacity);
        let latecomer = StubPlane::ok("LATECOMER");

        prop_assert_eq!(capacity, airport.len());
        prop_assert_eq!(
            Err(AirportError::AtCapacity),
            airport.clear_landing(latecomer.clone()).map(|_| ())
        );
        prop_assert!(!airport.has_plane(&*latecomer));
        prop_assert_eq!(capacity, airport.len());
    }

    #[test]
    fn test_takeoff_of_absent_plane_ignores_weather(weather in arb_weather()) {
        let mut airport = airport(4, weather);
        let plane = StubPlane::ok("PLANE_1");

        prop_assert_eq!(Err(AirportError::PlaneNotFound), airport.clear_takeoff(&*plane));
    }

    #[test]
    fn test_matches_reference_model(
        capacity in 0..6usize,
        movements in prop::collection::vec(arb_movement(), 0..60)
    ) {
        // planes 6 and 7 share callsigns with planes 0 and 1
        let callsign = |i: usize| i % 6;
        let planes: Vec<_> = (0..8).map(|i| StubPlane::ok(&format!("PLANE_{}", callsign(i)))).collect();
        let mut airport = airport(capacity, Weather::Sunny);
        let mut weather = Weather::Sunny;
        let mut grounded: HashSet<usize> = HashSet::new();

        for movement in movements {
            match movement {
                Movement::Land(i) => {
                    let expected = if weather.is_stormy() {
                        Err(AirportError::StormyWeather)
                    } else if grounded.len() >= capacity {
                        Err(AirportError::AtCapacity)
                    } else if grounded.iter().any(|&j| j != i && callsign(j) == callsign(i)) {
                        Err(AirportError::CallsignInUse(id(&format!("PLANE_{}", callsign(i)))))
                    } else {
                        grounded.insert(i);
                        Ok(())
                    };
                    prop_assert_eq!(expected, airport.clear_landing(planes[i].clone()).map(|_| ()));
                }
                Movement::Takeoff(i) => {
                    let expected = if !grounded.contains(&i) {
                        Err(AirportError::PlaneNotFound)
                    } else if weather.is_stormy() {
                        Err(AirportError::StormyWeather)
                    } else {
                        grounded.remove(&i);
                        Ok(())
                    };
                    prop_assert_eq!(expected, airport.clear_takeoff(&*planes[i]));
                }
                Movement::Weather(w) => {
                    weather = w;
                    set_weather(&mut airport, w);
                }
            }

            prop_assert!(airport.len() <= capacity);
            prop_assert_eq!(grounded.len(), airport.len());
            for (i, plane) in planes.iter().enumerate() {
                prop_assert_eq!(grounded.contains(&i), airport.has_plane(&**plane));
            }
        }
    }
}
