use std::cmp::Ordering;

use super::distance::{haversine_km, Coord};

/// Anything with a fixed position that can be ranked by proximity.
pub trait Located {
    fn coord(&self) -> Coord;
}

/// A candidate annotated with its distance from the reference point.
#[derive(Debug, Clone)]
pub struct Ranked<T> {
    pub item: T,
    pub distance_km: f64,
}

/// Ranks `candidates` by great-circle distance from `reference` and returns
/// the nearest `k`, closest first. Ties keep their input order. The input
/// slice is left untouched; distances are computed fresh on every call.
pub fn nearest<T>(reference: Coord, candidates: &[T], k: usize) -> Vec<Ranked<T>>
where
    T: Located + Clone,
{
    let mut ranked: Vec<Ranked<T>> = candidates
        .iter()
        .map(|candidate| Ranked {
            distance_km: haversine_km(reference, candidate.coord()),
            item: candidate.clone(),
        })
        .collect();

    // sort_by is stable; NaN distances compare as equal and stay put.
    ranked.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Pin {
        label: &'static str,
        lat: f64,
        lon: f64,
    }

    impl Located for Pin {
        fn coord(&self) -> Coord {
            (self.lat, self.lon)
        }
    }

    fn pin(label: &'static str, lat: f64, lon: f64) -> Pin {
        Pin { label, lat, lon }
    }

    const CHENNAI: Coord = (13.0827, 80.2707);

    #[test]
    fn sorted_non_decreasing() {
        let pins = vec![
            pin("nellore", 14.4412, 79.9743),
            pin("adyar", 13.0569, 80.2425),
            pin("madurai", 9.9252, 78.1198),
            pin("vellore", 12.9200, 78.1475),
        ];
        let ranked = nearest(CHENNAI, &pins, pins.len());
        assert_eq!(ranked.len(), 4);
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
        assert_eq!(ranked[0].item.label, "adyar");
    }

    #[test]
    fn truncates_to_k() {
        let pins = vec![
            pin("a", 13.0878, 80.2785),
            pin("b", 14.4412, 79.9743),
            pin("c", 12.9360, 78.7093),
        ];
        assert_eq!(nearest(CHENNAI, &pins, 2).len(), 2);
        assert_eq!(nearest(CHENNAI, &pins, 10).len(), 3);
    }

    #[test]
    fn zero_k_and_empty_input_give_empty_output() {
        let pins = vec![pin("a", 13.0878, 80.2785)];
        assert!(nearest(CHENNAI, &pins, 0).is_empty());
        assert!(nearest(CHENNAI, &Vec::<Pin>::new(), 5).is_empty());
        assert!(nearest(CHENNAI, &Vec::<Pin>::new(), 0).is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        let pins = vec![
            pin("far", 14.4412, 79.9743),
            pin("first", 12.9294, 79.1325),
            pin("second", 12.9294, 79.1325),
        ];
        let ranked = nearest(CHENNAI, &pins, 3);
        assert_eq!(ranked[0].item.label, "first");
        assert_eq!(ranked[1].item.label, "second");
        assert_eq!(ranked[0].distance_km, ranked[1].distance_km);
        assert_eq!(ranked[2].item.label, "far");
    }

    #[test]
    fn input_slice_is_untouched() {
        let pins = vec![
            pin("far", 11.6733, 77.7138),
            pin("near", 13.0878, 80.2785),
        ];
        let before = pins.clone();
        let _ = nearest(CHENNAI, &pins, 1);
        assert_eq!(pins, before);
    }

    #[test]
    fn picks_the_numerically_nearer_vellore_point() {
        // Both candidates share a longitude, so the smaller latitude gap to
        // Chennai decides: 12.9294 wins over 12.9165.
        let pins = vec![
            pin("cmc", 12.9294, 79.1325),
            pin("south_gate", 12.9165, 79.1325),
        ];
        let ranked = nearest(CHENNAI, &pins, 1);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item.label, "cmc");
        assert!((ranked[0].distance_km - 124.49).abs() < 1.0);
    }
}
