use pitwall_types::{LapDelta, LapTable};
use std::collections::HashMap;

/// Per-lap time difference between two drivers, inner-joined on lap number.
///
/// Laps present in only one table are silently dropped, never interpolated.
/// Negative delta means driver A (first argument) was faster on that lap.
/// Empty if either table is empty or no lap numbers are shared.
pub fn build_delta(a: &LapTable, b: &LapTable) -> Vec<LapDelta> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let b_times: HashMap<u32, f64> = b
        .records
        .iter()
        .map(|r| (r.lap_number, r.lap_time))
        .collect();

    let mut rows: Vec<LapDelta> = a
        .records
        .iter()
        .filter_map(|r| {
            b_times.get(&r.lap_number).map(|b_time| LapDelta {
                lap_number: r.lap_number,
                delta: r.lap_time - b_time,
            })
        })
        .collect();

    rows.sort_by_key(|row| row.lap_number);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitwall_testing::lap_table;

    #[test]
    fn test_inner_join_drops_unshared_laps() {
        let ver = lap_table("VER", &[(1, 88.1), (2, 87.9), (3, 87.8)]);
        let lec = lap_table("LEC", &[(1, 88.3), (2, 88.0)]);

        let rows = build_delta(&ver, &lec);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].lap_number, 1);
        assert!((rows[0].delta - (-0.2)).abs() < 1e-9);
        assert_eq!(rows[1].lap_number, 2);
        assert!((rows[1].delta - (-0.1)).abs() < 1e-9);
    }

    #[test]
    fn test_anti_symmetry() {
        let a = lap_table("VER", &[(1, 90.0), (2, 91.2), (3, 89.7)]);
        let b = lap_table("LEC", &[(1, 90.4), (2, 90.8), (3, 90.1)]);

        let ab = build_delta(&a, &b);
        let ba = build_delta(&b, &a);
        assert_eq!(ab.len(), ba.len());
        for (x, y) in ab.iter().zip(ba.iter()) {
            assert_eq!(x.lap_number, y.lap_number);
            assert!((x.delta + y.delta).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_inputs_yield_empty() {
        let a = lap_table("VER", &[(1, 90.0)]);
        let empty = lap_table("LEC", &[]);
        assert!(build_delta(&a, &empty).is_empty());
        assert!(build_delta(&empty, &a).is_empty());
    }

    #[test]
    fn test_disjoint_lap_numbers_yield_empty() {
        let a = lap_table("VER", &[(1, 90.0), (2, 90.1)]);
        let b = lap_table("LEC", &[(3, 90.0), (4, 90.1)]);
        assert!(build_delta(&a, &b).is_empty());
    }

    #[test]
    fn test_row_count_equals_intersection_size() {
        let a = lap_table("VER", &[(1, 90.0), (2, 90.1), (5, 90.2)]);
        let b = lap_table("LEC", &[(2, 90.0), (5, 90.3), (9, 90.4)]);
        assert_eq!(build_delta(&a, &b).len(), 2);
    }
}
