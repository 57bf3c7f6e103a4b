use serde::{Deserialize, Serialize};

use crate::region::Region;

/// One row of a case's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub completion_day: u32,
}

/// Order completed regions by completion day.
///
/// The sort is stable, so regions finishing on the same day keep their input
/// order. Regions that have not completed are left out.
pub fn rank(regions: &[Region]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = regions
        .iter()
        .filter_map(|region| {
            region.completion_day().map(|day| Standing {
                name: region.name().to_string(),
                completion_day: day,
            })
        })
        .collect();
    standings.sort_by_key(|s| s.completion_day);
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::RegionId;
    use crate::test_utils::territory;

    fn completed(id: u32, name: &str, day: Option<u32>) -> Region {
        let mut region = Region::new(RegionId(id), territory(name, (1, 1), (1, 1)));
        if let Some(day) = day {
            region.mark_complete(day);
        }
        region
    }

    fn names(standings: &[Standing]) -> Vec<&str> {
        standings.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn ties_keep_input_order() {
        let regions = vec![
            completed(0, "Aa", Some(3)),
            completed(1, "Bb", Some(3)),
            completed(2, "Cc", Some(2)),
        ];
        let standings = rank(&regions);
        assert_eq!(names(&standings), vec!["Cc", "Aa", "Bb"]);
        assert_eq!(
            standings.iter().map(|s| s.completion_day).collect::<Vec<_>>(),
            vec![2, 3, 3]
        );
    }

    #[test]
    fn ties_are_not_alphabetical() {
        let regions = vec![
            completed(0, "Netherlands", Some(2)),
            completed(1, "Belgium", Some(2)),
        ];
        assert_eq!(names(&rank(&regions)), vec!["Netherlands", "Belgium"]);
    }

    #[test]
    fn incomplete_regions_left_out() {
        let regions = vec![completed(0, "Aa", None), completed(1, "Bb", Some(4))];
        assert_eq!(names(&rank(&regions)), vec!["Bb"]);
    }

    #[test]
    fn empty_input() {
        assert!(rank(&[]).is_empty());
    }
}
