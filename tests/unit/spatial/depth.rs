//! Tests for depth map storage and completion checks

#[cfg(test)]
mod tests {
    use skypattern::algorithm::grower::grow;
    use skypattern::spatial::depth::UNVISITED;
    use skypattern::spatial::{Cell, DepthMap, Torus};

    // Tests a fresh map is height × width and entirely unvisited
    #[test]
    fn test_unvisited_map() {
        let Ok(torus) = Torus::new(4, 3) else {
            unreachable!("valid dimensions")
        };
        let depths = DepthMap::unvisited(&torus);

        assert_eq!(depths.width(), 4);
        assert_eq!(depths.height(), 3);
        assert_eq!(depths.as_array().dim(), (3, 4));
        assert!(depths.as_array().iter().all(|&d| d == UNVISITED));
        assert!(!depths.is_complete());
        assert!(!depths.is_visited(Cell::new(0, 0)));
        assert_eq!(depths.max_depth(), None);
    }

    // Tests lookups outside the map return None instead of panicking
    #[test]
    fn test_get_out_of_bounds() {
        let Ok(torus) = Torus::new(2, 2) else {
            unreachable!("valid dimensions")
        };
        let depths = DepthMap::unvisited(&torus);

        assert_eq!(depths.get(Cell::new(1, 1)), Some(UNVISITED));
        assert_eq!(depths.get(Cell::new(2, 0)), None);
        assert_eq!(depths.get(Cell::new(0, 2)), None);
        assert!(!depths.is_visited(Cell::new(5, 5)));
    }

    // Tests a grown map reports completion and a positive maximum
    #[test]
    fn test_grown_map_is_complete() {
        let Ok(depths) = grow(3, 6, 5) else {
            unreachable!("valid dimensions")
        };

        assert!(depths.is_complete());
        assert!(depths.max_depth().is_some_and(|d| d > 0));
        assert_eq!(depths.get(Cell::new(0, 0)), Some(0));
    }

    // Tests the root reads as unvisited before growth and as depth zero after it
    #[test]
    fn test_root_depth() {
        let Ok(torus) = Torus::new(5, 4) else {
            unreachable!("valid dimensions")
        };
        assert_eq!(DepthMap::unvisited(&torus).root_depth(), Some(UNVISITED));

        let Ok(depths) = grow(21, 5, 4) else {
            unreachable!("valid dimensions")
        };
        assert_eq!(depths.root_depth(), Some(0));
        assert_eq!(depths.root_depth(), depths.get(Torus::root()));
    }
}
