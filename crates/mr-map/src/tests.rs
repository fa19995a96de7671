//! Unit tests for the LocalMap contract.

#[cfg(test)]
mod classification {
    use mr_core::{Direction, GridPos};

    use crate::{Cell, LocalMap};

    #[test]
    fn origin_starts_visited() {
        let map = LocalMap::new(5);
        assert_eq!(map.cell(GridPos::ORIGIN), Cell::Visited);
        assert_eq!(map.frontier(), 0);
        assert_eq!(map.explored(), 0);
    }

    #[test]
    fn classify_sets_open_and_wall() {
        let mut map = LocalMap::new(5);
        map.classify(GridPos::ORIGIN, Direction::Down, true);
        map.classify(GridPos::ORIGIN, Direction::Right, false);
        assert_eq!(map.cell(GridPos::new(0, 1)), Cell::Open);
        assert_eq!(map.cell(GridPos::new(1, 0)), Cell::Wall);
        assert_eq!(map.frontier(), 1);
    }

    #[test]
    fn classify_is_idempotent() {
        let mut map = LocalMap::new(5);
        map.classify(GridPos::ORIGIN, Direction::Down, true);
        // A contradictory second answer must not change anything.
        map.classify(GridPos::ORIGIN, Direction::Down, false);
        assert_eq!(map.cell(GridPos::new(0, 1)), Cell::Open);
        assert_eq!(map.frontier(), 1);
    }

    #[test]
    fn wall_classification_never_flips() {
        let mut map = LocalMap::new(5);
        map.classify(GridPos::ORIGIN, Direction::Up, false);
        map.classify(GridPos::ORIGIN, Direction::Up, true);
        assert_eq!(map.cell(GridPos::new(0, -1)), Cell::Wall);
        assert_eq!(map.frontier(), 0);
    }

    #[test]
    fn forward_move_updates_counters_by_one() {
        let mut map = LocalMap::new(5);
        map.classify(GridPos::ORIGIN, Direction::Down, true);
        map.classify(GridPos::ORIGIN, Direction::Right, true);
        assert_eq!((map.frontier(), map.explored()), (2, 0));

        map.record_forward(GridPos::new(0, 1));
        assert_eq!((map.frontier(), map.explored()), (1, 1));
        assert_eq!(map.cell(GridPos::new(0, 1)), Cell::Visited);

        map.record_forward(GridPos::new(1, 0));
        assert_eq!((map.frontier(), map.explored()), (0, 2));
    }
}

#[cfg(test)]
mod window {
    use mr_core::{Direction, GridPos};

    use crate::{Cell, LocalMap};

    #[test]
    fn outside_reads_return_sentinel() {
        let map = LocalMap::new(3);
        assert_eq!(map.cell(GridPos::new(4, 0)), Cell::Outside);
        assert_eq!(map.cell(GridPos::new(0, -4)), Cell::Outside);
        // The window corner itself is still inside.
        assert_eq!(map.cell(GridPos::new(3, 3)), Cell::Unknown);
    }

    #[test]
    fn outside_neighbours_are_never_classified() {
        let mut map = LocalMap::new(1);
        // Walk the agent's knowledge to the window edge, then classify past it.
        map.classify(GridPos::ORIGIN, Direction::Right, true);
        map.record_forward(GridPos::new(1, 0));
        map.classify(GridPos::new(1, 0), Direction::Right, true);
        // The (2, 0) address is outside a half-extent-1 window: the read
        // sentinel is unchanged and no frontier was invented.
        assert_eq!(map.cell(GridPos::new(2, 0)), Cell::Outside);
        assert_eq!(map.frontier(), 0);
    }

    #[test]
    fn known_bounds_cover_walls_and_open_cells() {
        let mut map = LocalMap::new(5);
        map.classify(GridPos::ORIGIN, Direction::Down, true);
        map.classify(GridPos::ORIGIN, Direction::Up, false);
        map.classify(GridPos::ORIGIN, Direction::Left, false);
        let bounds = map.known_bounds();
        assert_eq!(bounds.min, GridPos::new(-1, -1));
        assert_eq!(bounds.max, GridPos::new(0, 1));
        assert_eq!((bounds.width(), bounds.height()), (2, 3));
    }
}

#[cfg(test)]
mod bounds {
    use mr_core::GridPos;

    use crate::Bounds;

    #[test]
    fn extend_and_union() {
        let mut a = Bounds::at(GridPos::new(1, 1));
        a.extend(GridPos::new(-2, 3));
        assert_eq!((a.width(), a.height()), (4, 3));

        let b = Bounds::at(GridPos::new(5, 0));
        let u = a.union(b);
        assert!(u.contains(GridPos::new(5, 0)));
        assert!(u.contains(GridPos::new(-2, 3)));
        assert_eq!(u.width(), 8);
    }

    #[test]
    fn translate_shifts_both_corners() {
        let b = Bounds::at(GridPos::new(0, 0)).union(Bounds::at(GridPos::new(2, 2)));
        let t = b.translate(GridPos::new(-1, 4));
        assert_eq!(t.min, GridPos::new(-1, 4));
        assert_eq!(t.max, GridPos::new(1, 6));
    }
}
