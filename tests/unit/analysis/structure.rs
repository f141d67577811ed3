//! Tests for distance fields, perfect-maze checks and solving routes

#[cfg(test)]
mod tests {
    use arrowmaze::algorithm::generator::{Maze, generate};
    use arrowmaze::algorithm::tracer::trace;
    use arrowmaze::analysis::structure::{
        MazeReport, dead_ends, distances, is_perfect, reachable_count, solution,
    };
    use arrowmaze::spatial::grid::{Direction, Position, WallId};
    use arrowmaze::Configuration;
    use rand::{SeedableRng, rngs::StdRng};

    fn corridor() -> Maze {
        let config = Configuration::new(3, 1).unwrap();
        Maze::with_passages(config, [WallId::right_of(0), WallId::right_of(1)]).unwrap()
    }

    fn seeded_maze(width: usize, height: usize, seed: u64) -> Maze {
        let config = Configuration::new(width, height).unwrap();
        generate(config, &mut StdRng::seed_from_u64(seed))
    }

    // Tests BFS distances along a corridor
    // Verified by incrementing distance twice per step
    #[test]
    fn test_corridor_distances() {
        let field = distances(&corridor(), Position::new(0, 0));
        assert_eq!(field.dim(), (1, 3));
        assert_eq!(field.iter().copied().collect::<Vec<_>>(), vec![Some(0), Some(1), Some(2)]);
    }

    // Tests cells behind closed walls stay unreachable
    // Verified by filling unreachable cells with zero
    #[test]
    fn test_unreachable_cells() {
        let config = Configuration::new(3, 1).unwrap();
        let maze = Maze::with_passages(config, [WallId::right_of(0)]).unwrap();
        let field = distances(&maze, Position::new(0, 0));
        assert_eq!(field.get([0, 2]), Some(&None));
        assert_eq!(reachable_count(&maze), 2);
        assert!(!is_perfect(&maze));
        assert_eq!(solution(&maze), None);
    }

    // Tests generated mazes pass the perfect check
    // Verified by dropping the passage count condition
    #[test]
    fn test_generated_mazes_are_perfect() {
        for seed in 0..10 {
            assert!(is_perfect(&seeded_maze(7, 5, seed)));
        }
    }

    // Tests a cycle fails the perfect check even when everything is reachable
    // Verified by checking reachability only
    #[test]
    fn test_cycle_is_not_perfect() {
        let config = Configuration::new(2, 2).unwrap();
        let maze = Maze::with_passages(
            config,
            [
                WallId::right_of(0),
                WallId::bottom_of(0),
                WallId::bottom_of(1),
                WallId::right_of(2),
            ],
        )
        .unwrap();
        assert_eq!(reachable_count(&maze), 4);
        assert!(!is_perfect(&maze));
    }

    // Tests corridor ends are dead ends
    // Verified by counting cells with no open neighbour
    #[test]
    fn test_dead_ends() {
        assert_eq!(dead_ends(&corridor()), 2);
    }

    // Tests the solving route replays to the exit
    // Verified by walking up the distance field instead of down
    #[test]
    fn test_solution_solves_maze() {
        for seed in 0..10 {
            let maze = seeded_maze(8, 8, seed);
            let route = solution(&maze).unwrap();
            let traced = trace(&maze, &route);
            assert!(traced.is_solved());
            assert_eq!(traced.dropped(), 0);
        }
    }

    // Tests the corridor route is two moves right
    // Verified by returning directions reversed
    #[test]
    fn test_corridor_solution() {
        assert_eq!(
            solution(&corridor()),
            Some(vec![Direction::Right, Direction::Right])
        );
    }

    // Tests report fields agree with the individual analyses
    // Verified by reporting the furthest distance from the exit
    #[test]
    fn test_report() {
        let maze = seeded_maze(6, 4, 13);
        let report = MazeReport::from_maze(&maze);
        assert!(report.perfect);
        assert_eq!(report.cells, 24);
        assert_eq!(report.passages, 23);
        assert_eq!(report.dead_ends, dead_ends(&maze));
        assert_eq!(
            report.solution_length,
            solution(&maze).map(|route| route.len())
        );
        assert!(report.furthest_distance as usize >= report.solution_length.unwrap_or(0));
    }
}
