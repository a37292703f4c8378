use colorevo::{
    error::GeneticError,
    evolution::{fitness, EvolutionLauncher, EvolutionOptions, LogLevel},
    graph::Graph,
    rng::RandomNumberGenerator,
    selection::ElitistSelection,
};

fn launcher() -> EvolutionLauncher {
    EvolutionLauncher::default()
}

#[test]
fn test_triangle_converges() {
    let graph = Graph::triangle();
    let options = EvolutionOptions::new(3, 30, 50, 0.1);

    for seed in 0..10 {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let result = launcher().evolve(&graph, &options, &mut rng).unwrap();

        assert_eq!(result.fitness, Some(0), "seed {} did not converge", seed);
        assert!(result.best_individual.unwrap().is_proper(&graph));
    }
}

#[test]
fn test_k4_with_three_colors_keeps_one_conflict() {
    let graph = Graph::complete(4);
    let options = EvolutionOptions::new(3, 30, 50, 0.1);

    for seed in 0..5 {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let result = launcher().evolve(&graph, &options, &mut rng).unwrap();

        assert_eq!(result.fitness, Some(-1));
        assert!(result.fitness_history.iter().all(|&f| f <= -1));
        assert_eq!(result.fitness_history.last(), Some(&-1));
    }
}

#[test]
fn test_zero_generations() {
    let graph = Graph::complete(5);
    let options = EvolutionOptions::new(3, 10, 0, 0.1);
    let mut rng = RandomNumberGenerator::from_seed(1);

    let result = launcher().evolve(&graph, &options, &mut rng).unwrap();

    assert_eq!(result.population_history.len(), 1);
    assert!(result.fitness_history.is_empty());
    assert!(result.avg_fitness_history.is_empty());
    assert!(result.best_individual.is_none());
    assert!(result.fitness.is_none());
}

#[test]
fn test_best_fitness_never_decreases() {
    let graph = Graph::from_edges(
        8,
        &[
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 0),
            (1, 5),
            (2, 6),
        ],
    )
    .unwrap();
    let options = EvolutionOptions::new(3, 20, 40, 0.3);
    let mut rng = RandomNumberGenerator::from_seed(99);

    let result = launcher().evolve(&graph, &options, &mut rng).unwrap();

    assert_eq!(result.population_history.len(), 41);
    for window in result.fitness_history.windows(2) {
        assert!(window[0] <= window[1]);
    }
    for (best, avg) in result.fitness_history.iter().zip(&result.avg_fitness_history) {
        assert!(*avg <= *best as f64);
    }
}

#[test]
fn test_elites_survive_unchanged() {
    let graph = Graph::complete(6);
    let options = EvolutionOptions::new(4, 25, 10, 0.5);
    let num_elites = options.get_num_elites();
    assert_eq!(num_elites, 2);

    let launcher = launcher();
    let mut rng = RandomNumberGenerator::from_seed(17);
    let mut evolution = launcher.start(&graph, &options, &mut rng).unwrap();

    while !evolution.is_done() {
        let before = evolution.population().to_vec();
        let scores: Vec<_> = before.iter().map(|c| fitness(c, &graph)).collect();
        let ranking = ElitistSelection::rank(&scores);

        evolution.step(&mut rng).unwrap();

        let after = evolution.population();
        for (slot, &idx) in ranking.iter().take(num_elites).enumerate() {
            assert_eq!(after[slot], before[idx]);
        }
    }
}

#[test]
fn test_history_records_index_zero() {
    let graph = Graph::complete(5);
    let options = EvolutionOptions::new(3, 12, 8, 0.2);
    let launcher = launcher();
    let mut rng = RandomNumberGenerator::from_seed(4);
    let mut evolution = launcher.start(&graph, &options, &mut rng).unwrap();

    let mut snapshots = vec![evolution.population()[0].clone()];
    let mut reports = Vec::new();
    while let Some(report) = evolution.step(&mut rng).unwrap() {
        snapshots.push(evolution.population()[0].clone());
        reports.push(report);
    }

    let result = evolution.finish();
    assert_eq!(result.population_history, snapshots);

    // After a generation, index 0 holds that generation's top-ranked elite.
    for (generation, report) in reports.iter().enumerate() {
        let snapshot = &result.population_history[generation + 1];
        assert_eq!(fitness(snapshot, &graph), report.generation_best);
    }
}

#[test]
fn test_runs_are_reproducible() {
    let graph = Graph::complete(7);
    let options = EvolutionOptions::new(5, 20, 30, 0.1);

    let a = launcher()
        .evolve(&graph, &options, &mut RandomNumberGenerator::from_seed(123))
        .unwrap();
    let b = launcher()
        .evolve(&graph, &options, &mut RandomNumberGenerator::from_seed(123))
        .unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_edited_graph() {
    let mut graph = Graph::triangle();
    let d = graph.add_node();
    graph.add_edge(d, 0).unwrap();
    graph.add_edge(d, 1).unwrap();

    // Nodes 2 and 3 may share a color, so three colors suffice.
    let options = EvolutionOptions::new(3, 40, 60, 0.1);
    let mut rng = RandomNumberGenerator::from_seed(2);

    let result = launcher().evolve(&graph, &options, &mut rng).unwrap();

    assert!(result.is_proper());
    let best = result.best_individual.unwrap();
    assert_eq!(best.len(), 4);
    assert_eq!(best[2], best[3]);
}

#[test]
fn test_single_individual_population() {
    let graph = Graph::triangle();
    let options = EvolutionOptions::new(3, 1, 20, 0.5);
    let mut rng = RandomNumberGenerator::from_seed(8);

    let result = launcher().evolve(&graph, &options, &mut rng).unwrap();

    // The lone individual is always the elite and never changes.
    assert!(result
        .population_history
        .windows(2)
        .all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_invalid_parameters() {
    let graph = Graph::triangle();
    let mut rng = RandomNumberGenerator::from_seed(0);

    for options in [
        EvolutionOptions::new(0, 10, 10, 0.1),
        EvolutionOptions::new(3, 0, 10, 0.1),
        EvolutionOptions::new(3, 10, 10, -0.5),
        EvolutionOptions::new(3, 10, 10, 2.0),
    ] {
        let result = launcher().evolve(&graph, &options, &mut rng);
        match result {
            Err(GeneticError::InvalidParameter(_)) => (),
            other => panic!("Expected InvalidParameter error, got {:?}", other),
        }
    }
}

#[test]
fn test_verbose_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let graph = Graph::triangle();
    let options = EvolutionOptions::builder()
        .num_colors(3)
        .population_size(5)
        .num_generations(3)
        .log_level(LogLevel::Verbose)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(6);

    let result = launcher().evolve(&graph, &options, &mut rng).unwrap();
    assert_eq!(result.fitness_history.len(), 3);
}
