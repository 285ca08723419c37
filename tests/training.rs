use rand::{SeedableRng, rngs::StdRng};
use sgd_net::{Example, Network, TrainConfig, Trainer};

fn example(values: Vec<f32>, label: usize, classes: usize) -> Example {
    Example::new(values, label, classes).unwrap()
}

#[test]
fn single_example_step_raises_the_correct_class_output() {
    let mut net = Network::with_rng(&[2, 3, 2], &mut StdRng::seed_from_u64(42)).unwrap();
    let data = [example(vec![1., 0.], 0, 2)];
    let input = data[0].values().view();

    let before = net.forward(input).unwrap();
    net.train(&data, &TrainConfig::new(1, 1, 1.).unwrap(), StdRng::seed_from_u64(1))
        .unwrap();
    let after = net.forward(input).unwrap();

    assert!(
        after[0] > before[0],
        "class 0 output went from {} to {}",
        before[0],
        after[0]
    );
}

#[test]
fn same_seeds_train_identical_networks() {
    let data: Vec<Example> = (0..12)
        .map(|i| {
            let x = i as f32 / 12.;
            example(vec![x, x * x, 1. - x], i % 3, 3)
        })
        .collect();
    let config = TrainConfig::new(5, 4, 0.8).unwrap();

    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut net = Network::with_rng(&[3, 4, 3], &mut rng).unwrap();
        net.train(&data, &config, rng).unwrap();
        net
    };

    assert_eq!(run(3), run(3));
    assert_ne!(run(3), run(4));
}

#[test]
fn learns_a_linearly_separable_set() {
    let data = [
        example(vec![1., 0.], 0, 2),
        example(vec![0.9, 0.1], 0, 2),
        example(vec![0.8, 0.], 0, 2),
        example(vec![0., 1.], 1, 2),
        example(vec![0.1, 0.9], 1, 2),
        example(vec![0., 0.8], 1, 2),
    ];

    let mut rng = StdRng::seed_from_u64(42);
    let mut net = Network::with_rng(&[2, 4, 2], &mut rng).unwrap();
    let mut trainer = Trainer::new(TrainConfig::new(300, 2, 3.).unwrap(), rng).unwrap();

    let stats = trainer.train(&mut net, &data, Some(&data)).unwrap();

    assert_eq!(stats.last().and_then(|s| s.accuracy()), Some(1.));
    assert_eq!(net.evaluate(&data).unwrap(), 1.);
}
