use walkclass::{parse_steps, Analysis, Class, Classifier, Error, Step, Walk, MAX_STEPS};

fn alternating(len: usize) -> Vec<Step> {
    (0..len)
        .map(|i| if i % 2 == 0 { Step::Right } else { Step::Left })
        .collect()
}

#[test]
fn test_record_walk() {
    let mut walk = Walk::new();
    assert!(walk.is_empty());
    assert_eq!(walk.max_steps(), MAX_STEPS);

    for step in parse_steps("RRRL LL").unwrap() {
        assert!(!walk.push(step).unwrap());
    }
    assert_eq!(walk.len(), 6);
    assert_eq!(walk.position(), 0);
    assert_eq!(walk.runs().len(), 2);
    assert_eq!(walk.frequencies().get(&3), Some(&2));
}

#[test]
fn test_walk_is_bounded() {
    let mut walk = Walk::with_capacity(3);
    assert_eq!(walk.push(Step::Right), Ok(false));
    assert_eq!(walk.push(Step::Right), Ok(false));
    assert_eq!(walk.push(Step::Left), Ok(true));
    assert!(walk.is_complete());
    assert_eq!(walk.push(Step::Left), Err(Error::WalkFull(3)));
    assert_eq!(walk.len(), 3);
    assert_eq!(walk.position(), 1);

    assert!(Walk::from_steps(&alternating(MAX_STEPS)).is_ok());
    assert_eq!(
        Walk::from_steps(&alternating(MAX_STEPS + 1)).unwrap_err(),
        Error::WalkFull(MAX_STEPS)
    );
}

#[test]
fn test_huge_capacity() {
    // The bound does not reserve memory up front.
    let mut walk = Walk::with_capacity(usize::MAX);
    assert_eq!(walk.max_steps(), usize::MAX);
    assert_eq!(walk.push(Step::Left), Ok(false));
    for _ in 0..MAX_STEPS {
        assert_eq!(walk.push(Step::Right), Ok(false));
    }
    assert_eq!(walk.len(), MAX_STEPS + 1);
    assert!(!walk.is_complete());
}

#[test]
fn test_analyze_once() {
    let classifier = Classifier::default();
    let walk = Walk::from_steps(&alternating(MAX_STEPS)).unwrap();
    assert!(walk.is_complete());
    assert!(walk.result().is_none());

    let first = walk.analyze(&classifier).unwrap();
    assert!(first.is_computed());
    assert_eq!(first.result().discrete.decision, Class::Computer);

    let second = walk.analyze(&classifier).unwrap();
    assert!(matches!(second, Analysis::Cached(_)));
    assert!(std::ptr::eq(first.result(), second.result()));
    assert!(walk.is_analyzed());
}

#[test]
fn test_analyzed_walk_is_frozen() {
    let classifier = Classifier::default();
    let mut walk = Walk::from_steps(&alternating(10)).unwrap();
    walk.analyze(&classifier).unwrap();
    assert_eq!(walk.push(Step::Right), Err(Error::WalkAnalyzed));
    assert_eq!(walk.len(), 10);
}

#[test]
fn test_concurrent_completion() {
    let classifier = Classifier::default();
    let walk = Walk::from_steps(&alternating(MAX_STEPS)).unwrap();

    let computed: usize = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| walk.analyze(&classifier).unwrap().is_computed()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap() as usize)
            .sum()
    });
    assert_eq!(computed, 1);
    assert!(walk.result().is_some());
}

#[test]
fn test_long_runs_walk() {
    let classifier = Classifier::default();
    let mut steps = Vec::new();
    for (i, len) in [15, 20, 25, 18, 22].iter().enumerate() {
        let step = if i % 2 == 0 { Step::Right } else { Step::Left };
        steps.extend(std::iter::repeat(step).take(*len));
    }
    let walk = Walk::from_steps(&steps).unwrap();
    assert!(walk.is_complete());
    let result = walk.analyze(&classifier).unwrap().result();
    assert_eq!(result.continuous.decision, Class::Human);
    assert_eq!(result.discrete.decision, Class::Human);
}
