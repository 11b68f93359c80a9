use walkclass::config::{DiscreteSpec, HUMAN_MEAN};
use walkclass::{Class, ConfigError, Error, ModelConfig};

#[test]
fn test_default_round_trip() {
    let config = ModelConfig::default();
    let text = config.to_json().unwrap();
    assert_eq!(ModelConfig::from_json(&text).unwrap(), config);
    assert_eq!(config.continuous.human.mean, HUMAN_MEAN);
    assert!(matches!(
        config.discrete.computer,
        DiscreteSpec::Geometric { p } if p == 0.5
    ));
}

#[test]
fn test_load_alternative_fit() {
    // The computer is fitted with buckets and the human with a geometric.
    let text = r#"{
        "continuous": {
            "human": { "mean": 2.0, "stddev": 0.57 },
            "computer": { "mean": 16.05, "stddev": 5.55 }
        },
        "discrete": {
            "human": { "geometric": { "p": 0.5 } },
            "computer": { "buckets": { "1": 0.2, "2-10": 0.5, "11-100": 0.3 } }
        }
    }"#;
    let config = ModelConfig::from_json(text).unwrap();
    assert_eq!(config.epsilon, walkclass::EPSILON);

    let result = config.build().unwrap().classify(&[1; 20]).unwrap();
    assert_eq!(result.continuous.decision, Class::Human);
    assert_eq!(result.discrete.decision, Class::Human);
}

#[test]
fn test_invalid_configs() {
    let mut config = ModelConfig::default();
    config.continuous.computer.stddev = 0.0;
    assert!(matches!(
        config.build(),
        Err(ConfigError::Model(Error::InvalidInput(_)))
    ));

    let mut config = ModelConfig::default();
    config.epsilon = f64::NAN;
    assert!(config.build().is_err());

    let mut config = ModelConfig::default();
    config.discrete.computer = DiscreteSpec::Geometric { p: 2.0 };
    assert!(config.build().is_err());

    let mut config = ModelConfig::default();
    if let DiscreteSpec::Buckets(buckets) = &mut config.discrete.human {
        buckets.insert("5-6".to_string(), 0.1);
    }
    assert!(matches!(config.build(), Err(ConfigError::Bucket(_))));

    assert!(matches!(
        ModelConfig::from_json("{ \"continuous\": 3 }"),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        ModelConfig::load("/nonexistent/model.json"),
        Err(ConfigError::Io(_))
    ));
}
