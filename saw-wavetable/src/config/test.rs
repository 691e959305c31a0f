use pretty_assertions::assert_eq;

use crate::{GeneratorConfig, MAX_HARMONICS, TableError};

#[test]
fn default_config_is_valid() {
    assert_eq!(GeneratorConfig::default().validate(), Ok(()));
}

#[test]
fn default_config_uses_reference_constants() {
    let config = GeneratorConfig::default();

    assert_eq!(config.notes, 54..138);
    assert_eq!(config.reference_frequency, 440.0);
    assert_eq!(config.reference_note, 9);
    assert_eq!(config.max_frequency, 20000.0);
    assert_eq!(config.table_size, 128);
    assert_eq!(config.max_phi, 0.5);
    assert_eq!(config.max_value, 1.0 / 1.18);
}

#[test]
fn empty_note_range_is_rejected() {
    let config = GeneratorConfig {
        notes: 60..60,
        ..Default::default()
    };

    assert_eq!(
        config.validate(),
        Err(TableError::EmptyNoteRange { start: 60, end: 60 })
    );
}

#[test]
fn reversed_note_range_is_rejected() {
    let config = GeneratorConfig {
        notes: 80..70,
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(TableError::EmptyNoteRange { .. })
    ));
}

#[test]
fn zero_table_size_is_rejected() {
    let config = GeneratorConfig {
        table_size: 0,
        ..Default::default()
    };

    assert_eq!(config.validate(), Err(TableError::ZeroTableSize));
}

#[test]
fn non_positive_reference_frequency_is_rejected() {
    for reference_frequency in [0.0, -440.0, f64::NAN, f64::INFINITY] {
        let config = GeneratorConfig {
            reference_frequency,
            ..Default::default()
        };

        assert!(
            matches!(
                config.validate(),
                Err(TableError::InvalidReferenceFrequency(_))
            ),
            "accepted reference frequency {reference_frequency}"
        );
    }
}

#[test]
fn non_positive_max_frequency_is_rejected() {
    let config = GeneratorConfig {
        max_frequency: 0.0,
        ..Default::default()
    };

    assert_eq!(config.validate(), Err(TableError::InvalidMaxFrequency(0.0)));
}

#[test]
fn invalid_phase_span_and_amplitude_are_rejected() {
    let config = GeneratorConfig {
        max_phi: -0.5,
        ..Default::default()
    };
    assert_eq!(config.validate(), Err(TableError::InvalidPhaseSpan(-0.5)));

    let config = GeneratorConfig {
        max_value: f64::INFINITY,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(TableError::InvalidAmplitude(_))
    ));
}

#[test]
fn tiny_reference_frequency_exceeds_harmonic_limit() {
    let config = GeneratorConfig {
        notes: 0..128,
        reference_frequency: 1e-3,
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(TableError::TooManyHarmonics {
            note: 0,
            limit: MAX_HARMONICS,
            ..
        })
    ));
}

#[test]
fn harmonic_limit_is_checked_at_the_lowest_note() {
    // 20000 Hz / 2^16 harmonics is about 0.305 Hz for note 9
    let at_limit = GeneratorConfig {
        notes: 9..10,
        reference_frequency: 32.0 * 20000.0 / f64::from(MAX_HARMONICS),
        ..Default::default()
    };
    assert_eq!(at_limit.validate(), Ok(()));

    let above_limit = GeneratorConfig {
        reference_frequency: 32.0 * 20000.0 / f64::from(MAX_HARMONICS + 2),
        ..at_limit
    };
    assert!(matches!(
        above_limit.validate(),
        Err(TableError::TooManyHarmonics { note: 9, .. })
    ));
}
