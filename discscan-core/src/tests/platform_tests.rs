use super::*;

#[test]
fn canonical_names_round_trip() {
    for &system in System::all() {
        let parsed: System = system.short_name().parse().unwrap();
        assert_eq!(parsed, system, "round-trip failed for {:?}", system);
    }
}

#[test]
fn aliases_resolve_correctly() {
    let cases = [
        ("gamecube", System::GameCube),
        ("psx", System::Ps1),
        ("mega cd", System::SegaCd),
        ("saturn", System::Saturn),
        ("dreamcast", System::Dreamcast),
        ("playstation portable", System::Psp),
    ];
    for (input, expected) in cases {
        let parsed: System = input.parse().unwrap();
        assert_eq!(
            parsed, expected,
            "alias '{}' should parse to {:?}",
            input, expected
        );
    }
}

#[test]
fn case_insensitive_parsing() {
    let parsed: System = "GC".parse().unwrap();
    assert_eq!(parsed, System::GameCube);
    let parsed: System = "Dreamcast".parse().unwrap();
    assert_eq!(parsed, System::Dreamcast);
}

#[test]
fn unknown_string_returns_err() {
    let result: Result<System, _> = "pcecd".parse();
    assert!(result.is_err());
}

#[test]
fn short_name_is_first_alias() {
    for &system in System::all() {
        assert_eq!(
            system.short_name(),
            system.aliases()[0],
            "short_name should be first alias for {:?}",
            system,
        );
    }
}
