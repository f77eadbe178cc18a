use gatefile::error::{Field, GateError, ParseError};
use gatefile::model::Item;
use gatefile::parser::{parse_file, parse_file_partial, parse_str};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_world_fixture_structure() {
    let file = parse_file(fixture("world.gate")).unwrap();

    let shape: Vec<(i64, i64, Vec<(&str, usize)>)> = file
        .gates
        .iter()
        .map(|g| {
            (
                g.id,
                g.tag,
                g.sections
                    .iter()
                    .map(|s| (s.id.as_str(), s.items.len()))
                    .collect(),
            )
        })
        .collect();

    assert_eq!(
        shape,
        vec![
            (1, 100, vec![("landing", 2), ("armory", 2)]),
            (2, 200, vec![]),
            (3, 300, vec![("vault", 1)]),
        ]
    );
    assert!(file.gates.iter().all(|g| g.kind == "gate"));
    assert_eq!(file.gates[0].sections[1].items[1], Item::new("arrows", 40));
    // No trailing newline in the fixture
    assert_eq!(file.gates[2].sections[0].items, vec![Item::new("gem", 9)]);
}

#[test]
fn test_parsing_twice_gives_equal_records() {
    let a = parse_file(fixture("world.gate")).unwrap();
    let b = parse_file(fixture("world.gate")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_bad_header_fixture() {
    let path = fixture("bad_header.gate");
    match parse_file(&path).unwrap_err() {
        GateError::Parse { path: p, source } => {
            assert_eq!(p, path);
            assert_eq!(
                source,
                ParseError::MalformedHeader {
                    line: 5,
                    content: "2 gat 200".into()
                }
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_bad_header_fixture_partial() {
    let (file, err) = parse_file_partial(fixture("bad_header.gate")).unwrap();
    assert_eq!(err.map(|e| e.line()), Some(5));
    assert_eq!(file.gates.len(), 1);
    assert_eq!(file.gates[0].sections[0].items, vec![Item::new("sword", 3)]);
}

#[test]
fn test_injected_header_error_line_matches() {
    let base: Vec<&str> = vec![
        "1 gate 1", "a", "  x 1", "", "2 gate 2", "b", "  y 2", "", "3 gate 3",
    ];
    // Replace each header in turn with a malformed one
    for (idx, line) in base.iter().enumerate() {
        if !line.contains("gate") {
            continue;
        }
        let mut lines = base.clone();
        lines[idx] = "9 portal 9";
        let err = parse_str("inj", &lines.join("\n")).unwrap_err();
        assert_eq!(err.line(), idx + 1);
    }
}

#[test]
fn test_bad_quantity_names_field_and_value() {
    let err = parse_str("q", "1 gate 1\na\n  x 1.5\n").unwrap_err();
    match err {
        ParseError::InvalidInteger {
            line, field, value, ..
        } => {
            assert_eq!((line, field, value.as_str()), (3, Field::ItemQuantity, "1.5"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = parse_file(fixture("absent.gate")).unwrap_err();
    assert!(matches!(err, GateError::Io { .. }));
    assert!(err.to_string().contains("absent.gate"));
}
