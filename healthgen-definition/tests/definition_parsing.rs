//! Integration tests for loading health definitions.

use std::str::FromStr;

use healthgen_definition::{Definition, DependencyKind, Error, parse_definition};

#[test]
fn test_end_to_end_sqlserver_definition() {
    let definition = Definition::from_str(
        r#"
name: svc
dependencies:
  - name: db
    connectionString: "Server=x"
    type: sqlserver
    tags: ["ready"]
"#,
    )
    .expect("definition should parse");

    assert_eq!(definition.name(), "svc");
    assert_eq!(definition.len(), 1);

    let db = &definition.dependencies()[0];
    assert_eq!(db.name(), "db");
    assert_eq!(db.connection_string(), "Server=x");
    assert_eq!(db.kind(), DependencyKind::SqlServer);
    assert_eq!(db.tags().iter().collect::<Vec<_>>(), ["ready"]);
}

#[test]
fn test_dependencies_keep_declaration_order() {
    let definition = Definition::from_str(
        r#"
name: svc
dependencies:
  - { name: c, connectionString: "https://c", type: uri }
  - { name: a, connectionString: "Server=a", type: sqlserver }
  - { name: b, connectionString: "https://b", type: uri }
"#,
    )
    .unwrap();

    let names: Vec<&str> = definition.dependencies().iter().map(|d| d.name()).collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[test]
fn test_type_is_case_insensitive() {
    let definition = Definition::from_str(
        r#"
name: svc
dependencies:
  - name: api
    connectionString: https://api.local
    type: URI
  - name: db
    connectionString: Server=x
    type: SqlServer
"#,
    )
    .unwrap();

    let kinds: Vec<DependencyKind> = definition
        .dependencies()
        .iter()
        .map(|d| d.kind())
        .collect();
    assert_eq!(kinds, [DependencyKind::Uri, DependencyKind::SqlServer]);
}

#[test]
fn test_unsupported_type_fails_whole_definition() {
    let src = r#"
name: svc
dependencies:
  - name: api
    connectionString: https://api.local
    type: uri
  - name: cache
    connectionString: localhost:6379
    type: redis
"#;
    let err = parse_definition(src, "health.yml").unwrap_err();

    match *err {
        Error::UnsupportedType {
            ref ty,
            ref dependency,
            span,
            ..
        } => {
            assert_eq!(ty, "redis");
            assert_eq!(dependency, "cache");
            let span = span.expect("span should point at the type");
            assert_eq!(&src[span.offset()..span.offset() + span.len()], "redis");
        }
        ref other => panic!("expected UnsupportedType, got {other:?}"),
    }
    assert!(err.to_string().contains("'redis'"));
}

#[test]
fn test_unsupported_type_span_points_at_offending_entry() {
    let src = r#"
name: svc
dependencies:
  - name: first
    connectionString: a
    type: uri
  - name: second
    connectionString: b
    type: mongo
  - name: third
    connectionString: c
    type: mongo
"#;
    let err = parse_definition(src, "health.yml").unwrap_err();

    let Error::UnsupportedType {
        ref dependency,
        span,
        ..
    } = *err
    else {
        panic!("expected UnsupportedType");
    };
    assert_eq!(dependency, "second");
    let span = span.unwrap();
    assert!(span.offset() > src.find("name: second").unwrap());
    assert!(span.offset() < src.find("name: third").unwrap());
}

#[test]
fn test_legacy_url_schema() {
    let definition = Definition::from_str(
        r#"
name: svc
dependencies:
  - name: google
    url: https://www.google.com
    tags: [live]
"#,
    )
    .unwrap();

    let google = &definition.dependencies()[0];
    assert_eq!(google.kind(), DependencyKind::Uri);
    assert_eq!(google.connection_string(), "https://www.google.com");
}

#[test]
fn test_url_and_connection_string_conflict() {
    let err = Definition::from_str(
        r#"
name: svc
dependencies:
  - name: api
    url: https://a
    connectionString: https://b
    type: uri
"#,
    )
    .unwrap_err();

    assert!(matches!(*err, Error::Validation { .. }));
    assert!(err.to_string().contains("both 'connectionString' and 'url'"));
}

#[test]
fn test_conflict_label_points_at_conflicting_entry() {
    let src = r#"
name: db
dependencies:
  - name: api
    url: https://a
  - name: db
    connectionString: Server=x
    url: https://b
"#;
    let err = parse_definition(src, "health.yml").unwrap_err();

    let Error::Validation { span, .. } = *err else {
        panic!("expected Validation");
    };
    let span = span.expect("span should point at the url key");
    assert_eq!(span.offset(), src.find("url: https://b").unwrap());
}

#[test]
fn test_missing_type_label_skips_earlier_namesake() {
    let src = r#"
name: svc
dependencies:
  - name: db
    connectionString: Server=a
    type: sqlserver
  - name: db
    connectionString: Server=b
"#;
    let err = parse_definition(src, "health.yml").unwrap_err();

    let Error::Validation { span, .. } = *err else {
        panic!("expected Validation");
    };
    let span = span.expect("span should point at the dependency name");
    assert_eq!(span.offset(), src.rfind("name: db").unwrap() + "name: ".len());
}

#[test]
fn test_missing_type_without_url() {
    let err = Definition::from_str(
        r#"
name: svc
dependencies:
  - name: db
    connectionString: Server=x
"#,
    )
    .unwrap_err();

    assert!(matches!(*err, Error::Validation { .. }));
    assert!(err.to_string().contains("has no 'type'"));
}

#[test]
fn test_missing_connection_string() {
    let err = Definition::from_str(
        r#"
name: svc
dependencies:
  - name: db
    type: sqlserver
"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("missing 'connectionString'"));
}

#[test]
fn test_unknown_field_is_rejected() {
    let err = Definition::from_str(
        r#"
name: svc
dependencies:
  - name: db
    connectionString: Server=x
    type: sqlserver
    timeout: 5
"#,
    )
    .unwrap_err();

    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_serialized_definition_parses_back() {
    let original = Definition::from_str(
        r#"
name: svc
dependencies:
  - name: api
    connectionString: "https://api.local/health?x=1"
    type: uri
    tags: [ready, live]
  - name: db
    connectionString: "Server=x;Password=\"p\""
    type: sqlserver
    tags: []
"#,
    )
    .unwrap();

    // JSON is a subset of YAML, so the serialized form is itself a definition.
    let serialized = serde_json::to_string_pretty(&original).unwrap();
    let reparsed = Definition::from_str(&serialized).unwrap();

    assert_eq!(reparsed, original);
}
