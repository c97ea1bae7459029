use chrono::NaiveDate;
use shape_mapper::{
    ConversionStrategy, DateFormatConfig, EnumDescriptor, FieldDescriptor, FieldKind,
    KindCompatibility, Shape, Value, check_kind_compatibility, check_shape_compatibility,
    coerce_value, parse_date_string,
};

fn config() -> DateFormatConfig {
    DateFormatConfig::default()
}

#[test]
fn test_kind_compatibility() {
    // Exact compatibility
    assert_eq!(
        check_kind_compatibility(&FieldKind::Int, &FieldKind::Int),
        KindCompatibility::Exact
    );

    // Compatible numeric kinds
    assert_eq!(
        check_kind_compatibility(&FieldKind::Int, &FieldKind::Float),
        KindCompatibility::Compatible
    );
    assert_eq!(
        check_kind_compatibility(&FieldKind::UInt, &FieldKind::Int),
        KindCompatibility::Compatible
    );

    // String to date compatibility
    assert_eq!(
        check_kind_compatibility(&FieldKind::Str, &FieldKind::Date),
        KindCompatibility::Compatible
    );

    // Incompatible kinds
    assert_eq!(
        check_kind_compatibility(&FieldKind::Date, &FieldKind::Bool),
        KindCompatibility::Incompatible
    );
}

#[test]
fn test_numeric_coercion() {
    assert_eq!(
        coerce_value(&Value::Int(3), &FieldKind::Float, &config()).unwrap(),
        Value::Float(3.0)
    );
    assert_eq!(
        coerce_value(&Value::Float(3.6), &FieldKind::Int, &config()).unwrap(),
        Value::Int(4)
    );
    assert_eq!(
        coerce_value(&Value::from("12"), &FieldKind::UInt, &config()).unwrap(),
        Value::UInt(12)
    );
    assert!(coerce_value(&Value::Int(-5), &FieldKind::UInt, &config()).is_err());
}

#[test]
fn test_textual_rendering() {
    assert_eq!(
        coerce_value(&Value::Int(42), &FieldKind::Str, &config()).unwrap(),
        Value::from("42")
    );
    assert_eq!(
        coerce_value(&Value::Bool(true), &FieldKind::Str, &config()).unwrap(),
        Value::from("true")
    );

    let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
    assert_eq!(
        coerce_value(&Value::Date(date), &FieldKind::Str, &config()).unwrap(),
        Value::from("2023-01-15")
    );
}

#[test]
fn test_date_parsing_formats() {
    let expected = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
    for text in ["2023-01-15", "15.01.2023", "20230115", "15 Jan 2023"] {
        assert_eq!(parse_date_string(text, &config()), Some(expected), "{text}");
        assert_eq!(
            coerce_value(&Value::from(text), &FieldKind::Date, &config()).unwrap(),
            Value::Date(expected),
            "{text}"
        );
    }
    assert!(coerce_value(&Value::from("soon"), &FieldKind::Date, &config()).is_err());
}

#[test]
fn test_enum_round_trip() {
    let status = EnumDescriptor::new("StatusCliente", vec!["Ativo", "Inativo"]);
    let kind = FieldKind::Enum(status.clone());

    let parsed = coerce_value(&Value::from("Inativo"), &kind, &config()).unwrap();
    assert_eq!(
        coerce_value(&parsed, &FieldKind::Str, &config()).unwrap(),
        Value::from("Inativo")
    );
    // Variant index is the numeric rendering
    assert_eq!(
        coerce_value(&parsed, &FieldKind::Int, &config()).unwrap(),
        Value::Int(1)
    );
}

#[test]
fn test_shape_compatibility_report() {
    let status = EnumDescriptor::new("Status", vec!["Ativo", "Inativo"]);
    let source = Shape::builder("ClienteEntity")
        .field(FieldDescriptor::new("nome", FieldKind::Str))
        .field(FieldDescriptor::new("idade", FieldKind::Int))
        .field(FieldDescriptor::new("status", FieldKind::Enum(status)))
        .field(FieldDescriptor::new("nascimento", FieldKind::Date))
        .build();
    let dest = Shape::builder("ClienteDto")
        .field(FieldDescriptor::new("nome", FieldKind::Str))
        .field(FieldDescriptor::new("idade", FieldKind::Float))
        .field(FieldDescriptor::new("status", FieldKind::Str))
        .field(FieldDescriptor::new("nascimento", FieldKind::Bool))
        .field(FieldDescriptor::new("telefone", FieldKind::Str))
        .build();

    let report = check_shape_compatibility(&source, &dest);

    assert!(!report.compatible);
    assert_eq!(report.mappings.len(), 3);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].field_name, "nascimento");
    assert_eq!(report.unmatched, vec!["telefone".to_string()]);

    let strategy_for = |name: &str| {
        report
            .mappings
            .iter()
            .find(|m| m.dest_field == name)
            .map(|m| m.strategy)
    };
    assert_eq!(strategy_for("nome"), Some(ConversionStrategy::DirectCopy));
    assert_eq!(strategy_for("idade"), Some(ConversionStrategy::NumericConversion));
    assert_eq!(strategy_for("status"), Some(ConversionStrategy::StringConversion));
}

#[test]
fn test_unreadable_and_unwritable_fields_are_excluded() {
    let source = Shape::builder("Source")
        .field(FieldDescriptor::new("hidden", FieldKind::Str).write_only())
        .build();
    let dest = Shape::builder("Dest")
        .field(FieldDescriptor::new("hidden", FieldKind::Str))
        .field(FieldDescriptor::new("derived", FieldKind::Str).read_only())
        .build();

    let report = check_shape_compatibility(&source, &dest);
    assert!(report.mappings.is_empty());
    // The write-only source field never matches; read-only destination
    // fields are not planned at all.
    assert_eq!(report.unmatched, vec!["hidden".to_string()]);
}
