use std::sync::Arc;

use shape_mapper::{
    FieldDescriptor, FieldKind, Mapper, MapperConfig, MappingRegistry, Record, Shape, Value,
};

fn source_shape() -> Arc<Shape> {
    Shape::builder("ClienteEntity")
        .field(FieldDescriptor::new("codigoCliente", FieldKind::Int))
        .field(FieldDescriptor::new("nome", FieldKind::Str))
        .build()
}

fn dest_shape() -> Arc<Shape> {
    Shape::builder("ClienteConsultaDto")
        .field(FieldDescriptor::new("codigo", FieldKind::Str))
        .field(FieldDescriptor::new("nome", FieldKind::Str))
        .build()
}

#[test]
fn lookup_is_exact_pair_only() {
    let registry = MappingRegistry::new();
    registry.register(&source_shape(), &dest_shape(), |_, _| {});

    assert!(registry.lookup("ClienteEntity", "ClienteConsultaDto").is_some());
    assert!(registry.lookup("ClienteConsultaDto", "ClienteEntity").is_none());
    assert!(registry.lookup("ClienteEntity", "OtherDto").is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn one_source_can_map_to_several_destinations() {
    let other_dest = Shape::builder("ClienteResumoDto")
        .field(FieldDescriptor::new("nome", FieldKind::Str))
        .build();

    let registry = MappingRegistry::new();
    registry.register(&source_shape(), &dest_shape(), |_, _| {});
    registry.register(&source_shape(), &other_dest, |_, _| {});

    assert_eq!(registry.len(), 2);
    assert!(registry.lookup("ClienteEntity", "ClienteConsultaDto").is_some());
    assert!(registry.lookup("ClienteEntity", "ClienteResumoDto").is_some());
    assert!(registry.lookup("ClienteResumoDto", "ClienteConsultaDto").is_none());
}

#[test]
fn last_registration_wins() {
    let registry = Arc::new(MappingRegistry::new());
    registry.register(&source_shape(), &dest_shape(), |_, dest| {
        dest.set("codigo", "first");
    });
    registry.register(&source_shape(), &dest_shape(), |_, dest| {
        dest.set("codigo", "second");
    });
    assert_eq!(registry.len(), 1);

    let mapper = Mapper::with_registry(MapperConfig::default(), registry);
    let dto = mapper
        .map(&Value::Record(Record::new(&source_shape())), &dest_shape())
        .unwrap();
    assert_eq!(
        dto.as_record().unwrap().get("codigo"),
        Some(&Value::from("second"))
    );
}

#[test]
fn override_runs_before_generic_copy_and_can_be_clobbered() {
    let registry = Arc::new(MappingRegistry::new());
    registry.register(&source_shape(), &dest_shape(), |_, dest| {
        dest.set("nome", "FROM OVERRIDE");
        dest.set("codigo", "kept");
    });

    let mut source = Record::new(&source_shape());
    source.set("nome", "João");

    let mapper = Mapper::with_registry(MapperConfig::default(), registry);
    let dto = mapper.map(&Value::Record(source), &dest_shape()).unwrap();
    let dto = dto.as_record().unwrap();

    // The generic loop runs after the override: a same-named source field
    // replaces the override's value, a field without one keeps it.
    assert_eq!(dto.get("nome"), Some(&Value::from("João")));
    assert_eq!(dto.get("codigo"), Some(&Value::from("kept")));
}

#[test]
fn overrides_see_the_unpopulated_destination() {
    let registry = Arc::new(MappingRegistry::new());
    registry.register(&source_shape(), &dest_shape(), |src, dest| {
        // Destination fields still hold constructed defaults at this point
        assert_eq!(dest.get("nome"), Some(&Value::from("")));
        if let Some(codigo) = src.get("codigoCliente").and_then(Value::as_int) {
            dest.set("codigo", codigo.to_string());
        }
    });

    let mut source = Record::new(&source_shape());
    source.set("codigoCliente", 42i64);

    let mapper = Mapper::with_registry(MapperConfig::default(), registry);
    let dto = mapper.map(&Value::Record(source), &dest_shape()).unwrap();
    assert_eq!(
        dto.as_record().unwrap().get("codigo"),
        Some(&Value::from("42"))
    );
}

#[test]
fn registry_is_shared_across_mappers() {
    let registry = Arc::new(MappingRegistry::new());
    let mapper_a = Mapper::with_registry(MapperConfig::default(), registry.clone());
    let mapper_b = Mapper::with_registry(MapperConfig::default(), registry);

    mapper_a.registry().register(&source_shape(), &dest_shape(), |_, dest| {
        dest.set("codigo", "shared");
    });

    let dto = mapper_b
        .map(&Value::Record(Record::new(&source_shape())), &dest_shape())
        .unwrap();
    assert_eq!(
        dto.as_record().unwrap().get("codigo"),
        Some(&Value::from("shared"))
    );
    assert!(!mapper_b.registry().is_empty());
}
