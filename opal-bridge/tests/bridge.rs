///
/// End-to-End Bridge Integration Tests
///
/// Walks the full path a symbol takes through the bridge: encoded
/// signature string -> decoded `Signature` -> type mapping and
/// call-pointer synthesis -> symbol resolution against bootstrap-style
/// tables -> typed callable production through an `FfiBridge` double.
///
/// Run all:  `cargo test --test bridge`
///

use opal_bridge::{
    build_type_descriptor, input_parameter_names, parse_qualified_name, to_host_identifier,
    BridgeConfig, CallWrapper, CodeAddress, CodeHandle, FfiBridge, InMemoryTables, LookupError,
    ReservedWords, Signature, SymbolKind, SymbolResolver, TypeDescriptor,
};

/// The encoded signature of an `add` function whose first parameter is a
/// compiler-synthesized return slot.
const ADD_SIG: &str = "add\tint\t/OPAL/@INTEGER\
                       \t_Return1\tint&\t/OPAL/@INTEGER\
                       \ta\tint\t/OPAL/@INTEGER";

struct StringBridge;

impl FfiBridge for StringBridge {
    type Callable = (String, usize);

    fn cast(&self, descriptor: &TypeDescriptor, addr: CodeAddress) -> (String, usize) {
        (descriptor.as_str().to_string(), addr.as_usize())
    }
}

fn bootstrap() -> SymbolResolver<InMemoryTables, InMemoryTables> {
    let mut signatures = InMemoryTables::new();
    signatures.register_function("opal/add", ADD_SIG);
    let mut code = InMemoryTables::new();
    code.register_library_function("add", CodeAddress::new(0x1234));
    SymbolResolver::new(signatures, code)
}

#[test]
fn decode_through_descriptor() {
    let sig = Signature::decode(ADD_SIG).unwrap();
    assert_eq!(sig.arity(), 2);
    assert!(sig.param(0).unwrap().is_return_slot());
    assert!(!sig.param(1).unwrap().is_return_slot());

    // The return slot occupies the first position, so the caller supplies
    // no arguments at all.
    assert!(input_parameter_names(&sig).is_empty());
    assert_eq!(sig.parameter_names(), vec!["_Return1", "a"]);

    assert_eq!(
        build_type_descriptor(&sig).as_str(),
        "int (*)(int* _Return1, int a)"
    );
}

#[test]
fn resolve_and_type_a_function() {
    let resolver = bootstrap();
    let wrapper = CallWrapper::new(&resolver, &StringBridge);

    let (descriptor, addr) = wrapper.typed_code("opal/add", None).unwrap();
    assert_eq!(descriptor, "int (*)(int* _Return1, int a)");
    assert_eq!(addr, 0x1234);
}

#[test]
fn repeated_resolution_synthesizes_fresh_callables() {
    let resolver = bootstrap();
    let wrapper = CallWrapper::new(&resolver, &StringBridge);

    let first = wrapper.typed_code("opal/add", None).unwrap();
    let second = wrapper.typed_code("opal/add", None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn already_typed_callable_short_circuits() {
    let resolver = bootstrap();
    let wrapper = CallWrapper::new(&resolver, &StringBridge);

    let existing = ("void (*)()".to_string(), 0xdead);
    let out = wrapper
        .typed_code("opal/add", Some(CodeHandle::Callable(existing.clone())))
        .unwrap();
    assert_eq!(out, existing);
}

#[test]
fn unknown_symbol_reports_its_space() {
    let resolver = bootstrap();
    let err = resolver.function_signature("opal/nope").unwrap_err();
    assert_eq!(
        err,
        LookupError::SymbolNotFound {
            kind: SymbolKind::Function,
            qual_name: "opal/nope".to_string(),
        }
    );
    assert_eq!(err.to_string(), "no function registered under 'opal/nope'");
}

#[test]
fn host_identifier_escaping_with_default_config() {
    let config = BridgeConfig::default();
    assert_eq!(to_host_identifier("match", &config.reserved_words), "match_");
    assert_eq!(to_host_identifier("add", &config.reserved_words), "add");

    let custom: ReservedWords = ["class"].into_iter().collect();
    assert_eq!(to_host_identifier("class", &custom), "class_");
}

#[test]
fn qualified_names_round_out_the_surface() {
    let parsed = parse_qualified_name("opal::Cons*");
    assert_eq!(parsed.namespace, Some("opal"));
    assert_eq!(parsed.name, "Cons");
}
