//! End-to-end tests for `#[dump(...)]` field annotations and the error
//! paths of the traversal engine.

use vardump::{
    Dump, DumpError, FlatOptions, NestedOptions, Shape, dump_flat, dump_nested,
};

// hex sha256 of "secret"
const SECRET_DIGEST: &str = "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b";

#[derive(Dump)]
struct AnnotatedInner {
    user_name: String,
    #[dump(obscure)]
    password: String,
}

#[derive(Dump)]
struct AnnotatedOuter {
    #[dump(skip)]
    data1: AnnotatedInner,
    #[dump(rename = "MainData")]
    data2: AnnotatedInner,
}

fn annotated_outer() -> AnnotatedOuter {
    AnnotatedOuter {
        data1: AnnotatedInner {
            user_name: "admin".to_string(),
            password: "classified".to_string(),
        },
        data2: AnnotatedInner {
            user_name: "guest".to_string(),
            password: "secret".to_string(),
        },
    }
}

#[test]
fn test_flat_annotations() {
    let text = dump_flat(&annotated_outer(), &FlatOptions::default()).unwrap();
    assert!(!text.contains("data1"));
    assert!(!text.contains("admin"));
    assert!(!text.contains("classified"));
    assert!(!text.contains("data2"));
    assert!(text.contains("MainData.user_name: \"guest\""));
    assert!(text.contains("MainData.password: "));
    assert!(!text.contains("secret"));
    assert!(text.contains(SECRET_DIGEST));
}

#[test]
fn test_nested_annotations() {
    let text = dump_nested(&annotated_outer(), &NestedOptions::default()).unwrap();
    assert!(!text.contains("data1"));
    assert!(!text.contains("admin"));
    assert!(!text.contains("data2"));
    assert!(text.contains("\"MainData\""));
    assert!(!text.contains("secret"));
    assert!(text.contains(SECRET_DIGEST));
}

#[test]
fn test_obscure_propagates_to_descendants() {
    #[derive(Dump)]
    struct Vault {
        #[dump(obscure)]
        entries: Vec<String>,
    }

    let vault = Vault {
        entries: vec!["secret".to_string(), "other".to_string()],
    };
    let text = dump_flat(&vault, &FlatOptions::default()).unwrap();
    assert!(!text.contains("secret"));
    assert!(!text.contains("other"));
    assert!(text.contains(SECRET_DIGEST));
}

#[test]
fn test_obscure_leaves_non_string_leaves_alone() {
    #[derive(Dump)]
    struct Mixed {
        #[dump(obscure)]
        count: i32,
        #[dump(obscure)]
        flag: bool,
    }

    let value = Mixed {
        count: 42,
        flag: true,
    };
    let text = dump_flat(&value, &FlatOptions::default()).unwrap();
    assert!(text.contains("count: 42"));
    assert!(text.contains("flag: true"));
}

#[test]
fn test_obscure_by_default_option() {
    #[derive(Dump)]
    struct Login {
        user: String,
    }

    let login = Login {
        user: "secret".to_string(),
    };
    let options = FlatOptions {
        obscure_by_default: true,
        ..FlatOptions::default()
    };
    let text = dump_flat(&login, &options).unwrap();
    assert!(!text.contains("secret"));
    assert!(text.contains(SECRET_DIGEST));

    // unset by default
    let text = dump_flat(&login, &FlatOptions::default()).unwrap();
    assert!(text.contains("\"secret\""));
}

#[test]
fn test_skipped_field_type_needs_no_dump_impl() {
    struct Opaque;

    #[derive(Dump)]
    struct Carrier {
        #[dump(skip)]
        _handle: Opaque,
        name: String,
    }

    let value = Carrier {
        _handle: Opaque,
        name: "x".to_string(),
    };
    let text = dump_flat(&value, &FlatOptions::default()).unwrap();
    assert_eq!(text, "name: \"x\"");
}

#[test]
fn test_rename_applies_in_paths_and_keys() {
    #[derive(Dump)]
    struct Config {
        #[dump(rename = "Host")]
        host: String,
    }

    let value = Config {
        host: "localhost".to_string(),
    };
    let flat = dump_flat(&value, &FlatOptions::default()).unwrap();
    assert_eq!(flat, "Host: \"localhost\"");
    let nested = dump_nested(&value, &NestedOptions::default()).unwrap();
    assert!(nested.contains("\"Host\""));
    assert!(!nested.contains("\"host\""));
}

#[test]
fn test_obscure_applies_to_textual_objects() {
    #[derive(Dump)]
    struct Endpoint {
        #[dump(obscure)]
        address: std::net::IpAddr,
    }

    let endpoint = Endpoint {
        address: "192.168.0.1".parse().unwrap(),
    };
    let text = dump_flat(&endpoint, &FlatOptions::default()).unwrap();
    assert!(!text.contains("192.168.0.1"));
    assert!(text.starts_with("address: "));

    #[derive(Dump)]
    struct ClearEndpoint {
        address: std::net::IpAddr,
    }

    let clear = ClearEndpoint {
        address: "192.168.0.1".parse().unwrap(),
    };
    let text = dump_flat(&clear, &FlatOptions::default()).unwrap();
    assert!(text.contains("192.168.0.1"));
}

#[test]
fn test_nil_reference_fails() {
    #[derive(Dump)]
    struct Holder {
        value: Option<i32>,
    }

    let holder = Holder { value: None };
    let result = dump_flat(&holder, &FlatOptions::default());
    assert_eq!(result, Err(DumpError::NilReference));
    let result = dump_nested(&holder, &NestedOptions::default());
    assert_eq!(result, Err(DumpError::NilReference));
}

#[test]
fn test_some_reference_renders_target() {
    #[derive(Dump)]
    struct Holder {
        value: Option<i32>,
    }

    let holder = Holder { value: Some(3) };
    let text = dump_flat(&holder, &FlatOptions::default()).unwrap();
    assert_eq!(text, "value: 3");
}

#[test]
fn test_cyclic_reference_fails() {
    struct Cycle;

    impl Dump for Cycle {
        fn shape(&self) -> Shape<'_> {
            Shape::Reference(Some(self))
        }
    }

    let result = dump_flat(&Cycle, &FlatOptions::default());
    assert_eq!(result, Err(DumpError::CyclicReference));
}

#[test]
fn test_unsupported_shape_fails_with_type_name() {
    struct Mystery;

    impl Dump for Mystery {
        fn shape(&self) -> Shape<'_> {
            Shape::Unsupported("Mystery")
        }
    }

    let result = dump_nested(&Mystery, &NestedOptions::default());
    assert_eq!(
        result,
        Err(DumpError::UnsupportedShape {
            type_name: "Mystery"
        })
    );
}

#[test]
fn test_error_display_messages() {
    assert_eq!(
        DumpError::NilReference.to_string(),
        "cannot dump a nil reference"
    );
    assert_eq!(
        DumpError::CyclicReference.to_string(),
        "cannot dump a cyclic reference graph"
    );
    assert_eq!(
        DumpError::UnsupportedShape {
            type_name: "Mystery"
        }
        .to_string(),
        "value of type `Mystery` has no dumpable shape"
    );
}
