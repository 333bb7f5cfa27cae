//! Integration tests for codevariants-registry

use codevariants::{
    AuthorTable, CatalogError, CatalogLoader, ContentDir, Environment, ValidationMode, Validator,
    scenarios,
};
use codevariants_registry::*;
use std::collections::BTreeSet;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::tempdir;

const BACKDROP_REACT: &str = "import { Backdrop } from '@shopify/polaris';\n\nfunction BackdropExample() {\n  return <Backdrop onClick={() => console.log('clicked')} />;\n}\n";

fn content() -> Vec<AuthorTable> {
    vec![
        scenarios!("Backdrop" => {
            "default" => {
                react: BACKDROP_REACT,
                vanilla: r#"<div class="Polaris-Backdrop"></div>"#,
            },
        }),
        scenarios!("Button" => {
            "with-onclick" => {
                react: "<Button onClick={handleClick}>Save</Button>",
                vanilla: r#"<button class="Polaris-Button">Save</button>"#,
                extjs: "Ext.create('Ext.button.Button', { text: 'Save', handler: handleClick });",
                typescript: "<Button onClick={(): void => handleClick()}>Save</Button>",
            },
            "default" => {
                react: "<Button>Add product</Button>",
                extjs: "Ext.create('Ext.button.Button', { text: 'Add product' });",
            },
            "disabled" => {
                react: "<Button disabled>Buy shipping label</Button>",
            },
        }),
        scenarios!("ButtonGroup" => {
            "with-segmented-buttons" => {
                react: "<ButtonGroup variant=\"segmented\" />",
                vanilla: "<div class=\"Polaris-ButtonGroup\"></div>",
                extjs: "Ext.create('Ext.container.ButtonGroup');",
                typescript: "<ButtonGroup variant=\"segmented\" />",
            },
        }),
    ]
}

fn lenient_registry() -> Registry {
    build(&content(), ValidationMode::Lenient).unwrap().registry
}

/// Every (component, scenario, environment) triple with no body
fn missing_triples(tables: &[AuthorTable]) -> BTreeSet<(String, String, Environment)> {
    let loader = CatalogLoader::new();
    let mut missing = BTreeSet::new();
    for table in tables {
        let catalog = loader.load_table(table).unwrap();
        for record in catalog.scenarios() {
            for environment in record.missing_environments() {
                missing.insert((
                    record.component.to_string(),
                    record.scenario.to_string(),
                    environment,
                ));
            }
        }
    }
    missing
}

#[test]
fn test_backdrop_default_missing_legacy_toolkit() {
    let registry = lenient_registry();

    let err = registry
        .get_body("Backdrop", "default", Environment::LegacyWidgetToolkit)
        .unwrap_err();
    assert_eq!(
        err,
        QueryError::MissingBody {
            component: "Backdrop".into(),
            scenario: "default".into(),
            environment: Environment::LegacyWidgetToolkit,
        }
    );

    let body = registry
        .get_body("Backdrop", "default", Environment::PrimaryFramework)
        .unwrap();
    assert_eq!(body.as_bytes(), BACKDROP_REACT.as_bytes());
}

#[test]
fn test_scenario_order_is_author_order() {
    let registry = lenient_registry();

    let scenarios: Vec<&str> = registry
        .list_scenarios("Button")
        .unwrap()
        .into_iter()
        .map(|s| s.as_str())
        .collect();
    assert_eq!(scenarios, vec!["with-onclick", "default", "disabled"]);
}

#[test]
fn test_every_listed_pair_resolves() {
    let registry = lenient_registry();

    let mut pairs = 0;
    for component in registry.list_components() {
        for scenario in registry.list_scenarios(component.as_str()).unwrap() {
            let record = registry
                .get_scenario(component.as_str(), scenario.as_str())
                .unwrap();
            assert_eq!(&record.component, component);
            assert_eq!(&record.scenario, scenario);
            pairs += 1;
        }
    }
    assert_eq!(pairs, registry.scenario_count());
    assert_eq!(pairs, 5);
}

#[test]
fn test_load_and_publish_is_idempotent() {
    let first = build(&content(), ValidationMode::Lenient).unwrap();
    let second = build(&content(), ValidationMode::Lenient).unwrap();

    assert_eq!(first.registry, second.registry);
    assert_eq!(first.registry.fingerprint(), second.registry.fingerprint());
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn test_snapshot_round_trip_returns_same_bodies() {
    let original = lenient_registry();
    let json = serde_json::to_string_pretty(&original.to_snapshot()).unwrap();
    let snapshot: RegistrySnapshot = serde_json::from_str(&json).unwrap();
    let restored = Registry::from_snapshot(snapshot, ValidationMode::Lenient).unwrap();

    for component in original.list_components() {
        for scenario in original.list_scenarios(component.as_str()).unwrap() {
            for environment in Environment::ALL {
                assert_eq!(
                    original.get_body(component.as_str(), scenario.as_str(), environment),
                    restored.get_body(component.as_str(), scenario.as_str(), environment),
                );
            }
        }
    }
}

#[test]
fn test_strict_mode_names_exactly_the_missing_pairs() {
    let tables = content();
    let err = build(&tables, ValidationMode::Strict).unwrap_err();
    let RegistryError::Catalog(err) = err else {
        panic!("expected a catalog error, got {err:?}");
    };

    let mut reported = BTreeSet::new();
    for issue in err.issues() {
        let CatalogError::MissingEnvironment {
            component,
            scenario,
            missing,
        } = issue
        else {
            panic!("unexpected issue {issue:?}");
        };
        for environment in missing {
            reported.insert((component.clone(), scenario.clone(), *environment));
        }
    }

    assert_eq!(reported, missing_triples(&tables));
    assert!(reported.contains(&(
        "Backdrop".to_string(),
        "default".to_string(),
        Environment::LegacyWidgetToolkit
    )));
}

#[test]
fn test_lenient_warning_count_equals_missing_pairs() {
    let tables = content();
    let build = build(&tables, ValidationMode::Lenient).unwrap();

    let expected = missing_triples(&tables);
    assert_eq!(build.warnings.len(), expected.len());
    assert_eq!(build.warnings.len(), 2 + 2 + 3);

    let warned: BTreeSet<(String, String, Environment)> = build
        .warnings
        .iter()
        .map(|gap| (gap.component.to_string(), gap.scenario.to_string(), gap.environment))
        .collect();
    assert_eq!(warned, expected);
}

#[test]
fn test_duplicate_scenario_blocks_publication() {
    let table = AuthorTable::new("Badge")
        .scenario("default", [("react", "<Badge>Fulfilled</Badge>")])
        .scenario("with-tone", [("react", "<Badge tone=\"info\">Draft</Badge>")])
        .scenario("default", [("react", "<Badge>Paid</Badge>")]);

    let err = build(&[table], ValidationMode::Lenient).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Catalog(CatalogError::DuplicateScenario { ref component, ref scenario })
            if component == "Badge" && scenario == "default"
    ));
}

#[test]
fn test_blank_body_blocks_lenient_publication() {
    let table = AuthorTable::new("Backdrop").scenario("default", [("react", "   ")]);

    let err = build(&[table], ValidationMode::Lenient).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Catalog(CatalogError::EmptyContent { ref component, environment, .. })
            if component == "Backdrop" && environment == Environment::PrimaryFramework
    ));
}

#[test]
fn test_duplicate_component_blocks_publication() {
    let mut tables = content();
    tables.push(scenarios!("backdrop" => {
        "transparent" => { react: "<Backdrop transparent />" },
    }));

    let err = build(&tables, ValidationMode::Lenient).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Catalog(CatalogError::DuplicateComponent { ref component })
            if component == "backdrop"
    ));
}

#[test]
fn test_published_registry_survives_rebuild() {
    let handle = Arc::new(RegistryHandle::new(lenient_registry()));
    let before = handle.current();

    let mut tables = content();
    tables.push(scenarios!("Spinner" => {
        "default" => { react: "<Spinner accessibilityLabel=\"Loading\" />" },
    }));
    let rebuilt = build(&tables, ValidationMode::Lenient).unwrap().registry;
    assert!(handle.replace_if_changed(rebuilt).is_some());

    assert!(before.catalog("Spinner").is_none());
    assert_eq!(before.len(), 3);

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let handle = Arc::clone(&handle);
            thread::spawn(move || {
                let registry = handle.current();
                registry
                    .get_body("Spinner", "default", Environment::PrimaryFramework)
                    .map(str::to_string)
            })
        })
        .collect();
    for reader in readers {
        assert_eq!(
            reader.join().unwrap().unwrap(),
            "<Spinner accessibilityLabel=\"Loading\" />"
        );
    }
}

#[test]
fn test_code_tabs_and_file_resolution() {
    let registry = lenient_registry();

    let tabs = registry.code_tabs("button", "default").unwrap();
    let titles: Vec<&str> = tabs.iter().map(|tab| tab.title).collect();
    assert_eq!(titles, vec!["React", "ExtJS"]);

    let reference = registry
        .resolve_example_file("button-group-with-segmented-buttons.tsx")
        .unwrap();
    assert_eq!(reference.component, "ButtonGroup");
    assert_eq!(reference.scenario, "with-segmented-buttons");
    assert!(
        registry
            .get_scenario(&reference.component, &reference.scenario)
            .is_ok()
    );

    assert!(registry.resolve_example_file("spinner-default.tsx").is_none());
}

#[test]
fn test_content_directory_to_export() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("Backdrop.json"),
        r#"{ "default": { "react": "<Backdrop />", "vanilla": "<div></div>" } }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("Badge.json"),
        r#"{ "default": { "react": "<Badge>Paid</Badge>", "extjs": "Ext.create('Ext.Component', { html: 'Paid' })" } }"#,
    )
    .unwrap();

    let tables = ContentDir::new(dir.path()).read_tables().unwrap();
    let registry = build(&tables, ValidationMode::Lenient).unwrap().registry;

    let bytes = RegistryExport::of(&registry).to_bytes().unwrap();
    let export_path = dir.path().join("registry.json");
    fs::write(&export_path, &bytes).unwrap();

    let restored = RegistryExport::from_bytes(&fs::read(&export_path).unwrap())
        .unwrap()
        .restore(ValidationMode::Lenient)
        .unwrap();
    assert_eq!(restored, registry);
    assert_eq!(
        restored.list_components().into_iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        vec!["Backdrop", "Badge"]
    );

    let strict = Validator::strict();
    let catalog = CatalogLoader::new().load_table(&tables[0]).unwrap();
    assert!(strict.validate(catalog).is_err());
}
