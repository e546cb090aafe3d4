use hf_grid::{BoundaryTemps, TemperatureField};
use hf_results::*;

fn field() -> TemperatureField {
    let temps = BoundaryTemps {
        top: 100.0,
        bottom: 0.0,
        left: 50.0,
        right: 75.0,
    };
    TemperatureField::initialized(3, 4, &temps).unwrap()
}

fn manifest(run_id: &str, case_name: &str) -> RunManifest {
    RunManifest {
        run_id: run_id.to_string(),
        case_name: case_name.to_string(),
        timestamp: "2026-08-08T12:00:00Z".to_string(),
        nx: 3,
        ny: 4,
        sweeps: 17,
        total_error: 4.2e-7,
        solver_version: "0.1.0".to_string(),
    }
}

#[test]
fn save_and_load_run() {
    let temp_dir = std::env::temp_dir().join("hf_results_test");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RunStore::new(temp_dir.clone()).unwrap();
    store.save_run(&manifest("run123", "plate"), &field()).unwrap();

    let loaded = store.load_manifest("run123").unwrap();
    assert_eq!(loaded.run_id, "run123");
    assert_eq!(loaded.sweeps, 17);

    let rows = store.load_grid("run123").unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.len() == 4));
    // Row 0 is the i == 0 edge: the left temperature wins the corners.
    assert_eq!(rows[0], vec![50.0, 50.0, 50.0, 50.0]);
    assert_eq!(rows[2], vec![75.0, 75.0, 75.0, 75.0]);
    assert_eq!(rows[1], vec![0.0, 0.0, 0.0, 100.0]);
}

#[test]
fn grid_file_is_row_major_whitespace_text() {
    let temp_dir = std::env::temp_dir().join("hf_results_test_format");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RunStore::new(temp_dir.clone()).unwrap();
    store.save_run(&manifest("runfmt", "plate"), &field()).unwrap();

    let text = std::fs::read_to_string(store.grid_path("runfmt")).unwrap();
    assert!(text.ends_with('\n'));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert_eq!(line.split_whitespace().count(), 4);
    }
    assert_eq!(lines[0], "50.000000 50.000000 50.000000 50.000000");
}

#[test]
fn list_runs_by_case() {
    let temp_dir = std::env::temp_dir().join("hf_results_test_list");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RunStore::new(temp_dir.clone()).unwrap();
    store.save_run(&manifest("run1", "plate"), &field()).unwrap();
    store.save_run(&manifest("run2", "plate"), &field()).unwrap();
    store.save_run(&manifest("run3", "bench"), &field()).unwrap();

    let plate_runs = store.list_runs("plate").unwrap();
    assert_eq!(plate_runs.len(), 2);

    let bench_runs = store.list_runs("bench").unwrap();
    assert_eq!(bench_runs.len(), 1);

    store.delete_run("run1").unwrap();
    assert!(!store.has_run("run1"));
    assert_eq!(store.list_runs("plate").unwrap().len(), 1);
}

#[test]
fn missing_run_is_reported() {
    let temp_dir = std::env::temp_dir().join("hf_results_test_missing");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RunStore::new(temp_dir).unwrap();
    assert!(matches!(
        store.load_manifest("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));
    assert!(matches!(
        store.load_grid("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));
}
