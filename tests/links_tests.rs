use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, setup_test_db, sl};

#[test]
fn test_link_add_and_list() {
    let db_path = setup_test_db("link_add_list");
    init_db(&db_path);

    sl().args([
        "--db",
        &db_path,
        "link",
        "add",
        "grammar reference",
        "--url",
        "https://example.com/grammar",
        "--category",
        "reference",
    ])
    .assert()
    .success()
    .stdout(contains("Resource link 1 added"));

    sl().args([
        "--db",
        &db_path,
        "link",
        "add",
        "listening podcast",
        "--url",
        "https://example.com/podcast",
    ])
    .assert()
    .success();

    sl().args(["--db", &db_path, "link", "list"])
        .assert()
        .success()
        .stdout(contains("grammar reference"))
        .stdout(contains("https://example.com/podcast"))
        .stdout(contains("reference"));
}

#[test]
fn test_link_list_empty_and_json() {
    let db_path = setup_test_db("link_json");
    init_db(&db_path);

    sl().args(["--db", &db_path, "link", "list"])
        .assert()
        .success()
        .stdout(contains("No resource links"));

    sl().args([
        "--db",
        &db_path,
        "link",
        "add",
        "grammar reference",
        "--url",
        "https://example.com/grammar",
    ])
    .assert()
    .success();

    sl().args(["--db", &db_path, "link", "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"title\": \"grammar reference\""))
        .stdout(contains("\"category\": null"));
}

#[test]
fn test_link_edit_changes_only_given_fields() {
    let db_path = setup_test_db("link_edit");
    init_db(&db_path);

    sl().args([
        "--db",
        &db_path,
        "link",
        "add",
        "grammar reference",
        "--url",
        "https://example.com/grammar",
        "--category",
        "reference",
    ])
    .assert()
    .success();

    sl().args([
        "--db",
        &db_path,
        "link",
        "edit",
        "1",
        "--title",
        "grammar reference v2",
    ])
    .assert()
    .success()
    .stdout(contains("grammar reference v2"))
    .stdout(contains("https://example.com/grammar"));

    sl().args(["--db", &db_path, "link", "edit", "1", "--clear-category"])
        .assert()
        .success();

    sl().args(["--db", &db_path, "link", "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"category\": null"))
        .stdout(contains("reference\"").not());
}

#[test]
fn test_link_delete_is_hard() {
    let db_path = setup_test_db("link_delete");
    init_db(&db_path);

    sl().args([
        "--db",
        &db_path,
        "link",
        "add",
        "grammar reference",
        "--url",
        "https://example.com/grammar",
    ])
    .assert()
    .success();

    sl().args(["--db", &db_path, "link", "del", "1"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    sl().args(["--db", &db_path, "link", "list"])
        .assert()
        .success()
        .stdout(contains("No resource links"));
}

#[test]
fn test_link_operations_on_unknown_id_fail() {
    let db_path = setup_test_db("link_unknown");
    init_db(&db_path);

    for args in [
        vec!["link", "edit", "42", "--title", "x"],
        vec!["link", "del", "42"],
    ] {
        let mut full = vec!["--db", db_path.as_str()];
        full.extend(args);
        sl().args(&full)
            .assert()
            .failure()
            .stderr(contains("Resource link 42 not found"));
    }
}
