use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn validate_accepts_plan_with_code_42() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.write_stdin("3 2\n1 2\n1 0\n2 0\n3 0\n");

    cmd.assert().code(42);
}

#[test]
fn validate_accepts_sample_file_with_code_42() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.arg("data/sample/2.in");

    cmd.assert().code(42);
}

#[test]
fn validate_rejects_zero_building_count() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.write_stdin("0 1\n1\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid text(0) for a count"));
}

#[test]
fn validate_rejects_header_with_extra_token() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.write_stdin("3 2 9\n1 2\n1 0\n2 0\n3 0\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid text(3 2 9) for header line"));
}

#[test]
fn validate_rejects_duplicate_inspect_id() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.write_stdin("3 2\n1 1\n1 0\n2 0\n3 0\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Duplicate building id(1) in inspection list."));
}

#[test]
fn validate_rejects_inspect_id_out_of_range() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.write_stdin("1 1\n1000\n1 0\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Building id(1000) out of valid range"));
}

#[test]
fn validate_rejects_neighbor_count_not_matching_degree() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.write_stdin("2 1\n1\n1 2 2\n2 0\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("claims degree 2, but 1 neighbor(s) given."));
}

#[test]
fn validate_rejects_duplicate_building_id() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.write_stdin("2 1\n1\n1 0\n1 0\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Duplicate building id(1) in building lines."));
}

#[test]
fn validate_rejects_duplicate_neighbor() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.write_stdin("2 1\n1\n1 2 2 2\n2 1 1\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Duplicate neighbor(2) of building(1)."));
}

#[test]
fn validate_rejects_self_linked_building() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.write_stdin("1 1\n1\n1 1 1\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Building(1) lists itself as a neighbor."));
}

#[test]
fn validate_rejects_undeclared_inspect_id() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.write_stdin("1 1\n5\n1 0\n");

    cmd.assert()
        .failure()
        .stderr(str::contains(
            "Building id(5) in inspection list is never declared.",
        ));
}

#[test]
fn validate_rejects_undeclared_neighbor() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.write_stdin("1 1\n1\n1 1 2\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Neighbor(2) of building(1) is never declared."));
}

#[test]
fn validate_rejects_trailing_content() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.write_stdin("3 2\n1 2\n1 0\n2 0\n3 0\n7\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Unexpected trailing content(7)"));
}

#[test]
fn validate_rejects_non_integer_token() {
    let mut cmd = Command::cargo_bin("validate").unwrap();
    cmd.write_stdin("1 1\n1\n1 x\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid text(x) for a degree"));
}
