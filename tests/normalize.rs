use payroll_tools::SchemaError;
use payroll_tools::config::StandardColumns;
use payroll_tools::normalize::detect_salary_column;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn finds_the_single_non_standard_column() {
    let standard = StandardColumns::default();
    for salary_name in ["salary", "rate", "hourly_rate", "pay", "wage"] {
        let row = headers(&["id", "email", "name", "department", "hours_worked", salary_name]);
        assert_eq!(detect_salary_column(&row, &standard), Ok(5), "{salary_name}");
    }

    let reordered = headers(&["department", "Rate", "id", "name", "email", "hours_worked"]);
    assert_eq!(detect_salary_column(&reordered, &standard), Ok(1));
}

#[test]
fn standard_names_match_case_insensitively() {
    let standard = StandardColumns::default();
    let row = headers(&["ID", "Email", "NAME", "Department", "Hours_Worked", "Pay"]);

    assert_eq!(detect_salary_column(&row, &standard), Ok(5));
}

#[test]
fn only_standard_columns_is_a_schema_error() {
    let standard = StandardColumns::default();
    let row = headers(&["id", "email", "name", "department", "hours_worked"]);

    let error = detect_salary_column(&row, &standard).expect_err("no salary column");
    assert!(matches!(error, SchemaError::NoSalaryColumn { headers } if headers.len() == 5));
}

#[test]
fn age_is_a_standard_column() {
    let standard = StandardColumns::default();

    let error = detect_salary_column(&headers(&["name", "age"]), &standard)
        .expect_err("age is not a salary column");
    assert!(matches!(error, SchemaError::NoSalaryColumn { .. }));
}

#[test]
fn blank_header_is_reported_as_empty() {
    let standard = StandardColumns::default();

    assert_eq!(
        detect_salary_column(&headers(&[""]), &standard),
        Err(SchemaError::EmptyHeader)
    );
}

#[test]
fn several_candidates_pick_the_first_in_header_order() {
    let standard = StandardColumns::default();
    let row = headers(&["name", "pay", "department", "bonus", "age"]);

    assert_eq!(detect_salary_column(&row, &standard), Ok(1));
}

#[test]
fn injected_standard_set_changes_the_inference() {
    let standard = StandardColumns::new(["name", "department", "age"]);
    let row = headers(&["age", "name", "compensation", "department"]);

    assert_eq!(detect_salary_column(&row, &standard), Ok(2));
    assert!(detect_salary_column(&headers(&["name", "age"]), &standard).is_err());
}
