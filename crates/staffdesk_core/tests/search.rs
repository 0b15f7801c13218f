use chrono::NaiveDate;
use staffdesk_core::db::open_db_in_memory;
use staffdesk_core::{Employee, EmployeeDraft, EmployeeRepository, SqliteEmployeeRepository};

fn draft(name: &str, position: &str, department: &str, review: &str) -> EmployeeDraft {
    EmployeeDraft::new(
        name,
        position,
        department,
        NaiveDate::from_ymd_opt(2021, 6, 15).unwrap(),
        review,
    )
}

fn seed(repo: &SqliteEmployeeRepository<'_>) {
    for entry in [
        draft("Ann", "Engineer", "R&D", "Good"),
        draft("Bo", "Manager", "Sales", "Excellent engineer mentor"),
        draft("Joanna", "Designer", "Marketing", ""),
        draft("Cy", "Sales Engineer", "Field_Ops", "100% on target"),
    ] {
        repo.create_employee(&entry).unwrap();
    }
}

fn names(employees: &[Employee]) -> Vec<&str> {
    employees.iter().map(|employee| employee.name.as_str()).collect()
}

#[test]
fn search_matches_name_position_or_department_substrings() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    seed(&repo);

    assert_eq!(names(&repo.search_employees("ann").unwrap()), ["Ann", "Joanna"]);
    assert_eq!(names(&repo.search_employees("Engineer").unwrap()), ["Ann", "Cy"]);
    assert_eq!(names(&repo.search_employees("Sales").unwrap()), ["Bo", "Cy"]);
}

#[test]
fn search_ignores_performance_review_text() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    seed(&repo);

    assert!(repo.search_employees("mentor").unwrap().is_empty());
    assert!(repo.search_employees("100%").unwrap().is_empty());
}

#[test]
fn empty_term_returns_every_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    seed(&repo);

    assert_eq!(
        repo.search_employees("").unwrap(),
        repo.list_employees().unwrap()
    );
}

#[test]
fn wildcard_characters_are_matched_literally() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    seed(&repo);

    assert_eq!(names(&repo.search_employees("_").unwrap()), ["Cy"]);
    assert_eq!(names(&repo.search_employees("d_O").unwrap()), ["Cy"]);
    assert!(repo.search_employees("%").unwrap().is_empty());
    assert!(repo.search_employees("R_D").unwrap().is_empty());
}

#[test]
fn search_equals_substring_filter_over_list_all() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    seed(&repo);

    for term in ["a", "er", "Mar", "&", "x", "Sales Eng"] {
        let needle = term.to_ascii_lowercase();
        let expected: Vec<_> = repo
            .list_employees()
            .unwrap()
            .into_iter()
            .filter(|employee| {
                [&employee.name, &employee.position, &employee.department]
                    .iter()
                    .any(|field| field.to_ascii_lowercase().contains(&needle))
            })
            .collect();
        assert_eq!(repo.search_employees(term).unwrap(), expected, "term `{term}`");
    }
}
