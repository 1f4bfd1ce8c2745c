use casillero_core::A1Range;
use casillero_store::error::StoreErrorKind;
use casillero_store::Store;

fn store() -> Store {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    store
}

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn range(raw: &str) -> A1Range {
    A1Range::parse(raw).expect("range")
}

#[test]
fn append_starts_at_range_start_and_grows_downward() {
    let store = store();
    let workbook = store.workbook();
    let clients = range("Clientes!A2:H");

    let first = workbook
        .append(&clients, &cells(&["Ana", "ana@x.com"]))
        .expect("append first");
    let second = workbook
        .append(&clients, &cells(&["Luis", "luis@x.com"]))
        .expect("append second");
    assert_eq!(first, 2);
    assert_eq!(second, 3);

    let grid = workbook.fetch(&clients).expect("fetch");
    assert_eq!(grid.len(), 2);
    assert_eq!(grid[0], cells(&["Ana", "ana@x.com"]));
    assert_eq!(grid[1][0], "Luis");
}

#[test]
fn append_never_writes_above_the_range() {
    let store = store();
    let workbook = store.workbook();
    workbook.set_cell("Clientes", 0, 0, "Nombre").expect("header");

    let row = workbook
        .append(&range("Clientes!A5:B"), &cells(&["Ana"]))
        .expect("append");
    assert_eq!(row, 5);
}

#[test]
fn append_rejects_rows_wider_than_range() {
    let store = store();
    let err = store
        .workbook()
        .append(&range("Trackings!A2:B"), &cells(&["a", "b", "c"]))
        .unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::RowTooWide);
}

#[test]
fn fetch_is_sparse_and_anchored_at_range_origin() {
    let store = store();
    let workbook = store.workbook();
    workbook.set_cell("Direcciones", 2, 1, "Calle 5").expect("set");
    workbook.set_cell("Direcciones", 2, 3, "Apt 3").expect("set");
    workbook.set_cell("Direcciones", 9, 9, "outside").expect("set");

    let grid = workbook.fetch(&range("Direcciones!B2:D5")).expect("fetch");
    assert_eq!(grid.len(), 2);
    assert!(grid[0].is_empty());
    assert_eq!(grid[1], cells(&["Calle 5", "", "Apt 3"]));
}

#[test]
fn fetch_of_missing_sheet_is_empty() {
    let store = store();
    let grid = store
        .workbook()
        .fetch(&range("Nada!A1:C"))
        .expect("fetch");
    assert!(grid.is_empty());
}

#[test]
fn set_cell_with_empty_value_clears() {
    let store = store();
    let workbook = store.workbook();
    workbook.set_cell("Hoja", 0, 0, "x").expect("set");
    workbook.set_cell("Hoja", 0, 0, "").expect("clear");
    assert!(workbook.fetch(&range("Hoja!A1:A")).expect("fetch").is_empty());
}
