use casillero_core::{A1Range, ClientNew, IdentityMatcher};
use casillero_store::repo::Registration;
use casillero_store::Store;

fn store() -> Store {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    store
}

fn client(name: &str, email: &str, phone: &str) -> ClientNew {
    ClientNew {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: "San José".to_string(),
    }
}

#[test]
fn register_then_find_by_email_and_phone() {
    let store = store();
    let range = A1Range::parse("Clientes!A2:H").expect("range");
    let matcher = IdentityMatcher::default();
    let clients = store.clients(&range, &matcher);

    let registration = clients
        .register(client("Ana", "ana@x.com", "+506 8888-8888"))
        .expect("register");
    match registration {
        Registration::Created { row, client } => {
            assert_eq!(row, 2);
            assert_eq!(client.name, "Ana");
            assert_eq!(client.balance, 0.0);
        }
        other => panic!("expected created, got {other:?}"),
    }

    let found = clients.find("ANA@X.COM").expect("find").expect("match");
    assert_eq!(found.position, 2);
    assert_eq!(found.client.contact_phone, "+506 8888-8888");
    assert_eq!(found.row.len(), 8);

    let found = clients.find("8888 8888").expect("find").expect("match");
    assert_eq!(found.client.name, "Ana");

    assert!(clients.find("nobody@x.com").expect("find").is_none());
}

#[test]
fn register_returns_existing_client_instead_of_duplicating() {
    let store = store();
    let range = A1Range::parse("Clientes!A2:H").expect("range");
    let matcher = IdentityMatcher::default();
    let clients = store.clients(&range, &matcher);

    clients
        .register(client("Ana", "ana@x.com", "88888888"))
        .expect("register");
    let again = clients
        .register(client("Ana María", "otra@x.com", "50688888888"))
        .expect("register again");
    match again {
        Registration::Existing { matched } => assert_eq!(matched.client.name, "Ana"),
        other => panic!("expected existing, got {other:?}"),
    }

    let rows = store.workbook().fetch(&range).expect("fetch");
    assert_eq!(rows.len(), 1);
}

#[test]
fn register_unchecked_allows_duplicates() {
    let store = store();
    let range = A1Range::parse("Clientes!A2:H").expect("range");
    let matcher = IdentityMatcher::default();
    let clients = store.clients(&range, &matcher);

    clients
        .register_unchecked(client("Ana", "ana@x.com", ""))
        .expect("first");
    clients
        .register_unchecked(client("Ana", "ana@x.com", ""))
        .expect("second");
    assert_eq!(store.workbook().fetch(&range).expect("fetch").len(), 2);

    let found = clients.find("ana@x.com").expect("find").expect("match");
    assert_eq!(found.position, 2);
}

#[test]
fn match_position_is_the_registered_sheet_row() {
    let store = store();
    let range = A1Range::parse("Clientes!B4:I").expect("range");
    let matcher = IdentityMatcher::default();
    let clients = store.clients(&range, &matcher);

    clients
        .register(client("Luis", "luis@x.com", "77777777"))
        .expect("first");
    let row = match clients
        .register(client("Ana", "ana@x.com", "88888888"))
        .expect("second")
    {
        Registration::Created { row, .. } => row,
        other => panic!("expected created, got {other:?}"),
    };
    assert_eq!(row, 5);

    let found = clients.find("ana@x.com").expect("find").expect("match");
    assert_eq!(found.position, row);

    match clients
        .register(client("Ana B", "", "8888-8888"))
        .expect("again")
    {
        Registration::Existing { matched } => assert_eq!(matched.position, row),
        other => panic!("expected existing, got {other:?}"),
    }
}

#[test]
fn register_requires_name() {
    let store = store();
    let range = A1Range::parse("Clientes!A2:H").expect("range");
    let matcher = IdentityMatcher::default();
    let err = store
        .clients(&range, &matcher)
        .register(client("  ", "x@x.com", ""))
        .unwrap_err();
    assert!(err.to_string().contains("client name is required"));
}

#[test]
fn find_reads_balance_written_by_hand() {
    let store = store();
    let range = A1Range::parse("Clientes!A2:H").expect("range");
    let matcher = IdentityMatcher::default();
    let workbook = store.workbook();
    for (col, value) in ["Ana", "ana@x.com", "", "88888888", "", "", "Addr", "150"]
        .iter()
        .enumerate()
    {
        workbook.set_cell("Clientes", 1, col, value).expect("set");
    }

    let found = store
        .clients(&range, &matcher)
        .find("ana@x.com")
        .expect("find")
        .expect("match");
    assert_eq!(found.client.balance, 150.0);
    assert_eq!(found.client.address, "Addr");
}
