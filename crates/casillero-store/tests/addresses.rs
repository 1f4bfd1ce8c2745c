use casillero_core::{A1Range, AddressLayout};
use casillero_store::Store;

#[test]
fn render_substitutes_client_name_in_every_block() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    let workbook = store.workbook();
    workbook
        .set_cell("Direcciones", 0, 0, "[NOMBRE]")
        .expect("set");
    workbook
        .set_cell("Direcciones", 1, 0, "8000 NW 25th St")
        .expect("set");
    workbook
        .set_cell("Direcciones", 1, 1, "Suite 100")
        .expect("set");
    workbook
        .set_cell("Direcciones", 16, 4, "Madrid - [NOMBRE]")
        .expect("set");

    let range = A1Range::parse("Direcciones!A1:G23").expect("range");
    let layout = AddressLayout::default();
    let addresses = store.addresses(&range, &layout);

    let blocks = addresses.render("Ana Mora").expect("render");
    assert_eq!(blocks.len(), 6);
    assert_eq!(blocks[0].text, "Ana Mora\n8000 NW 25th St Suite 100");
    assert_eq!(blocks[5].key, "espana");
    assert_eq!(blocks[5].text, "Madrid - Ana Mora");
    assert!(blocks[2].text.is_empty());

    let block = addresses
        .block("miami_aereo", "Luis")
        .expect("block")
        .expect("region");
    assert!(block.text.starts_with("Luis\n"));
    assert!(addresses.block("japon", "Luis").expect("block").is_none());
}
