//! End-to-end register workflow over the demo inventory.
//!
//! Drives the register the way the console client does: seed from the demo
//! fixture set, then walk through lookup, stock adjustment, discounting,
//! price management, and the replenishment report, checking the documented
//! ordering and copy-semantics contracts along the way.

use testresult::TestResult;

use stockroom::{
    categories::Category,
    fixtures::InventoryFixture,
    items::Item,
    register::{ItemRegister, RegisterError},
};

fn demo_register() -> Result<ItemRegister, Box<dyn std::error::Error>> {
    Ok(InventoryFixture::from_set("demo")?.build_register()?)
}

#[test]
fn seeded_register_supports_the_full_stock_lifecycle() -> TestResult {
    let mut register = demo_register()?;

    assert_eq!(register.len(), 6);

    // Receive a delivery, then ship most of it out.
    assert!(register.increase_storage("24gh", 10)?);
    assert!(register.decrease_storage("24GH ", 25)?);

    let laminate = register
        .item_by_number("24GH")
        .ok_or("expected 24GH in the demo set")?;

    assert_eq!(laminate.amount_in_storage(), 15);

    // Shipping more than is left fails atomically.
    let result = register.decrease_storage("24GH", 16);
    assert!(result.is_err(), "over-shipment must be rejected");

    let laminate = register
        .item_by_number("24GH")
        .ok_or("expected 24GH in the demo set")?;

    assert_eq!(laminate.amount_in_storage(), 15);

    Ok(())
}

#[test]
fn discount_lifecycle_restores_the_pre_discount_price() -> TestResult {
    let mut register = demo_register()?;

    // 60% off 2000 rounds to 800.
    assert!(register.add_discount("24GH", 60)?);

    let laminate = register
        .item_by_number("24GH")
        .ok_or("expected 24GH in the demo set")?;

    assert_eq!(laminate.price(), 800);

    // A second discount compounds on the discounted price but keeps the
    // original baseline.
    assert!(register.add_discount("24GH", 50)?);

    let laminate = register
        .item_by_number("24GH")
        .ok_or("expected 24GH in the demo set")?;

    assert_eq!(laminate.price(), 400);

    assert!(register.reset_price_to_before_discount("24GH")?);

    let laminate = register
        .item_by_number("24GH")
        .ok_or("expected 24GH in the demo set")?;

    assert_eq!(laminate.price(), 2000);
    assert!(!register.reset_price_to_before_discount("24GH")?);

    Ok(())
}

#[test]
fn direct_price_change_discharges_an_active_discount() -> TestResult {
    let mut register = demo_register()?;

    register.add_discount("32VD", 25)?;
    assert!(register.change_price("32VD", 1800)?);

    let window = register
        .item_by_number("32VD")
        .ok_or("expected 32VD in the demo set")?;

    assert_eq!(window.price(), 1800);
    assert!(
        !register.reset_price_to_before_discount("32VD")?,
        "a direct price change must clear the discount baseline"
    );

    Ok(())
}

#[test]
fn removal_and_re_registration_starts_from_a_clean_slate() -> TestResult {
    let mut register = demo_register()?;

    register.add_discount("12TL", 10)?;

    assert!(register.remove_item("12tl"));
    assert_eq!(register.item_by_number("12TL"), None);
    assert!(!register.remove_item("12TL"));

    register.register_item(
        "12TL",
        "Wood fiber insulation, new supplier",
        449,
        "Hunton",
        3.4,
        2.0,
        5.5,
        "Light brown",
        40,
        4,
    )?;

    assert!(
        !register.reset_price_to_before_discount("12TL")?,
        "the old baseline must not survive removal"
    );

    Ok(())
}

#[test]
fn duplicate_registration_is_rejected_for_any_case_variant() -> TestResult {
    let mut register = demo_register()?;

    let result = register.register_item(
        " 42ds ",
        "Outer door with glass",
        6500,
        "Nordic Door",
        12.0,
        1.2,
        2.2,
        "White",
        23,
        3,
    );

    assert!(matches!(
        result,
        Err(RegisterError::DuplicateItemNumber(_))
    ));
    assert_eq!(register.len(), 6);

    Ok(())
}

#[test]
fn category_listing_is_ordered_by_descending_price() -> TestResult {
    let register = demo_register()?;

    let doors = register.items_by_category(Category::Doors);
    let numbers: Vec<&str> = doors.iter().map(Item::item_number).collect();

    assert_eq!(numbers, ["42DS", "40DS"]);

    let laminates = register.items_by_category(Category::FloorLaminates);
    let numbers: Vec<&str> = laminates.iter().map(Item::item_number).collect();

    assert_eq!(numbers, ["24GH", "20GH"]);

    Ok(())
}

#[test]
fn replenishment_report_lists_empty_stock_by_category_name() -> TestResult {
    let register = demo_register()?;

    let restock = register.items_needing_restock();
    let numbers: Vec<&str> = restock.iter().map(Item::item_number).collect();

    // The demo set has one empty door (Doors) and one empty laminate
    // (Floor laminates); "Doors" sorts first.
    assert_eq!(numbers, ["40DS", "20GH"]);

    Ok(())
}

#[test]
fn full_render_concatenates_items_by_category_name() -> TestResult {
    let register = demo_register()?;

    let rendered = register.to_string();

    let positions: Vec<usize> = ["42DS", "24GH", "12TL", "32VD"]
        .iter()
        .map(|number| rendered.find(number).ok_or(format!("{number} missing")))
        .collect::<Result<_, _>>()?;

    assert!(
        positions.is_sorted(),
        "Doors, Floor laminates, Lumber, Windows must render in that order"
    );

    Ok(())
}

#[test]
fn returned_items_never_alias_register_state() -> TestResult {
    let mut register = demo_register()?;

    let mut copy = register
        .item_by_number("32VD")
        .ok_or("expected 32VD in the demo set")?;

    copy.set_price(1)?;
    copy.set_amount_in_storage(0)?;

    let stored = register
        .item_by_number("32VD")
        .ok_or("expected 32VD in the demo set")?;

    assert_eq!(stored.price(), 1600);
    assert_eq!(stored.amount_in_storage(), 15);

    // Mutating listing results must not leak back either.
    let mut windows = register.items_by_category(Category::Windows);

    if let Some(window) = windows.first_mut() {
        window.set_price(2)?;
    }

    let stored = register
        .item_by_number("32VD")
        .ok_or("expected 32VD in the demo set")?;

    assert_eq!(stored.price(), 1600);

    // And the register still accepts real mutations afterwards.
    assert!(register.change_price("32VD", 1700)?);

    Ok(())
}
