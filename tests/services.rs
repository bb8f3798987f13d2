use restorify::domain::listing::Listing;
use restorify::forms::feedback::AddFeedbackForm;
use restorify::forms::raw_materials::{AddRawMaterialForm, EditRawMaterialForm};
use restorify::repository::DieselRepository;
use restorify::services::feedback::{create_feedback, load_feedback_page};
use restorify::services::main::load_home_page;
use restorify::services::raw_materials::{
    create_raw_material, export_raw_materials, modify_raw_material,
};
use restorify::services::suppliers::remove_supplier;
use restorify::services::{Action, EntityQuery, ServiceError};

mod common;

#[test]
fn test_home_page_counts_seeded_rows() {
    let test_db = common::TestDb::seeded("test_home_page_counts_seeded_rows.db");
    let repo = DieselRepository::new(test_db.pool());

    let data = load_home_page(&repo).unwrap();

    assert_eq!(data.sections.len(), 8);
    assert!(data.sections.iter().all(|section| section.rows == 5));
}

#[test]
fn test_feedback_page_offers_people_and_preselects_row() {
    let test_db = common::TestDb::seeded("test_feedback_page_offers_people.db");
    let repo = DieselRepository::new(test_db.pool());

    let page = load_feedback_page(
        &repo,
        EntityQuery {
            action: Some(Action::Perbarui),
            id: Some("F002".to_string()),
        },
    )
    .unwrap();

    assert_eq!(page.action, Action::Perbarui);
    assert_eq!(page.options.len(), 5);
    assert_eq!(page.references["customers"][0].label, "P001 - Mansur");
    assert_eq!(page.references["employees"][2].label, "K003 - Budi Santoso");
    assert_eq!(page.selected.map(|row| row.rating), Some(4));
}

#[test]
fn test_feedback_form_rejects_unknown_customer() {
    let test_db = common::TestDb::seeded("test_feedback_form_rejects_unknown_customer.db");
    let repo = DieselRepository::new(test_db.pool());

    let form = AddFeedbackForm {
        id: Some("F006".to_string()),
        customer_id: Some("P404".to_string()),
        date: Some("2024-04-06".to_string()),
        rating: Some("5".to_string()),
        comment: Some("Mantap".to_string()),
        ..Default::default()
    };

    let err = create_feedback(&repo, form).expect_err("expected dangling customer to fail");
    assert!(matches!(err, ServiceError::Reference(_)));
}

#[test]
fn test_raw_material_flow() {
    let test_db = common::TestDb::new("test_raw_material_flow.db");
    let repo = DieselRepository::new(test_db.pool());

    assert!(matches!(
        export_raw_materials(&repo),
        Err(ServiceError::NoData)
    ));

    let form = AddRawMaterialForm {
        id: Some(" B010 ".to_string()),
        name: Some("Garam".to_string()),
        stock: Some("10".to_string()),
        unit: Some("kg".to_string()),
        unit_price: Some("8000".to_string()),
        supplier_id: None,
    };
    let material = create_raw_material(&repo, form).unwrap();
    assert_eq!(material.id, "B010");

    let duplicate = AddRawMaterialForm {
        id: Some("B010".to_string()),
        name: Some("Garam Halus".to_string()),
        stock: Some("1".to_string()),
        unit: Some("kg".to_string()),
        unit_price: Some("9000".to_string()),
        supplier_id: None,
    };
    assert!(matches!(
        create_raw_material(&repo, duplicate),
        Err(ServiceError::Conflict)
    ));

    let nothing = EditRawMaterialForm {
        id: Some("B010".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        modify_raw_material(&repo, nothing),
        Err(ServiceError::NothingToUpdate)
    ));

    let edit = EditRawMaterialForm {
        id: Some("B010".to_string()),
        stock: Some("42".to_string()),
        ..Default::default()
    };
    let material = modify_raw_material(&repo, edit).unwrap();
    assert_eq!(material.stock, 42);

    let export = export_raw_materials(&repo).unwrap();
    assert_eq!(export.file_name, "daftar_bahan_baku.csv");
}

#[test]
fn test_referenced_supplier_cannot_be_removed() {
    let test_db = common::TestDb::seeded("test_referenced_supplier_cannot_be_removed.db");
    let repo = DieselRepository::new(test_db.pool());

    let err = remove_supplier(&repo, "S001").expect_err("expected restrict");
    assert!(matches!(err, ServiceError::Reference(_)));

    assert!(matches!(
        remove_supplier(&repo, "S404"),
        Err(ServiceError::NotFound)
    ));
}

#[test]
fn test_empty_listing_reports_no_data() {
    let test_db = common::TestDb::new("test_empty_listing_reports_no_data.db");
    let repo = DieselRepository::new(test_db.pool());

    let page = load_feedback_page(&repo, EntityQuery::default()).unwrap();

    assert_eq!(page.action, Action::Lihat);
    assert!(matches!(page.listing, Listing::NoData));
    assert!(page.references["customers"].is_empty());
}
