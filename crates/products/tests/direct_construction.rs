use forgecatalog_products::{Product, ProductCatalog};

#[test]
fn direct_construction_installs_the_shared_catalog() {
    let catalog = ProductCatalog::try_new().expect("no catalog exists yet");
    assert!(catalog.is_empty());
    assert!(std::ptr::eq(catalog, ProductCatalog::get_instance()));

    catalog.add(Product::food("Pizza", 15.0));
    assert_eq!(ProductCatalog::get_instance().all(), vec![Product::food("Pizza", 15.0)]);

    let err = ProductCatalog::try_new().unwrap_err();
    assert!(err.type_name().ends_with("ProductCatalog"));
    assert_eq!(ProductCatalog::get_instance().len(), 1);
}
