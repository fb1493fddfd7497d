//! Shared fixture models for integration tests

#![allow(dead_code)]

use ormgen_core::types::{FieldType, Modifiers, TypeName};
use ormgen_service::model::{ModelBuilder, ModelRegistry};

pub const SHOP: &str = "com.test.model";
pub const SIMPLE: &str = "com.test.model.simple";

/// Qualified name of a type of the shop model
pub fn shop(simple_name: &str) -> TypeName {
    TypeName::new(format!("{SHOP}.{simple_name}"))
}

/// Qualified name of a type of the course model
pub fn simple(simple_name: &str) -> TypeName {
    TypeName::new(format!("{SIMPLE}.{simple_name}"))
}

/// Install a test subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Web shop model covering every mapping shape
pub fn shop_builder() -> ModelBuilder {
    let s = |name: &str| shop(name);
    let serial = |builder: ormgen_service::model::TypeBuilder| {
        builder.member(
            "serialVersionUID",
            FieldType::plain("long"),
            Modifiers::STATIC | Modifiers::FINAL,
        )
    };

    let builder = ModelBuilder::new()
        .add_type(s("PersistentObject"))
        .abstract_()
        .field("id", "java.lang.Long")
        .finish()
        .add_type(s("LineItem"))
        .extends(s("PersistentObject"))
        .field("orderId", "java.lang.String")
        .field("quantity", "java.math.BigInteger")
        .field("unitPrice", "java.math.BigDecimal")
        .field("item", s("Item"))
        .finish()
        .add_type(s("Item"))
        .field("itemId", "java.lang.String")
        .field("product", s("Product"))
        .field("listPrice", "java.math.BigDecimal")
        .field("unitCost", "java.math.BigDecimal")
        .field("supplier", s("Supplier"))
        .field("quantity", "java.math.BigInteger")
        .field("status", "java.lang.String")
        .collection("attributes", "java.util.List", "java.lang.String")
        .finish()
        .add_type(s("Product"))
        .field("id", "long")
        .field("name", "java.lang.String")
        .field("category", s("Category"))
        .field("labels", "java.util.Map")
        .field("thumbnail", "byte[]")
        .finish();

    let builder = serial(builder.add_type(s("Category")))
        .field("id", "long")
        .field("categoryId", "java.lang.String")
        .field("name", "java.lang.String")
        .field("description", "java.lang.String")
        .collection("associatedProducts", "java.util.List", s("Product"))
        .finish()
        .add_type(s("Supplier"))
        .field("id", "java.lang.Long")
        .field("name", "java.lang.String")
        .finish()
        .add_type(s("Company"))
        .extends(s("Supplier"))
        .field("registrationNumber", "java.lang.String")
        .finish()
        .add_type(s("InternationalCompany"))
        .extends(s("Company"))
        .field("country", "java.lang.String")
        .finish()
        .add_type(s("Address"))
        .field("street", "java.lang.String")
        .field("city", "java.lang.String")
        .field("zip", "java.lang.String")
        .member(
            "log",
            FieldType::plain("org.apache.log4j.Logger"),
            Modifiers::STATIC | Modifiers::TRANSIENT,
        )
        .finish()
        .add_type(s("Account"))
        .field("accountId", "java.lang.String")
        .field("userName", "java.lang.String")
        .field("lastName", "java.lang.String")
        .field("firstName", "java.lang.String")
        .field("homeAddress", s("Address"))
        .raw_collection("anyInfo", "java.util.List")
        .collection("creditCards", "java.util.List", s("CreditCard"))
        .collection("statements", "java.util.List", s("Statement"))
        .derived("fullName")
        .derived("userName")
        .finish()
        .add_type(s("CreditCard"))
        .field("creditCardId", "java.lang.String")
        .field("type", s("CreditCardType"))
        .field("number", "java.lang.String")
        .field("expiration", "java.lang.String")
        .field("billingAddress", s("Address"))
        .finish()
        .add_type(s("CreditCardType"))
        .enumeration()
        .finish()
        .add_type(s("Statement"))
        .field("statementId", s("StatementId"))
        .field("amount", "java.math.BigDecimal")
        .field("date", "java.util.Date")
        .finish();

    serial(builder.add_type(s("StatementId")))
        .field("accountNumber", "java.lang.String")
        .finish()
        .add_type(s("Order"))
        .field("orderId", "java.lang.String")
        .field("account", s("Account"))
        .field("payment", s("CreditCard"))
        .field("shippingMethod", s("ShippingType"))
        .field("status", s("StatusType"))
        .field("totalPrice", "java.math.BigDecimal")
        .collection("lineItems", "java.util.List", s("LineItem"))
        .finish()
        .add_type(s("ShippingType"))
        .enumeration()
        .finish()
        .add_type(s("StatusType"))
        .enumeration()
        .finish()
        .add_type(s("Describable"))
        .interface()
        .finish()
}

pub fn shop_model() -> ModelRegistry {
    shop_builder().build().expect("Test operation failed")
}

/// Two-type course model with a bidirectional association
pub fn simple_model() -> ModelRegistry {
    ModelBuilder::new()
        .add_type(simple("Course"))
        .field("id", "java.lang.Long")
        .field("title", "java.lang.String")
        .collection("students", "java.util.List", simple("Student"))
        .finish()
        .add_type(simple("Student"))
        .field("studentId", "int")
        .field("name", "java.lang.String")
        .field("birthDate", "java.util.Date")
        .field("course", simple("Course"))
        .finish()
        .build()
        .expect("Test operation failed")
}

/// The course model as a YAML model document
pub const SIMPLE_MODEL_YAML: &str = r#"
types:
  - name: com.test.model.simple.Course
    fields:
      - { name: id, type: java.lang.Long }
      - { name: title, type: java.lang.String }
      - { name: students, type: "java.util.List<com.test.model.simple.Student>" }
  - name: com.test.model.simple.Student
    fields:
      - { name: studentId, type: int }
      - { name: name, type: java.lang.String }
      - { name: birthDate, type: java.util.Date }
      - { name: course, type: com.test.model.simple.Course }
"#;

/// Expected document for the course model with default settings
pub const SIMPLE_MODEL_ORM_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<entity-mappings xmlns="http://java.sun.com/xml/ns/persistence/orm" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://java.sun.com/xml/ns/persistence/orm orm_2_0.xsd" version="2.0">
  <persistence-unit-metadata>
    <xml-mapping-metadata-complete/>
    <persistence-unit-defaults>
      <access>PROPERTY</access>
    </persistence-unit-defaults>
  </persistence-unit-metadata>
  <entity class="com.test.model.simple.Course">
    <table name="COURSE"/>
    <attributes>
      <id name="id">
        <generated-value strategy="AUTO"/>
      </id>
      <one-to-many name="students" mapped-by="course"/>
    </attributes>
  </entity>
  <entity class="com.test.model.simple.Student">
    <table name="STUDENT"/>
    <attributes>
      <id name="studentId">
        <generated-value strategy="AUTO"/>
      </id>
      <many-to-one name="course" fetch="LAZY">
        <join-column name="COURSE_ID"/>
      </many-to-one>
    </attributes>
  </entity>
</entity-mappings>
"#;
