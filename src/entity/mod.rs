pub mod attribute_values;
pub mod attributes;
pub mod brands;
pub mod categories;
pub mod product_images;
pub mod product_line_attribute_values;
pub mod product_lines;
pub mod product_type_attributes;
pub mod product_types;
pub mod products;

pub use attribute_values::Entity as AttributeValues;
pub use attributes::Entity as Attributes;
pub use brands::Entity as Brands;
pub use categories::Entity as Categories;
pub use product_images::Entity as ProductImages;
pub use product_line_attribute_values::Entity as ProductLineAttributeValues;
pub use product_lines::Entity as ProductLines;
pub use product_type_attributes::Entity as ProductTypeAttributes;
pub use product_types::Entity as ProductTypes;
pub use products::Entity as Products;
