//! Entity rows to response payloads.

use crate::{
    entity::{attribute_values, brands, product_images, product_lines},
    models::{Brand, Category, ProductImage, ProductLine, Specification},
    tree::CategoryNode,
};

pub fn category_from_node(node: &CategoryNode) -> Category {
    Category {
        category: node.name.clone(),
    }
}

pub fn brand_from_entity(model: brands::Model) -> Brand {
    Brand {
        brand: model.name.clone(),
        name: model.name,
        is_active: model.is_active,
    }
}

pub fn image_from_entity(model: product_images::Model) -> ProductImage {
    ProductImage {
        url: model.url,
        alternative_text: model.alternative_text,
        order: model.order,
    }
}

/// Collapses attribute values into one `attribute id -> value` map.
/// A repeated attribute keeps the last value seen.
pub fn specification<'a>(
    values: impl IntoIterator<Item = &'a attribute_values::Model>,
) -> Specification {
    values
        .into_iter()
        .map(|value| (value.attribute_id, value.value.clone()))
        .collect()
}

pub fn product_line_from_entity(
    model: product_lines::Model,
    product_type: String,
    mut images: Vec<product_images::Model>,
    values: &[attribute_values::Model],
) -> ProductLine {
    images.sort_by_key(|image| image.order);
    ProductLine {
        price: model.price,
        sku: model.sku,
        stock_quantity: model.stock_quantity,
        order: model.order,
        product_type,
        product_image: images.into_iter().map(image_from_entity).collect(),
        specification: specification(values),
    }
}
