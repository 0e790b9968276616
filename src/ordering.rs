//! Scoped auto-incrementing `order` columns.
//!
//! An [`OrderField`] names an integer column and the column it is unique
//! for. Rows inserted without an explicit order get `max + 1` among their
//! siblings (rows sharing the scope value), or `1` for the first sibling.
//! Explicit values are checked against every sibling before the write.

use std::str::FromStr;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityName, EntityTrait, IntoActiveModel, Iterable, ModelTrait, PrimaryKeyToColumn,
    QueryFilter, QuerySelect, Value,
};
use thiserror::Error;

/// Declaration of an ordering column, checked against its entity by
/// [`OrderField::bind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderField {
    pub column: &'static str,
    pub unique_for: Option<&'static str>,
}

/// Entities carrying an ordering column.
pub trait OrderedEntity: EntityTrait {
    const ORDER_FIELD: OrderField;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldCheckError {
    #[error("{table}: order field `{column}` must define a unique_for field")]
    MissingUniqueFor { table: String, column: String },

    #[error("{table}: order column `{column}` does not exist")]
    UnknownColumn { table: String, column: String },

    #[error("{table}: unique_for field `{field}` does not exist")]
    UnknownUniqueFor { table: String, field: String },
}

#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Config(#[from] FieldCheckError),

    #[error("{0} is required")]
    MissingScope(String),

    #[error("Duplicate value.")]
    Duplicate { value: i64 },

    #[error("No order value left after {max}.")]
    Overflow { max: i32 },

    #[error(transparent)]
    Db(#[from] DbErr),
}

/// An [`OrderField`] resolved to the typed columns of `E`.
#[derive(Debug, Clone, Copy)]
pub struct BoundOrderField<E: EntityTrait> {
    pub order: E::Column,
    pub scope: E::Column,
}

impl OrderField {
    pub const fn new(column: &'static str, unique_for: Option<&'static str>) -> Self {
        Self { column, unique_for }
    }

    pub fn bind<E: EntityTrait>(&self) -> Result<BoundOrderField<E>, FieldCheckError> {
        let table = E::default().table_name().to_owned();
        let unique_for = self.unique_for.ok_or_else(|| FieldCheckError::MissingUniqueFor {
            table: table.clone(),
            column: self.column.to_owned(),
        })?;
        let order =
            E::Column::from_str(self.column).map_err(|_| FieldCheckError::UnknownColumn {
                table: table.clone(),
                column: self.column.to_owned(),
            })?;
        let scope = E::Column::from_str(unique_for).map_err(|_| {
            FieldCheckError::UnknownUniqueFor {
                table,
                field: unique_for.to_owned(),
            }
        })?;
        Ok(BoundOrderField { order, scope })
    }
}

/// Validates the declaration of `E` without touching the database.
pub fn check<E: OrderedEntity>() -> Result<(), FieldCheckError> {
    E::ORDER_FIELD.bind::<E>().map(|_| ())
}

/// Next free order value among rows whose scope column equals `scope`.
pub async fn next_order<E, C>(
    db: &C,
    field: &BoundOrderField<E>,
    scope: Value,
) -> Result<i32, OrderError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let current: Option<Option<i32>> = E::find()
        .select_only()
        .column_as(field.order.max(), "max_order")
        .filter(field.scope.eq(scope))
        .into_tuple()
        .one(db)
        .await?;

    match current.flatten() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(OrderError::Overflow { max }),
    }
}

/// Fills in or validates the order value of `model` ahead of a write.
///
/// `insert` distinguishes a new row (missing order is assigned) from an
/// update (missing order means the stored value stays as it is).
pub async fn prepare<A, C>(db: &C, model: &mut A, insert: bool) -> Result<(), OrderError>
where
    A: ActiveModelTrait + Send,
    A::Entity: OrderedEntity,
    C: ConnectionTrait,
{
    let field = <A::Entity as OrderedEntity>::ORDER_FIELD.bind::<A::Entity>()?;

    let explicit = match model.get(field.order) {
        ActiveValue::NotSet | ActiveValue::Unchanged(_) if !insert => return Ok(()),
        ActiveValue::NotSet => None,
        value => value.into_value().as_ref().and_then(integer),
    };

    // Scope columns are integer foreign keys; a null scope cannot be ordered.
    let scope = model
        .get(field.scope)
        .into_value()
        .filter(|value| integer(value).is_some())
        .ok_or_else(|| {
            OrderError::MissingScope(
                <A::Entity as OrderedEntity>::ORDER_FIELD
                    .unique_for
                    .unwrap_or_default()
                    .to_owned(),
            )
        })?;

    match explicit {
        Some(value) => ensure_unique(db, model, &field, scope, value).await,
        None => {
            let next = next_order(db, &field, scope).await?;
            tracing::debug!(
                table = %<A::Entity as Default>::default().table_name(),
                order = next,
                "assigned order"
            );
            model.set(field.order, next.into());
            Ok(())
        }
    }
}

async fn ensure_unique<A, C>(
    db: &C,
    model: &A,
    field: &BoundOrderField<A::Entity>,
    scope: Value,
    value: i64,
) -> Result<(), OrderError>
where
    A: ActiveModelTrait,
    C: ConnectionTrait,
{
    let pk_column = <A::Entity as EntityTrait>::PrimaryKey::iter()
        .next()
        .map(|pk| pk.into_column());
    let own_pk = pk_column.and_then(|column| model.get(column).into_value());

    let siblings = A::Entity::find()
        .filter(field.scope.eq(scope))
        .all(db)
        .await?;

    for sibling in siblings {
        let sibling_pk = pk_column.map(|column| sibling.get(column));
        if own_pk.is_some() && sibling_pk == own_pk {
            continue;
        }
        if integer(&sibling.get(field.order)) == Some(value) {
            return Err(OrderError::Duplicate { value });
        }
    }
    Ok(())
}

/// Assigns or validates the order value, then inserts.
pub async fn insert_ordered<A, C>(
    db: &C,
    mut model: A,
) -> Result<<A::Entity as EntityTrait>::Model, OrderError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    A::Entity: OrderedEntity,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    prepare(db, &mut model, true).await?;
    Ok(model.insert(db).await?)
}

/// Validates a changed order value, then updates.
pub async fn update_ordered<A, C>(
    db: &C,
    mut model: A,
) -> Result<<A::Entity as EntityTrait>::Model, OrderError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    A::Entity: OrderedEntity,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    prepare(db, &mut model, false).await?;
    Ok(model.update(db).await?)
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::TinyInt(v) => v.map(i64::from),
        Value::SmallInt(v) => v.map(i64::from),
        Value::Int(v) => v.map(i64::from),
        Value::BigInt(v) => *v,
        Value::TinyUnsigned(v) => v.map(i64::from),
        Value::SmallUnsigned(v) => v.map(i64::from),
        Value::Unsigned(v) => v.map(i64::from),
        Value::BigUnsigned(v) => v.and_then(|v| i64::try_from(v).ok()),
        _ => None,
    }
}
