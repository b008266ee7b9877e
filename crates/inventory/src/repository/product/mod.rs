mod command;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;

use crate::model::product::Product as ProductModel;
use shared::errors::RepositoryError;
use sqlx::PgConnection;

/// Upsert shared by the command repository and the stock unit of work.
pub(crate) async fn upsert_product(
    conn: &mut PgConnection,
    product: &ProductModel,
) -> Result<ProductModel, RepositoryError> {
    let saved = sqlx::query_as::<_, ProductModel>(
        r#"
        INSERT INTO products (id, name, description, price, quantity, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, CURRENT_TIMESTAMP)
        ON CONFLICT (id) DO UPDATE
        SET name = EXCLUDED.name,
            description = EXCLUDED.description,
            price = EXCLUDED.price,
            quantity = EXCLUDED.quantity,
            status = EXCLUDED.status,
            updated_at = CURRENT_TIMESTAMP
        RETURNING id, name, description, price, quantity, status, created_at, updated_at
        "#,
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.quantity)
    .bind(&product.status)
    .bind(product.created_at)
    .fetch_one(conn)
    .await?;

    Ok(saved)
}
