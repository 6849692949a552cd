use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
    TransactionTrait,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::entities::{
    cart::{self, Entity as CartEntity},
    frame_option, paper_type, print, print_size,
};
use crate::middleware::auth::Claims;
use crate::pricing;

//ROUTERS
pub fn cart_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/cart", get(get_cart).post(add_line_item))
        .route("/cart/:id", patch(patch_entry).delete(remove_line_item))
        .layer(Extension(db))
}

//One cart line joined with everything needed to re-derive its price.
//Unit price is intentionally never persisted; it falls out of the catalog
//columns on every read.
#[derive(Debug, FromQueryResult)]
pub(crate) struct CartLineRow {
    pub(crate) id: i32,
    pub(crate) quantity: u32,
    pub(crate) title: String,
    pub(crate) image_url: String,
    pub(crate) base_price: f64,
    pub(crate) size_name: String,
    pub(crate) size_modifier: f64,
    pub(crate) paper_name: String,
    pub(crate) paper_modifier: f64,
    pub(crate) frame_name: String,
    pub(crate) frame_modifier: f64,
}

impl CartLineRow {
    pub(crate) fn unit_price(&self) -> f64 {
        pricing::unit_price(
            self.base_price,
            self.size_modifier,
            self.paper_modifier,
            self.frame_modifier,
        )
    }

    pub(crate) fn line_total(&self) -> f64 {
        pricing::line_total(self.unit_price(), self.quantity)
    }
}

//Cart id order is insertion order, which is the display order.
pub(crate) async fn load_cart_lines<C>(
    conn: &C,
    session_id: &str,
) -> Result<Vec<CartLineRow>, DbErr>
where
    C: ConnectionTrait,
{
    CartEntity::find()
        .filter(cart::Column::SessionId.eq(session_id))
        .join(JoinType::InnerJoin, cart::Relation::Print.def())
        .join(JoinType::InnerJoin, cart::Relation::Size.def())
        .join(JoinType::InnerJoin, cart::Relation::Paper.def())
        .join(JoinType::InnerJoin, cart::Relation::Frame.def())
        .select_only()
        .column_as(cart::Column::Id, "id")
        .column_as(cart::Column::Quantity, "quantity")
        .column_as(print::Column::Title, "title")
        .column_as(print::Column::ImageUrl, "image_url")
        .column_as(print::Column::BasePrice, "base_price")
        .column_as(print_size::Column::Name, "size_name")
        .column_as(print_size::Column::PriceModifier, "size_modifier")
        .column_as(paper_type::Column::Name, "paper_name")
        .column_as(paper_type::Column::PriceModifier, "paper_modifier")
        .column_as(frame_option::Column::Name, "frame_name")
        .column_as(frame_option::Column::PriceModifier, "frame_modifier")
        .order_by_asc(cart::Column::Id)
        .into_model::<CartLineRow>()
        .all(conn)
        .await
}

//ROUTES
async fn get_cart(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Extension(claims): Extension<Claims>,
) -> impl IntoResponse {
    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            );
        }
    };

    let lines = match load_cart_lines(&txn, &claims.sub).await {
        Ok(lines) => lines,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error."
                })),
            );
        }
    };

    let line_totals: Vec<f64> = lines.iter().map(CartLineRow::line_total).collect();
    let subtotal = pricing::subtotal(&line_totals);

    let items: Vec<serde_json::Value> = lines
        .iter()
        .map(|line| {
            json!({
                "id": line.id,
                "title": line.title,
                "image_url": line.image_url,
                "size": line.size_name,
                "paper": line.paper_name,
                "frame": line.frame_name,
                "quantity": line.quantity,
                "unit_price": line.unit_price(),
                "line_total": line.line_total(),
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "items": items,
            "totals": {
                "subtotal": subtotal,
                "shipping_fee": pricing::shipping_fee(subtotal),
                "grand_total": pricing::grand_total(subtotal),
            }
        })),
    )
}

async fn add_line_item(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<AddLineItem>,
) -> impl IntoResponse {
    let session_id = claims.sub;
    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            );
        }
    };

    if payload.quantity == 0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Quantity should be greater than 0"
            })),
        );
    }

    //The configuration has to reference real catalog rows before anything
    //is written.
    match print::Entity::find_by_id(payload.print_id)
        .filter(print::Column::IsAvailable.eq(true))
        .one(&txn)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("No print with {} id was found", payload.print_id)
                })),
            );
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error."
                })),
            );
        }
    }

    match print_size::Entity::find_by_id(&payload.size_id).one(&txn).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("No size with '{}' id was found", payload.size_id)
                })),
            );
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error."
                })),
            );
        }
    }

    match paper_type::Entity::find_by_id(&payload.paper_id).one(&txn).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("No paper with '{}' id was found", payload.paper_id)
                })),
            );
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error."
                })),
            );
        }
    }

    match frame_option::Entity::find_by_id(&payload.frame_id).one(&txn).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("No frame with '{}' id was found", payload.frame_id)
                })),
            );
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error."
                })),
            );
        }
    }

    //Same configuration already in the cart: expand it instead of creating
    //a second entry.
    if let Ok(Some(entry)) = CartEntity::find()
        .filter(cart::Column::SessionId.eq(&session_id))
        .filter(cart::Column::PrintId.eq(payload.print_id))
        .filter(cart::Column::SizeId.eq(&payload.size_id))
        .filter(cart::Column::PaperId.eq(&payload.paper_id))
        .filter(cart::Column::FrameId.eq(&payload.frame_id))
        .one(&txn)
        .await
    {
        //Quantities are shopper input; a merge must never overflow into a
        //wrapped (possibly zero) quantity.
        let merged = entry.quantity.saturating_add(payload.quantity);
        let mut entry: cart::ActiveModel = entry.into();
        entry.quantity = Set(merged);
        let result = entry.update(&txn).await.map(|_| ());
        return match result {
            Ok(_) => match txn.commit().await {
                Ok(_) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Resource patched successfully"
                    })),
                ),
                Err(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error"
                    })),
                ),
            },
            Err(_) => {
                let _ = txn.rollback().await;
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Failed to patch this resource"
                    })),
                )
            }
        };
    };

    let new_entry = cart::ActiveModel {
        session_id: Set(session_id),
        print_id: Set(payload.print_id),
        size_id: Set(payload.size_id),
        paper_id: Set(payload.paper_id),
        frame_id: Set(payload.frame_id),
        quantity: Set(payload.quantity),
        ..Default::default()
    };
    match CartEntity::insert(new_entry).exec(&txn).await {
        Ok(_) => match txn.commit().await {
            Ok(_) => (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Added successfully"
                })),
            ),
            Err(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            ),
        },
        Err(_) => {
            let _ = txn.rollback().await;
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            )
        }
    }
}

async fn patch_entry(
    Path(id): Path<i32>,
    Extension(claims): Extension<Claims>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchCart>,
) -> impl IntoResponse {
    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            );
        }
    };

    //A line item never holds a non-positive quantity; requests below the
    //minimum are clamped to 1 instead of deleting the entry.
    let quantity = payload.quantity.max(1);

    match CartEntity::find_by_id(id)
        .filter(cart::Column::SessionId.eq(&claims.sub))
        .one(&txn)
        .await
    {
        Ok(Some(entry)) => {
            let mut entry: cart::ActiveModel = entry.into();
            entry.quantity = Set(quantity);
            match entry.update(&txn).await {
                Ok(_) => {
                    let _ = txn.commit().await;
                    (
                        StatusCode::OK,
                        Json(json!({
                            "message": "Resource patched successfully"
                        })),
                    )
                }
                Err(_) => {
                    let _ = txn.rollback().await;
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({
                            "error": "Failed to patch this resource"
                        })),
                    )
                }
            }
        }
        //Unknown id is not an error, there is just nothing to update.
        Ok(None) => (
            StatusCode::OK,
            Json(json!({
                "message": "Nothing to patch"
            })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error."
            })),
        ),
    }
}

async fn remove_line_item(
    Path(id): Path<i32>,
    Extension(claims): Extension<Claims>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            );
        }
    };

    //Removing an absent entry is a success no-op; the cart is left exactly
    //as it was.
    let result = CartEntity::delete_many()
        .filter(cart::Column::Id.eq(id))
        .filter(cart::Column::SessionId.eq(&claims.sub))
        .exec(&txn)
        .await;

    match result {
        Ok(_) => {
            let _ = txn.commit().await;
            (
                StatusCode::OK,
                Json(json!({
                    "message": "Resource deleted successfully"
                })),
            )
        }
        Err(_) => {
            let _ = txn.rollback().await;
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error."
                })),
            )
        }
    }
}

//Structs
#[derive(Deserialize, Debug)]
struct AddLineItem {
    print_id: i32,
    size_id: String,
    paper_id: String,
    frame_id: String,
    quantity: u32,
}

#[derive(Deserialize)]
struct PatchCart {
    quantity: u32,
}
