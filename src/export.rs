use serde::Serialize;
use serde_json::{Value, json};

use crate::model::PlacementResult;

/// Serialize a run as a JSON object `{ canvas, outcomes, stats }`.
///
/// Each outcome record carries `placed`, the item's `payload` and `diameter`,
/// and (when placed) a `rect` of `{x, y, w, h}`. Order matches input order, so
/// a renderer can zip the records back onto its own item list.
pub fn to_json<P: Serialize>(result: &PlacementResult<P>) -> Value {
    let outcomes_val: Vec<Value> = result
        .outcomes
        .iter()
        .map(|o| {
            let item = o.item();
            let mut rec = json!({
                "placed": o.is_placed(),
                "payload": &item.payload,
                "diameter": item.diameter,
            });
            if let Some(r) = o.rect() {
                rec["rect"] = json!({
                    "x": r.origin.x,
                    "y": r.origin.y,
                    "w": r.size.width,
                    "h": r.size.height,
                });
            }
            rec
        })
        .collect();
    json!({
        "canvas": {"width": result.canvas.width, "height": result.canvas.height},
        "outcomes": outcomes_val,
        "stats": result.stats(),
    })
}
