pub mod aggregate;
pub mod dto;
pub mod line_item;
pub mod timestamp;

pub use aggregate::{compute_total, Order};
pub use dto::{
    AccompanimentSelection, CustomPizzaSelection, DraftCreated, DraftView, PizzaSelection,
    SubmitOrderRequest, SubmittedOrder,
};
pub use line_item::{
    AccompanimentLine, BundleTag, CustomPizzaLine, DrinkLine, OrderLineItem, PizzaLine,
    PromotionLine,
};
pub use timestamp::OrderTimestamp;
