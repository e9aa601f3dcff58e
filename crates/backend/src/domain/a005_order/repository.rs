use async_trait::async_trait;
use contracts::domain::a005_order::Order;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::shared::data::{append_bytes, is_new_store, read_existing_store, read_store};
use crate::shared::data::storage::get_storage;
use crate::shared::error::PosError;

pub const FILE_NAME: &str = "orders.jsonl";

const SCHEMA_NAME: &str = "pizzeria-orders";
const SCHEMA_VERSION: u32 = 1;

/// Appends are serialized so that order numbers stay sequential
static APPEND_LOCK: Lazy<tokio::sync::Mutex<()>> = Lazy::new(|| tokio::sync::Mutex::new(()));

/// Первая строка журнала
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaMarker {
    pub schema: String,
    pub version: u32,
}

impl SchemaMarker {
    pub fn current() -> Self {
        Self {
            schema: SCHEMA_NAME.into(),
            version: SCHEMA_VERSION,
        }
    }
}

/// Заказ вместе с его номером (позиция в журнале, с 1)
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedOrder {
    pub number: usize,
    pub order: Order,
}

/// Снимок журнала заказов
#[derive(Debug, Clone, Default)]
pub struct OrderLoad {
    pub orders: Vec<NumberedOrder>,
    /// Строки, которые не удалось разобрать
    pub skipped: usize,
}

impl OrderLoad {
    pub fn into_orders(self) -> Vec<Order> {
        self.orders.into_iter().map(|o| o.order).collect()
    }
}

/// Журнал оформленных заказов (только добавление)
#[async_trait]
pub trait OrderLog: Send + Sync {
    /// Дописать заказ, вернуть его номер
    async fn append(&self, order: &Order) -> Result<usize, PosError>;

    /// Прочитать все заказы. Отсутствующий журнал означает пустой список.
    async fn load_all(&self) -> Result<OrderLoad, PosError>;
}

/// Журнал в формате JSON Lines
#[derive(Debug, Clone)]
pub struct JsonlOrderRepository {
    path: PathBuf,
}

impl JsonlOrderRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Журнал в каталоге данных процесса
    pub fn from_storage() -> Result<Self, PosError> {
        Ok(Self::new(get_storage()?.file(FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OrderLog for JsonlOrderRepository {
    async fn append(&self, order: &Order) -> Result<usize, PosError> {
        let _guard = APPEND_LOCK.lock().await;

        let mut payload = String::new();
        let number = if is_new_store(&self.path).await {
            payload.push_str(&to_line(&SchemaMarker::current())?);
            1
        } else {
            let text = read_existing_store(&self.path).await?;
            order_lines(&text).count() + 1
        };
        payload.push_str(&to_line(order)?);

        append_bytes(&self.path, payload.as_bytes()).await?;
        tracing::debug!("Order #{} appended to {}", number, self.path.display());
        Ok(number)
    }

    async fn load_all(&self) -> Result<OrderLoad, PosError> {
        Ok(match read_store(&self.path).await {
            Some(text) => parse_log(&text, &self.path.display().to_string()),
            None => OrderLoad::default(),
        })
    }
}

fn to_line<T: Serialize>(value: &T) -> Result<String, PosError> {
    let mut line = serde_json::to_string(value)
        .map_err(|e| PosError::Storage(format!("Cannot serialize order: {}", e)))?;
    line.push('\n');
    Ok(line)
}

/// Непустые строки журнала без строки-маркера
fn order_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();
    if let Some(first) = lines.peek() {
        if let Ok(marker) = serde_json::from_str::<SchemaMarker>(first) {
            if marker.schema == SCHEMA_NAME {
                if marker.version != SCHEMA_VERSION {
                    tracing::warn!(
                        "Order log version {} differs from supported {}",
                        marker.version,
                        SCHEMA_VERSION
                    );
                }
                lines.next();
            }
        }
    }
    lines
}

fn parse_log(text: &str, source: &str) -> OrderLoad {
    let text = text.trim_start_matches('\u{FEFF}');
    let mut load = OrderLoad::default();
    for (index, line) in order_lines(text).enumerate() {
        match serde_json::from_str::<Order>(line) {
            Ok(order) => load.orders.push(NumberedOrder {
                number: index + 1,
                order,
            }),
            Err(e) => {
                tracing::warn!("Skipping malformed order #{} in {}: {}", index + 1, source, e);
                load.skipped += 1;
            }
        }
    }
    load
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::temp_dir;
    use contracts::domain::a004_client::ClientRef;
    use contracts::domain::a005_order::{
        AccompanimentLine, OrderLineItem, OrderTimestamp, PizzaLine,
    };
    use contracts::enums::{OrderType, PaymentMethod, PizzaSize};

    fn sample_order(name: &str) -> Order {
        let items = vec![
            OrderLineItem::Pizza(PizzaLine {
                pizza: "Margherita".into(),
                second_half: Some("Pepperoni".into()),
                size: PizzaSize::Large,
                quantity: 1,
                ingredients: "Albahaca, Pepperoni".into(),
                price: 8250.0,
            }),
            OrderLineItem::Accompaniment(AccompanimentLine {
                accompaniment: "Papas fritas".into(),
                quantity: 2,
                price: 6000.0,
                bundle: None,
            }),
        ];
        Order {
            client: ClientRef::named(name),
            total: 14250.0,
            items,
            order_type: OrderType::Pickup,
            payment_method: PaymentMethod::Cash,
            created_at: OrderTimestamp::from_raw("2024-03-05T19:30:00-03:00"),
        }
    }

    #[tokio::test]
    async fn test_round_trip_with_numbers() {
        let dir = temp_dir("orders");
        let repo = JsonlOrderRepository::new(dir.join(FILE_NAME));

        assert_eq!(repo.append(&sample_order("Ana")).await.unwrap(), 1);
        assert_eq!(repo.append(&sample_order("Luis")).await.unwrap(), 2);

        let load = repo.load_all().await.unwrap();
        assert_eq!(load.skipped, 0);
        assert_eq!(load.orders.len(), 2);
        assert_eq!(load.orders[0].order, sample_order("Ana"));
        assert_eq!(load.orders[1].number, 2);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_first_line_is_schema_marker() {
        let dir = temp_dir("orders-marker");
        let repo = JsonlOrderRepository::new(dir.join(FILE_NAME));
        repo.append(&sample_order("Ana")).await.unwrap();

        let text = std::fs::read_to_string(repo.path()).unwrap();
        let first = text.lines().next().unwrap();
        assert_eq!(first, r#"{"schema":"pizzeria-orders","version":1}"#);
        assert_eq!(text.lines().count(), 2);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_unreadable_log_refuses_append() {
        let dir = temp_dir("orders-unreadable");
        let path = dir.join(FILE_NAME);
        std::fs::create_dir_all(&path).unwrap();
        let repo = JsonlOrderRepository::new(&path);

        let err = repo.append(&sample_order("Ana")).await.unwrap_err();
        assert!(matches!(err, PosError::Storage(_)));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_missing_log_is_empty() {
        let repo = JsonlOrderRepository::new(temp_dir("orders-missing").join(FILE_NAME));
        let load = repo.load_all().await.unwrap();
        assert!(load.orders.is_empty());
        assert_eq!(load.skipped, 0);
    }

    #[test]
    fn test_malformed_line_is_skipped_but_keeps_numbering() {
        let good = serde_json::to_string(&sample_order("Ana")).unwrap();
        let text = format!(
            "{{\"schema\":\"pizzeria-orders\",\"version\":1}}\n{}\n{{\"broken\": \n\n{}\n",
            good, good
        );
        let load = parse_log(&text, "test");
        assert_eq!(load.skipped, 1);
        assert_eq!(load.orders.len(), 2);
        assert_eq!(load.orders[0].number, 1);
        assert_eq!(load.orders[1].number, 3);
    }

    #[test]
    fn test_log_without_marker_still_reads() {
        let good = serde_json::to_string(&sample_order("Ana")).unwrap();
        let load = parse_log(&format!("{}\n", good), "legacy");
        assert_eq!(load.orders.len(), 1);
        assert_eq!(load.orders[0].number, 1);
    }
}
