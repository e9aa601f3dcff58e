use contracts::domain::a003_promotion::aggregate::{catalog, Promotion};

/// Акции задаются в коде и не хранятся в файлах
pub fn list_all() -> Vec<Promotion> {
    catalog()
}
