/// Ключ сравнения названий: без пробелов по краям, в нижнем регистре
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Сравнение названий без учёта регистра
pub fn same_name(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_ignores_case_and_padding() {
        assert!(same_name("Margherita", "  margherita "));
        assert!(same_name("Champiñones", "CHAMPIÑONES"));
        assert!(!same_name("Napolitana", "Margherita"));
    }
}
