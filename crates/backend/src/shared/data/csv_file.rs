use super::{append_bytes, is_new_store, read_store};
use crate::shared::error::PosError;
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// Результат чтения CSV-хранилища
#[derive(Debug)]
pub struct CsvLoad<T> {
    pub rows: Vec<T>,
    /// Строки, которые не удалось разобрать
    pub skipped: usize,
}

impl<T> CsvLoad<T> {
    fn empty() -> Self {
        Self {
            rows: Vec::new(),
            skipped: 0,
        }
    }
}

/// Прочитать все строки файла. Заголовок обязателен, битые строки пропускаются.
pub async fn read_rows<T: DeserializeOwned>(path: &Path) -> CsvLoad<T> {
    match read_store(path).await {
        Some(text) => parse_rows(&text, &path.display().to_string()),
        None => CsvLoad::empty(),
    }
}

pub fn parse_rows<T: DeserializeOwned>(text: &str, source: &str) -> CsvLoad<T> {
    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut load = CsvLoad::empty();
    for result in reader.deserialize::<T>() {
        match result {
            Ok(row) => load.rows.push(row),
            Err(e) => {
                tracing::warn!("Skipping malformed CSV record in {}: {}", source, e);
                load.skipped += 1;
            }
        }
    }
    load
}

/// Дописать одну строку; новый файл получает строку заголовка
pub async fn append_row<T: Serialize>(path: &Path, row: &T) -> Result<(), PosError> {
    let with_header = is_new_store(path).await;
    let bytes = encode_row(row, with_header)?;
    append_bytes(path, &bytes).await
}

fn encode_row<T: Serialize>(row: &T, with_header: bool) -> Result<Vec<u8>, PosError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(with_header)
        .from_writer(Vec::new());
    writer.serialize(row)?;
    writer
        .into_inner()
        .map_err(|e| PosError::Storage(format!("Cannot encode CSV row: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::temp_dir;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
        price: f64,
    }

    #[test]
    fn test_encode_with_and_without_header() {
        let row = Row {
            name: "Papas, grandes".into(),
            price: 3000.0,
        };
        let first = String::from_utf8(encode_row(&row, true).unwrap()).unwrap();
        assert_eq!(first, "name,price\n\"Papas, grandes\",3000.0\n");
        let next = String::from_utf8(encode_row(&row, false).unwrap()).unwrap();
        assert_eq!(next, "\"Papas, grandes\",3000.0\n");
    }

    #[test]
    fn test_parse_skips_bad_rows() {
        let text = "\u{FEFF}name,price\nBebida,1500\nRoto,abc\nPapas,3000\n";
        let load: CsvLoad<Row> = parse_rows(text, "test");
        assert_eq!(load.rows.len(), 2);
        assert_eq!(load.skipped, 1);
        assert_eq!(load.rows[1].name, "Papas");
    }

    #[tokio::test]
    async fn test_append_then_read() {
        let dir = temp_dir("csv");
        let path = dir.join("rows.csv");

        let empty: CsvLoad<Row> = read_rows(&path).await;
        assert!(empty.rows.is_empty());

        append_row(&path, &Row { name: "A".into(), price: 1.0 }).await.unwrap();
        append_row(&path, &Row { name: "B".into(), price: 2.5 }).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("name,price").count(), 1);

        let load: CsvLoad<Row> = read_rows(&path).await;
        assert_eq!(
            load.rows,
            vec![
                Row { name: "A".into(), price: 1.0 },
                Row { name: "B".into(), price: 2.5 }
            ]
        );
        let _ = std::fs::remove_dir_all(dir);
    }
}
