use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога витрины.
///
/// Записи каталога приходят из статического `catalog.json` без схемы, поэтому
/// декодирование никогда не падает: поля неожиданного типа превращаются в
/// строку для отображения, отсутствующие поля остаются пустыми.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Product {
    /// Название для отображения (или "brand model", если `name` не задан)
    pub name: String,

    /// Описание товара
    pub description: String,

    /// URL изображения; `None`, если поле отсутствует или "ложное"
    /// (`null`, `""`, `false`, `0`)
    pub image: Option<String>,

    /// Статус наличия, показывается как есть
    pub status: String,

    /// Размеры, показываются как есть
    pub sizes: String,

    /// Цена, если в записи есть числовое значение
    pub price: Option<f64>,
}

impl Product {
    /// Собрать товар из произвольного JSON-значения.
    ///
    /// Не-объекты дают пустой товар, чтобы число карточек совпадало с длиной массива.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };
        let text = |key: &str| fields.get(key).map(display_text).unwrap_or_default();

        let mut name = text("name");
        if name.trim().is_empty() {
            name = [text("brand"), text("model")]
                .iter()
                .map(|part| part.trim())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
        }

        let image = fields.get("image").and_then(image_url);

        Self {
            name,
            description: text("description"),
            image,
            status: text("status"),
            sizes: text("sizes"),
            price: fields.get("price").and_then(parse_price),
        }
    }

    /// Источник картинки: собственный URL или заглушка
    pub fn image_src(&self, placeholder: &str) -> String {
        self.image
            .clone()
            .unwrap_or_else(|| placeholder.to_string())
    }

    /// Цена для показа: только конечное положительное число
    pub fn display_price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite() && *p > 0.0)
    }
}

impl From<Value> for Product {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// Разобрать тело `catalog.json`.
///
/// Ошибка только если тело не JSON или корень не массив.
pub fn parse_catalog(body: &str) -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(body)
}

// ============================================================================
// Helpers
// ============================================================================

/// Привести любое JSON-значение к строке для отображения.
///
/// Массивы склеиваются через ", ", объекты (например `{"US": [...], "EU": [...]}`)
/// в порядке ключей как "KEY: a, b | KEY: c".
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map
            .iter()
            .filter_map(|(key, v)| {
                let s = display_text(v);
                (!s.is_empty()).then(|| format!("{}: {}", key, s))
            })
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

/// URL картинки: ложные значения дают `None`, остальные берутся как текст
fn image_url(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(display_text(other)).filter(|s| !s.is_empty()),
    }
}

fn parse_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| if c == ',' { '.' } else { c })
                .collect();
            cleaned.parse().ok()
        }
        _ => None,
    }
}
