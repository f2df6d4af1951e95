use contracts::domain::a001_product::Product;
use leptos::prelude::*;

/// Состояние страницы каталога.
///
/// Каталог заполняется один раз при загрузке и дальше не меняется;
/// `selected` — товар, открытый в модальном окне.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub catalog: Vec<Product>,
    pub selected: Option<Product>,

    // Флаг загрузки: запрос завершился (успешно или нет)
    pub is_loaded: bool,
}

impl CatalogState {
    /// Каталог получен
    pub fn load(&mut self, products: Vec<Product>) {
        self.catalog = products;
        self.is_loaded = true;
    }

    /// Загрузка не удалась: каталог остаётся пустым
    pub fn fail(&mut self) {
        self.catalog.clear();
        self.is_loaded = true;
    }

    /// Открыть товар в модальном окне; последний клик побеждает
    pub fn select(&mut self, product: Product) {
        self.selected = Some(product);
    }

    /// Закрыть модальное окно
    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.as_ref()
    }
}

pub fn create_state() -> RwSignal<CatalogState> {
    RwSignal::new(CatalogState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::parse_catalog;

    fn sample_catalog() -> Vec<Product> {
        parse_catalog(
            r#"[
                {"name": "Shirt", "status": "In stock"},
                {"name": "Boots", "sizes": "41-45", "image": "/img/boots.jpg"},
                {"name": "Cap", "description": "Cotton"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = CatalogState::default();
        assert!(state.catalog.is_empty());
        assert!(state.selected_product().is_none());
        assert!(!state.is_loaded);
    }

    #[test]
    fn test_load_keeps_order() {
        let mut state = CatalogState::default();
        state.load(sample_catalog());
        assert!(state.is_loaded);
        let names: Vec<&str> = state.catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Shirt", "Boots", "Cap"]);
    }

    #[test]
    fn test_fail_leaves_catalog_empty() {
        let mut state = CatalogState::default();
        state.fail();
        assert!(state.is_loaded);
        assert!(state.catalog.is_empty());
        assert!(state.selected_product().is_none());
    }

    #[test]
    fn test_select_and_close() {
        let mut state = CatalogState::default();
        state.load(sample_catalog());

        let boots = state.catalog[1].clone();
        state.select(boots.clone());
        assert_eq!(state.selected_product(), Some(&boots));

        state.close();
        assert!(state.selected_product().is_none());
        assert_eq!(state.catalog, sample_catalog());
    }

    #[test]
    fn test_last_selection_wins() {
        let mut state = CatalogState::default();
        state.load(sample_catalog());

        state.select(state.catalog[0].clone());
        state.select(state.catalog[2].clone());
        assert_eq!(state.selected_product().map(|p| p.name.as_str()), Some("Cap"));
    }

    #[test]
    fn test_shirt_scenario() {
        let mut state = CatalogState::default();
        state.load(parse_catalog(r#"[{"name":"Shirt","status":"In stock"}]"#).unwrap());
        assert_eq!(state.catalog.len(), 1);

        state.select(state.catalog[0].clone());
        let shirt = state.selected_product().unwrap();
        assert_eq!(shirt.name, "Shirt");
        assert_eq!(shirt.status, "In stock");
        assert_eq!(shirt.sizes, "");
        assert_eq!(shirt.description, "");
        assert_eq!(shirt.image_src("/no-image.png"), "/no-image.png");
    }
}
