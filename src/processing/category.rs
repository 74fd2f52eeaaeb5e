//! Keyword-based product categorization.
//!
//! Categories are checked in table order and the first one with a keyword contained in the
//! uppercased product name wins. The order encodes priority between overlapping keywords
//! ("Café y Chocolate" before "Dulces y Confitería", for instance), so the table must not be
//! reordered.

/// Category assigned when no keyword matches.
pub const FALLBACK_CATEGORY: &str = "Otros";

/// Ordered `(category, keywords)` table.
pub const CATEGORY_RULES: &[(&str, &[&str])] = &[
    (
        "Café y Chocolate",
        &[
            "CAFE", "CAFÉ", "NESCAFE", "LUKAFE", "COFFEE", "COCOA", "CACAO", "CHOCOLATE", "LUKER",
            "COBERTURA", "MILO", "CAPPUCCINO", "MOKACCINO",
        ],
    ),
    (
        "Lácteos",
        &[
            "LECHE", "QUESO", "YOGUR", "YOGURT", "CREMA DE LECHE", "MANTEQUILLA", "KUMIS",
            "AREQUIPE", "KLIM", "CONDENSADA", "MARGARINA", "MARG.", "LACTEA", "LECHERA",
        ],
    ),
    (
        "Bebidas",
        &[
            "JUGO", "NECTAR", "REFRESCO", "GASEOSA", "TANG", "CLIGHT", "BEBIDA", "WATER", "AGUA",
            "LIMONADA", "NARANJADA", "TE ", "TEA", "TISANA",
        ],
    ),
    (
        "Congelados",
        &[
            "CONGELAD", "FROZEN", "HELADO", "HIELO", "PAPA FRIT", "PAPAS A LA", "NUGGET", "APANADO",
            "PRECOCID",
        ],
    ),
    (
        "Enlatados y Conservas",
        &[
            "ATUN", "ATÚN", "SARDINA", "ENLATAD", "CONSERVA", "ACEITUNA", "CEREZA", "MARASCHINO",
            "ALCAPARRA", "PEPINILLO", "ENCURTIDO", "CERNIDO", "PULPA",
        ],
    ),
    (
        "Salsas y Condimentos",
        &[
            "SALSA", "MAYONESA", "MOSTAZA", "KETCHUP", "VINAGRE", "CALDO", "SAZON", "SAZÓN",
            "PIMIENTA", "ESPECIAS", "ADOBO", "CURRY", "COMINO", "BBQ",
        ],
    ),
    (
        "Aceites y Grasas",
        &["ACEITE", "OLIVA", "GIRASOL", "VEGETAL", "CANOLA", "MANTECA", "GRASA"],
    ),
    (
        "Panadería y Repostería",
        &[
            "HARINA", "H.RICAMASA", "LEVADURA", "LEVAPAN", "TORTA", "PONQUE", "PREMEZCLA",
            "POLVO HORNEAR", "GELATINA", "GEL SIN SABOR", "FLAN", "NATILLA",
        ],
    ),
    (
        "Dulces y Confitería",
        &[
            "DULCE", "CARAMELO", "GALLETA", "BOCADILLO", "MERMELADA", "MIEL", "AZUCAR", "AZÚCAR",
            "PANELA", "GUAYABA", "AREQUIPE", "MANJAR", "OBLEAS", "COCO ARTESANAL", "OREO",
            "CHIPS AHOY", "CLUB SOCIAL", "FESTIVAL", "NUCITA",
        ],
    ),
    (
        "Cereales y Granos",
        &[
            "CEREAL", "AVENA", "ZUCARITAS", "CORN FLAKES", "KELLOGG", "GRANOLA", "ARROZ", "LENTEJA",
            "FRIJOL", "GARBANZO", "CHOCAPIC", "FITNESS",
        ],
    ),
    (
        "Carnes y Embutidos",
        &[
            "CARNE", "POLLO", "CERDO", "RES", "JAMON", "JAMÓN", "SALCHICHA", "CHORIZO", "TOCINETA",
            "BACON", "MORTADELA", "SALAMI", "HAMBURGUESA",
        ],
    ),
    (
        "Frutas y Verduras",
        &[
            "FRUTA", "VERDURA", "SETA", "CHAMPIÑON", "CHAMPIÑÓN", "HONGO", "PIÑA", "MANGO", "FRESA",
            "MORA", "DURAZNO", "TOMATE", "CEBOLLA", "MAIZ", "MAÍZ", "ARVEJA",
        ],
    ),
    (
        "Limpieza y Hogar",
        &[
            "DETERGENTE", "DET.", "JABON", "JABÓN", "LIMPIA", "LAVALOZA", "DESINFECT", "CLORO",
            "BLANQUEADOR", "SUAVIZANTE", "GRANDIOSO", "POPOURRI", "LAVANDA", "FASSI",
        ],
    ),
    (
        "Empaques y Desechables",
        &[
            "EMPAQUE", "PAPEL", "WRAP", "CONTENEDOR", "VASO", "PLATO", "CUCHARA", "TENEDOR",
            "SERVILLETA", "BOLSA", "ALUMINIO", "FILM", "STRETCH", "DESECHABLE",
        ],
    ),
];

/// Assign a category to a product name.
pub fn categorize(product_name: &str) -> &'static str {
    let name_upper = product_name.to_uppercase();

    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| name_upper.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_category_wins_on_overlap() {
        assert_eq!(categorize("GALLETA CHOCOLATE"), "Café y Chocolate");
        assert_eq!(categorize("Cafe con chocolate"), "Café y Chocolate");
    }

    #[test]
    fn matching_is_case_insensitive_on_the_name() {
        assert_eq!(categorize("leche entera"), "Lácteos");
        assert_eq!(categorize("atún en aceite"), "Enlatados y Conservas");
    }

    #[test]
    fn shared_keyword_goes_to_first_category() {
        assert_eq!(categorize("AREQUIPE 250G"), "Lácteos");
    }

    #[test]
    fn trailing_space_keyword_needs_the_space() {
        assert_eq!(categorize("TE VERDE"), "Bebidas");
        assert_eq!(categorize("TETERO"), FALLBACK_CATEGORY);
    }

    #[test]
    fn substring_matches_count() {
        // "RES" hides inside "FRESCO".
        assert_eq!(categorize("QUESO FRESCO"), "Lácteos");
        assert_eq!(categorize("PAN FRESCO"), "Carnes y Embutidos");
    }

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(categorize("VELA AROMATICA"), FALLBACK_CATEGORY);
    }

    #[test]
    fn table_has_fourteen_categories() {
        assert_eq!(CATEGORY_RULES.len(), 14);
        assert!(CATEGORY_RULES.iter().all(|(c, _)| *c != FALLBACK_CATEGORY));
    }
}
