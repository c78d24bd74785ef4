//! Seed catalog used on first run, before the back-office has written a
//! snapshot of its own.

use shared::models::{Category, Product};

fn product(
    id: &str,
    name: &str,
    price: f64,
    image: &str,
    description: &str,
    tag: Option<&str>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image: image.to_string(),
        description: Some(description.to_string()),
        tag: tag.map(str::to_string),
        category_id: String::new(),
        category_name: String::new(),
    }
}

/// The initial store catalog.
#[must_use]
pub fn seed_categories() -> Vec<Category> {
    vec![
        Category {
            id: "canecas".to_string(),
            name: "Canecas".to_string(),
            description: "Canecas personalizadas para presentear".to_string(),
            products: vec![
                product(
                    "caneca-classica",
                    "Caneca Clássica",
                    29.9,
                    "/img/caneca-classica.jpg",
                    "Caneca de porcelana 325ml com estampa personalizada.",
                    Some("Mais vendido"),
                ),
                product(
                    "caneca-magica",
                    "Caneca Mágica",
                    39.9,
                    "/img/caneca-magica.jpg",
                    "Revela a estampa com líquidos quentes.",
                    Some("Novo"),
                ),
            ],
        },
        Category {
            id: "chaveiros".to_string(),
            name: "Chaveiros".to_string(),
            description: "Chaveiros em resina e acrílico".to_string(),
            products: vec![
                product(
                    "chaveiro-resina",
                    "Chaveiro de Resina",
                    9.9,
                    "/img/chaveiro-resina.jpg",
                    "Chaveiro artesanal em resina com nome gravado.",
                    None,
                ),
                product(
                    "chaveiro-acrilico",
                    "Chaveiro de Acrílico",
                    7.5,
                    "/img/chaveiro-acrilico.jpg",
                    "Chaveiro de acrílico com foto.",
                    None,
                ),
            ],
        },
        Category {
            id: "kits-festa".to_string(),
            name: "Kits Festa".to_string(),
            description: "Lembrancinhas completas para eventos".to_string(),
            products: vec![product(
                "kit-festa-30",
                "Kit Festa 30 peças",
                189.0,
                "/img/kit-festa-30.jpg",
                "Kit com 30 lembrancinhas personalizadas para sua festa.",
                Some("Promoção"),
            )],
        },
    ]
}
