use criterion::{black_box, criterion_group, criterion_main, Criterion};

use portfolio_catalog::processing::{aggregate, categorize, normalize_price_text};
use portfolio_catalog::types::ExtractedProduct;

const NAMES: [&str; 8] = [
    "LECHE ENTERA BOLSA 1100ML",
    "CAFE MOLIDO TOSTADO 500G",
    "GALLETA OREO X 12",
    "ATUN EN ACEITE LATA",
    "SALCHICHA RANCHERA X 10",
    "DETERGENTE EN POLVO 1KG",
    "VELA AROMATICA",
    "SERVILLETA DE PAPEL 100 UND",
];

fn synthetic_products(n: usize) -> Vec<ExtractedProduct> {
    (0..n)
        .map(|i| ExtractedProduct {
            code: format!("{i:05}"),
            name: NAMES[i % NAMES.len()].to_string(),
            unit: "UND".to_string(),
            price: (i % 97) as f64 * 100.0,
            brand: format!("MARCA {}", i % 13),
        })
        .collect()
}

fn bench_categorize(c: &mut Criterion) {
    c.bench_function("categorize/mixed_names", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(categorize(black_box(name)));
            }
        })
    });

    c.bench_function("normalize_price_text", |b| {
        b.iter(|| black_box(normalize_price_text(black_box("$ 12.500,00"))))
    });

    let products = synthetic_products(5_000);
    c.bench_function("aggregate/5k_products", |b| {
        b.iter(|| black_box(aggregate(vec![products.clone()])))
    });
}

criterion_group!(benches, bench_categorize);
criterion_main!(benches);
