use criterion::{Criterion, criterion_group, criterion_main};
use deck_rs::chart::{BarOptions, build_bar, project};
use deck_rs::pages::Page;
use deck_rs::render::{HtmlSurface, NullSurface};
use deck_rs::{Deck, DeckConfig};
use std::hint::black_box;

fn bench_projection_40_periods(c: &mut Criterion) {
    let rates: Vec<f64> = (0..40).map(|i| -1.2 + (i as f64) * 0.01).collect();

    c.bench_function("projection_40_periods", |b| {
        b.iter(|| {
            let _ = project(black_box(103_359.0), black_box(&rates));
        })
    });
}

fn bench_bar_spec_build_100(c: &mut Criterion) {
    let categories: Vec<String> = (0..100).map(|i| format!("item-{i}")).collect();
    let values: Vec<f64> = (0..100).map(|i| (i % 37) as f64 + 1.0).collect();

    c.bench_function("bar_spec_build_100", |b| {
        b.iter(|| {
            let _ = build_bar(
                black_box(&categories),
                black_box(&values),
                BarOptions::default().with_title("bench"),
            )
            .expect("spec should build");
        })
    });
}

fn bench_statistics_page_compose(c: &mut Criterion) {
    c.bench_function("statistics_page_compose", |b| {
        b.iter(|| {
            let mut surface = NullSurface::default();
            Page::Statistics
                .render(black_box(&mut surface))
                .expect("page should render");
        })
    });
}

fn bench_full_deck_document(c: &mut Criterion) {
    c.bench_function("full_deck_document", |b| {
        b.iter(|| {
            let mut deck = Deck::new(HtmlSurface::new(), DeckConfig::default());
            deck.mount().expect("mount should succeed");
            deck.select(Page::Survey).expect("survey is registered");
            deck.render().expect("render should succeed");
            let _ = deck.into_surface().into_document(black_box("bench"));
        })
    });
}

criterion_group!(
    benches,
    bench_projection_40_periods,
    bench_bar_spec_build_100,
    bench_statistics_page_compose,
    bench_full_deck_document
);
criterion_main!(benches);
