//! End-to-end run of the synchronous pipeline: CSV text in, renderable
//! layout descriptors and a normalized finance series out.

use chrono::NaiveDate;
use lifeline_rs::finance::{PricePoint, normalize_series};
use lifeline_rs::ingest::load_events;
use lifeline_rs::layout::{CategoryPalette, LayoutConfig, layout_timeline};
use lifeline_rs::{EventExtractor, PersonTimelineBuilder};
use rust_decimal::Decimal;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid ymd")
}

const CSV: &str = "\
Submission Date,Nome,Eventi
2023-01-01,Anna,\"Titolo: Laurea magistrale, Categoria: studio, Data: 2020-07-14, Titolo: Primo lavoro, Categoria: carriera, Data: 2020-09-01\"
2023-01-02,Anna,\"Titolo: Data rotta, Data: 31/02/2021\nTitolo: Maratona, Categoria: salute, Data: 2026-04-12\"
2023-01-03,Luca,\"Titolo: Trasloco, Data: 2019-05-20\"
";

#[test]
fn csv_text_becomes_layouts_and_a_rebased_series() {
    let today = ymd(2024, 1, 1);

    let mut extractor = EventExtractor::default();
    let events = load_events(CSV.as_bytes(), &mut extractor).expect("events");
    assert_eq!(events.len(), 4);

    let timelines = PersonTimelineBuilder::default().build(events);
    assert_eq!(timelines.len(), 2);

    let anna = &timelines["Anna"];
    assert_eq!(anna.reference_date(), Some(ymd(2020, 7, 14)));

    let entries = layout_timeline(anna, today, 1024.0, LayoutConfig::default())
        .expect("layout");
    assert_eq!(entries.len(), 3);
    assert!(entries[0].is_past);
    assert!(!entries[2].is_past, "2026 event must be in the future");

    let palette = CategoryPalette::default();
    assert_eq!(palette.color_for(&entries[2].event.category), "#f71735");

    // The finance series is keyed off the person's earliest event.
    let reference = anna.reference_date().expect("reference date");
    let series = vec![
        PricePoint::new(ymd(2020, 7, 13), Decimal::from(100)),
        PricePoint::new(ymd(2020, 9, 1), Decimal::from(104)),
        PricePoint::new(ymd(2026, 4, 12), Decimal::from(130)),
    ];
    let normalized = normalize_series(&series, reference, today).expect("normalize");

    assert_eq!(normalized[0].percent_change, 0.0);
    assert!(normalized[2].is_projected);
}
