use charlayout::{similarity, Point, Quadrilateral, TextBlock};
use geo::Area;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

fn main() {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let position = Quadrilateral::new(
        Point::new(0.0, 0.0),
        Point::new(200.0, 0.0),
        Point::new(200.0, 24.0),
        Point::new(0.0, 24.0),
    );
    let mut block = TextBlock::new("Invoice 编号：42。", position);
    block
        .synthesize_characters()
        .expect("Failed to lay out characters");
    assert_eq!(block.characters.len(), block.text.chars().count());
    for info in &block.characters {
        let area = info
            .position
            .to_polygon()
            .map(|polygon| polygon.unsigned_area())
            .unwrap_or(0.0);
        log::debug!("{:?} -> {:?} (area {area})", info.character, info.position);
    }

    let template = [
        Point::new(0.0, 0.0),
        Point::new(120.0, 0.0),
        Point::new(120.0, 80.0),
        Point::new(0.0, 80.0),
    ];
    let detected = [
        Point::new(2.0, 1.0),
        Point::new(122.0, 1.5),
        Point::new(121.0, 81.0),
        Point::new(1.0, 80.5),
    ];
    let offset = similarity::spatial_similarity(&template, &detected).expect("Failed scoring.");
    let shape = similarity::matched_group_similarity(&template, &detected).expect("Failed scoring.");
    log::debug!("marker validation: offset score {offset}, shape score {shape}");
    assert!(offset > 0.0 && offset <= 1.0);
    assert!(shape > 0.9);
}
