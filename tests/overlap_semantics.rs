use circle_scatter::error::ScatterError;
use circle_scatter::model::{BoundingBox, Point, Size};

fn make_box(x: f32, y: f32, w: f32, h: f32) -> BoundingBox {
    BoundingBox::new(Point::new(x, y), Size::new(w, h)).expect("valid box")
}

#[test]
fn overlapping_boxes_detected() {
    let a = make_box(0.0, 0.0, 50.0, 50.0);
    let b = make_box(25.0, 25.0, 50.0, 50.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn touching_edges_do_not_overlap() {
    let a = make_box(0.0, 0.0, 50.0, 50.0);
    // Shares the x = 50 edge with `a`: zero-area intersection.
    let b = make_box(50.0, 0.0, 50.0, 50.0);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));

    // Same for the bottom edge.
    let c = make_box(0.0, 50.0, 50.0, 50.0);
    assert!(!a.overlaps(&c));
}

#[test]
fn touching_corners_do_not_overlap() {
    let a = make_box(0.0, 0.0, 50.0, 50.0);
    let b = make_box(50.0, 50.0, 50.0, 50.0);
    assert!(!a.overlaps(&b));
}

#[test]
fn containment_is_overlap() {
    let outer = make_box(0.0, 0.0, 100.0, 100.0);
    let inner = make_box(10.0, 10.0, 20.0, 20.0);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn disjoint_boxes_do_not_overlap() {
    let a = make_box(0.0, 0.0, 10.0, 10.0);
    let b = make_box(100.0, 100.0, 10.0, 10.0);
    assert!(!a.overlaps(&b));
}

#[test]
fn box_overlaps_itself() {
    let a = make_box(5.0, 5.0, 10.0, 10.0);
    assert!(a.overlaps(&a));
}

#[test]
fn non_positive_dimensions_rejected() {
    for (w, h) in [(0.0, 50.0), (50.0, 0.0), (-1.0, 50.0), (0.0, 0.0)] {
        let result = BoundingBox::new(Point::new(0.0, 0.0), Size::new(w, h));
        match result {
            Err(ScatterError::InvalidGeometry { width, height }) => {
                assert_eq!(width, w);
                assert_eq!(height, h);
            }
            _ => panic!("expected InvalidGeometry for {w}x{h}"),
        }
    }
}

#[test]
fn edges_and_area() {
    let a = make_box(10.0, 20.0, 30.0, 40.0);
    assert_eq!(a.right(), 40.0);
    assert_eq!(a.bottom(), 60.0);
    assert_eq!(a.area(), 1200.0);
}
