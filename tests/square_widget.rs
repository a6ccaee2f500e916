use square_view::prelude::*;

const MODES: [MeasureMode; 3] = [
    MeasureMode::Exact,
    MeasureMode::AtMost,
    MeasureMode::Unconstrained,
];

#[test]
fn test_measured_size_is_always_square() {
    let mut widget = square();
    let sizes = [0, 1, 33, 80, 120, 121, 1000];
    for &width_mode in &MODES {
        for &height_mode in &MODES {
            for &width_size in &sizes {
                for &height_size in &sizes {
                    let measured = widget.measure(
                        MeasureSpec {
                            mode: width_mode,
                            size: width_size,
                        },
                        MeasureSpec {
                            mode: height_mode,
                            size: height_size,
                        },
                    );
                    assert!(
                        measured.is_square(),
                        "{:?}x{:?} ({}, {}) measured {:?}",
                        width_mode,
                        height_mode,
                        width_size,
                        height_size,
                        measured
                    );
                }
            }
        }
    }
}

#[test]
fn test_packed_specs_from_host() {
    let mut widget = square();
    let exact_100 = (1 << 30) | 100;
    let at_most_50 = (2 << 30) | 50;
    let unknown_10 = (3 << 30) | 10;

    let measured = widget.measure(
        MeasureSpec::from_packed(exact_100),
        MeasureSpec::from_packed(at_most_50),
    );
    assert_eq!(measured, MeasuredSize::square(50));

    let measured = widget.measure(
        MeasureSpec::from_packed(unknown_10),
        MeasureSpec::from_packed(unknown_10),
    );
    assert_eq!(measured, MeasuredSize::square(120));
}

#[test]
fn test_bounding_box_after_resize() {
    let mut widget = square().padding(Padding::default().left(10).top(5).right(10).bottom(5));
    widget.on_resized(MeasuredSize::new(200, 150), MeasuredSize::new(0, 0));
    assert_eq!(widget.bounding_box(), BoundingBox::new(0, 140, 180, 0));
}

#[test]
fn test_paint_order_and_bounds() {
    let mut widget = square();
    widget.on_resized(MeasuredSize::square(120), MeasuredSize::default());

    let mut ctx = PaintContext::new();
    widget.paint(&mut ctx);

    let styles: Vec<PaintStyle> = ctx.commands().iter().map(|c| c.paint().style).collect();
    assert_eq!(styles, vec![PaintStyle::Fill, PaintStyle::Stroke]);
    for command in ctx.commands() {
        let DrawCommand::RoundRect { rect, rx, ry, .. } = command;
        assert_eq!(*rect, widget.bounding_box().to_rect_f());
        assert_eq!((*rx, *ry), (25.0, 25.0));
    }
}

#[test]
fn test_hosted_widget_renders_to_pixels() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut host = Host::new(square().padding(4));
    host.layout(MeasureSpec::exact(200), MeasureSpec::at_most(100));
    assert!(host.frame());

    let surface = host.render().unwrap();
    assert_eq!((surface.width(), surface.height()), (100, 100));
    // Body, border, and the transparent corner outside the rounding.
    assert_eq!(surface.pixel(46, 46), Some([255, 255, 0, 255]));
    assert_eq!(surface.pixel(2, 46), Some([0x44, 0x44, 0x44, 255]));
    assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn test_custom_style() {
    let style = SquareStyle::default()
        .desired_size(48, 48)
        .corner_radius(0.0)
        .stroke_width(2.0)
        .background_color(Color::WHITE)
        .stroke_color(Color::BLACK)
        .anti_alias(false);
    let mut host = Host::new(SquareWidget::with_style(style));
    host.layout(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());
    host.frame();

    let surface = host.render().unwrap();
    assert_eq!(surface.width(), 48);
    assert_eq!(surface.pixel(24, 24), Some([255, 255, 255, 255]));
    assert_eq!(surface.pixel(0, 24), Some([0, 0, 0, 255]));
}
