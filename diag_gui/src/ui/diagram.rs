//! Canvas drawing for one internal-force diagram
//!
//! Draws the zero baseline and the sampled series of a [`DiagramPlot`], each
//! with its own [`PlotStyle`], plus the title and the extreme values.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use diag_core::calculations::Series;
use diag_core::plot::{DiagramPlot, LineColor, PlotStyle};

use crate::Message;

const MARGIN: f32 = 40.0;
const TITLE_BAND: f32 = 28.0;

fn to_color(color: LineColor) -> Color {
    let [r, g, b] = color.rgb();
    Color::from_rgb(r, g, b)
}

fn stroke_for(style: &PlotStyle) -> Stroke<'static> {
    Stroke::default()
        .with_color(to_color(style.line_color))
        .with_width(style.line_width)
}

/// Maps beam coordinates onto the drawing area.
struct Viewport {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    length: f64,
    lo: f64,
    hi: f64,
}

impl Viewport {
    fn new(bounds: Rectangle, plot: &DiagramPlot) -> Self {
        let (lo, hi) = plot.value_range();
        // flat diagrams still get a visible band around the baseline
        let (lo, hi) = if hi - lo > 1e-12 { (lo, hi) } else { (-1.0, 1.0) };

        Viewport {
            x: MARGIN,
            y: MARGIN + TITLE_BAND,
            width: (bounds.width - 2.0 * MARGIN).max(1.0),
            height: (bounds.height - 2.0 * MARGIN - TITLE_BAND).max(1.0),
            length: plot.beam_length,
            lo,
            hi,
        }
    }

    fn point(&self, position: f64, value: f64) -> Point {
        let px = self.x + (position / self.length) as f32 * self.width;
        // positive values plot upward
        let py = self.y + ((self.hi - value) / (self.hi - self.lo)) as f32 * self.height;
        Point::new(px, py)
    }
}

/// Canvas program for a single diagram
pub struct DiagramCanvas<'a> {
    plot: &'a DiagramPlot,
}

impl<'a> DiagramCanvas<'a> {
    pub fn new(plot: &'a DiagramPlot) -> Self {
        Self { plot }
    }

    fn draw_series(&self, frame: &mut Frame, view: &Viewport, series: &Series, style: &PlotStyle) {
        let mut points = series.points();
        let Some((x0, v0)) = points.next() else {
            return;
        };

        let line = Path::new(|builder| {
            builder.move_to(view.point(x0, v0));
            for (x, v) in points {
                builder.line_to(view.point(x, v));
            }
        });
        frame.stroke(&line, stroke_for(style));
    }

    fn draw_labels(&self, frame: &mut Frame, view: &Viewport, text_color: Color) {
        let style = &self.plot.style;
        if !style.title.is_empty() {
            frame.fill_text(Text {
                content: format!("{} ({})", style.title, self.plot.field.symbol()),
                position: Point::new(view.x, MARGIN * 0.5),
                color: text_color,
                size: iced::Pixels(16.0),
                ..Text::default()
            });
        }

        let diagram = &self.plot.diagram;
        for (extreme, offset) in [(diagram.max(), -14.0), (diagram.min(), 4.0)] {
            let Some((x, v)) = extreme else {
                continue;
            };
            if v == 0.0 {
                continue;
            }
            let anchor = view.point(x, v);
            frame.fill_text(Text {
                content: format!("{:.2} @ {:.3}", v, x),
                position: Point::new(anchor.x + 4.0, anchor.y + offset),
                color: text_color,
                size: iced::Pixels(11.0),
                ..Text::default()
            });
        }

        let ends = [(0.0, "0"), (self.plot.beam_length, "L")];
        for (x, tag) in ends {
            let anchor = view.point(x, 0.0);
            frame.fill_text(Text {
                content: format!("{} = {:.3}", tag, x),
                position: Point::new(anchor.x, view.y + view.height + 8.0),
                color: text_color,
                size: iced::Pixels(10.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            });
        }
    }
}

impl canvas::Program<Message> for DiagramCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let view = Viewport::new(bounds, self.plot);

        // baseline first so the diagram sits on top of it
        self.draw_series(&mut frame, &view, &self.plot.baseline, &self.plot.baseline_style);
        self.draw_series(&mut frame, &view, &self.plot.diagram, &self.plot.style);
        self.draw_labels(&mut frame, &view, theme.palette().text);

        vec![frame.into_geometry()]
    }
}
