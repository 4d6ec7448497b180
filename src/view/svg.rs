use std::fmt::Write as _;

use crate::view::axis::{Axis, AxisOrient};
use crate::view::tree::{Caption, ViewTree};

const AXIS_FONT: &str = "font-family=\"sans-serif\" font-size=\"10\"";

impl ViewTree {
    /// Serialize the tree to a standalone SVG document.
    ///
    /// Output is deterministic: the same tree always produces the same bytes.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(4096 + self.dots().len() * 160);
        let w = self.canvas.width;
        let h = self.canvas.height;

        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
        );
        let _ = writeln!(out, "<rect width=\"{w}\" height=\"{h}\" fill=\"#ffffff\"/>");
        let _ = writeln!(
            out,
            "<g transform=\"translate({},{})\">",
            num(self.margin.left),
            num(self.margin.top)
        );

        write_axis(&mut out, &self.x_axis, self.plot.height);
        write_axis(&mut out, &self.y_axis, 0.0);
        write_caption(&mut out, &self.x_caption);
        write_caption(&mut out, &self.y_caption);

        let label = &self.label;
        let _ = writeln!(
            out,
            "<text class=\"year label{}\" text-anchor=\"end\" x=\"{}\" y=\"{}\" font-family=\"{}\" font-weight=\"500\" font-size=\"{}\" fill=\"{}\">{}</text>",
            if label.active { " active" } else { "" },
            num(label.anchor.x),
            num(label.anchor.y),
            escape_xml(&label.font_family),
            num(label.font_size),
            label.fill().to_hex(),
            escape_xml(&label.text),
        );

        out.push_str("<g class=\"dots\">\n");
        for dot in self.visible_dots() {
            let _ = writeln!(
                out,
                "<circle class=\"dot\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"#000000\"><title>{}</title></circle>",
                num(dot.center.x),
                num(dot.center.y),
                num(dot.radius),
                dot.fill.to_hex(),
                escape_xml(dot.title()),
            );
        }
        out.push_str("</g>\n");

        let o = self.overlay;
        let _ = writeln!(
            out,
            "<rect class=\"overlay\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\"/>",
            num(o.x0),
            num(o.y0),
            num(o.width()),
            num(o.height()),
        );

        out.push_str("</g>\n</svg>\n");
        out
    }
}

fn write_axis(out: &mut String, axis: &Axis, offset: f64) {
    let s = Axis::TICK_SIZE;
    let [a, b] = axis.extent;
    match axis.orient {
        AxisOrient::Bottom => {
            let _ = writeln!(
                out,
                "<g class=\"x axis\" transform=\"translate(0,{})\" {AXIS_FONT}>",
                num(offset)
            );
            let _ = writeln!(
                out,
                "<path d=\"M{},{}V0H{}V{}\" fill=\"none\" stroke=\"#000000\" shape-rendering=\"crispEdges\"/>",
                num(a),
                num(s),
                num(b),
                num(s)
            );
            for t in &axis.ticks {
                let _ = write!(
                    out,
                    "<g class=\"tick\" transform=\"translate({},0)\"><line y2=\"{}\" stroke=\"#000000\" shape-rendering=\"crispEdges\"/>",
                    num(t.offset),
                    num(s)
                );
                if let Some(label) = &t.label {
                    let _ = write!(
                        out,
                        "<text y=\"{}\" dy=\"0.71em\" text-anchor=\"middle\">{}</text>",
                        num(s + Axis::TICK_PADDING),
                        escape_xml(label)
                    );
                }
                out.push_str("</g>\n");
            }
        }
        AxisOrient::Left => {
            let _ = writeln!(out, "<g class=\"y axis\" {AXIS_FONT}>");
            let _ = writeln!(
                out,
                "<path d=\"M{},{}H0V{}H{}\" fill=\"none\" stroke=\"#000000\" shape-rendering=\"crispEdges\"/>",
                num(-s),
                num(b),
                num(a),
                num(-s)
            );
            for t in &axis.ticks {
                let _ = write!(
                    out,
                    "<g class=\"tick\" transform=\"translate(0,{})\"><line x2=\"{}\" stroke=\"#000000\" shape-rendering=\"crispEdges\"/>",
                    num(t.offset),
                    num(-s)
                );
                if let Some(label) = &t.label {
                    let _ = write!(
                        out,
                        "<text x=\"{}\" dy=\"0.32em\" text-anchor=\"end\">{}</text>",
                        num(-(s + Axis::TICK_PADDING)),
                        escape_xml(label)
                    );
                }
                out.push_str("</g>\n");
            }
        }
    }
    out.push_str("</g>\n");
}

fn write_caption(out: &mut String, caption: &Caption) {
    let class = if caption.rotated { "y label" } else { "x label" };
    let transform = if caption.rotated {
        " transform=\"rotate(-90)\" dy=\"0.75em\""
    } else {
        ""
    };
    let _ = writeln!(
        out,
        "<text class=\"{class}\" text-anchor=\"end\" x=\"{}\" y=\"{}\"{transform} {AXIS_FONT} fill=\"#777777\">{}</text>",
        num(caption.position.x),
        num(caption.position.y),
        escape_xml(&caption.text),
    );
}

/// Fixed-precision number without trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
