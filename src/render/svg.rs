//! Static SVG scene writer
//!
//! Draws the background decoration (bullseye rings with count labels, or the
//! linear baseline with section dividers) and then every entity on top, in
//! frame order.

use super::{band_labels, RenderFrame, RenderedEntity};
use crate::config::{BullseyeConfig, CanvasConfig};
use crate::coordinator::{Decoration, DisplayMode, RingStyle};
use crate::layout::{LinearLayout, RingGeometry, RingLayout};
use crate::types::CoarseBand;

const GUIDE_COLOR: &str = "#4a5568";
const DIVIDER_COLOR: &str = "#9CA3AF";
const OUTLINE_OPACITY: f64 = 0.6;
const FILL_OPACITY: f64 = 0.3;

/// Bands with a drawn ring, outermost first
const RINGED_BANDS: [CoarseBand; 3] = [
    CoarseBand::Newcomer,
    CoarseBand::Explorer,
    CoarseBand::Practitioner,
];

/// SVG writer for render frames
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    canvas: CanvasConfig,
    ring: RingLayout,
    linear: LinearLayout,
}

impl SvgRenderer {
    pub fn new(config: &BullseyeConfig) -> Self {
        Self {
            canvas: config.canvas.clone(),
            ring: RingLayout::from_config(config),
            linear: LinearLayout::from_config(config),
        }
    }

    /// Render a full SVG document
    pub fn render(&self, frame: &RenderFrame) -> String {
        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = fmt_num(self.canvas.width),
            h = fmt_num(self.canvas.height()),
        ));

        match frame.decoration {
            Some(Decoration::Rings) => {
                self.write_rings(&mut svg, frame.ring_style, frame.decoration_opacity);
                self.write_band_labels(&mut svg, frame);
            }
            Some(Decoration::LinearGuides) => {
                self.write_linear_guides(&mut svg, frame.decoration_opacity);
            }
            None => {}
        }

        svg.push_str("  <g class=\"employees\">\n");
        for entity in &frame.entities {
            write_entity(&mut svg, entity, frame.display);
        }
        svg.push_str("  </g>\n</svg>\n");
        svg
    }

    fn write_rings(&self, svg: &mut String, style: RingStyle, fade: f64) {
        let center = self.ring.center();
        let (cx, cy) = (center.x, center.y);

        for band in RINGED_BANDS {
            let outer = self.ring.outer_boundary(band);
            let inner = match band {
                CoarseBand::Practitioner => 0.0,
                _ => self.ring.inner_boundary(band),
            };
            let color = band.color();

            let (d, paint) = match (self.ring.geometry(), style) {
                (RingGeometry::Quarter, RingStyle::Outline) => (
                    format!(
                        "M {} {} A {r} {r} 0 0 0 {} {}",
                        fmt_num(cx),
                        fmt_num(cy - outer),
                        fmt_num(cx - outer),
                        fmt_num(cy),
                        r = fmt_num(outer)
                    ),
                    format!(
                        r#"fill="none" stroke="{color}" stroke-width="3" opacity="{}""#,
                        fmt_num(OUTLINE_OPACITY * fade)
                    ),
                ),
                (RingGeometry::Quarter, RingStyle::Filled) => (
                    quarter_annulus(cx, cy, inner, outer),
                    format!(
                        r#"fill="{color}" opacity="{}""#,
                        fmt_num(FILL_OPACITY * fade)
                    ),
                ),
                (RingGeometry::Full, RingStyle::Outline) => (
                    circle_path(cx, cy, outer),
                    format!(
                        r#"fill="none" stroke="{color}" stroke-width="3" opacity="{}""#,
                        fmt_num(OUTLINE_OPACITY * fade)
                    ),
                ),
                (RingGeometry::Full, RingStyle::Filled) => (
                    full_annulus(cx, cy, inner, outer),
                    format!(
                        r#"fill="{color}" fill-rule="evenodd" opacity="{}""#,
                        fmt_num(FILL_OPACITY * fade)
                    ),
                ),
            };
            svg.push_str(&format!(
                "  <path class=\"circle-ring\" data-band=\"{}\" d=\"{d}\" {paint}/>\n",
                band.label().to_lowercase()
            ));
        }
    }

    fn write_band_labels(&self, svg: &mut String, frame: &RenderFrame) {
        for label in band_labels(&frame.band_counts, &self.canvas) {
            svg.push_str(&format!(
                "  <text class=\"below-label\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-weight=\"bold\" font-size=\"14\" opacity=\"{}\">{}</text>\n",
                fmt_num(label.x),
                fmt_num(label.y),
                label.color,
                fmt_num(frame.decoration_opacity),
                escape(&label.text)
            ));
        }
    }

    fn write_linear_guides(&self, svg: &mut String, fade: f64) {
        let base_y = self.linear.baseline_y();
        let section = self.linear.section_width();
        let opacity = fmt_num(fade);

        svg.push_str(&format!(
            "  <line class=\"linear-line\" x1=\"0\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\" stroke=\"{GUIDE_COLOR}\" stroke-width=\"3\" opacity=\"{opacity}\"/>\n",
            fmt_num(self.canvas.width),
            y = fmt_num(base_y)
        ));
        for band in CoarseBand::all() {
            let i = band.index() as f64;
            if band.index() > 0 {
                svg.push_str(&format!(
                    "  <line class=\"linear-line\" x1=\"{x}\" y1=\"{}\" x2=\"{x}\" y2=\"{}\" stroke=\"{DIVIDER_COLOR}\" stroke-width=\"2\" opacity=\"{opacity}\"/>\n",
                    fmt_num(base_y - 20.0),
                    fmt_num(base_y + 20.0),
                    x = fmt_num(section * i)
                ));
            }
            svg.push_str(&format!(
                "  <text class=\"section-label\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{GUIDE_COLOR}\" font-weight=\"bold\" font-size=\"14\" opacity=\"{opacity}\">{}</text>\n",
                fmt_num(self.linear.anchor_x(band)),
                fmt_num(base_y + 40.0),
                band.label()
            ));
        }
    }
}

fn write_entity(svg: &mut String, entity: &RenderedEntity, display: DisplayMode) {
    svg.push_str(&format!(
        "    <g class=\"employee\" data-id=\"{}\" data-level=\"{}\" transform=\"translate({}, {})\">\n",
        entity.id,
        entity.engagement_level,
        fmt_num(entity.x),
        fmt_num(entity.y)
    ));
    svg.push_str(&format!("      <title>{}</title>\n", escape(&entity.name)));
    match display {
        DisplayMode::Dots => {
            svg.push_str(&format!(
                "      <circle r=\"{}\" fill=\"{}\" opacity=\"0.9\"/>\n",
                fmt_num(entity.radius),
                entity.color
            ));
        }
        DisplayMode::Photos => {
            svg.push_str(&format!(
                "      <circle r=\"{}\" fill=\"white\" stroke=\"{}\" stroke-width=\"2\" opacity=\"0.9\"/>\n",
                fmt_num(entity.radius),
                entity.color
            ));
            svg.push_str(&format!(
                "      <text text-anchor=\"middle\" dy=\"0.35em\" font-size=\"12\" font-weight=\"bold\" fill=\"{}\">{}</text>\n",
                entity.color,
                escape(&entity.initials)
            ));
        }
    }
    svg.push_str("    </g>\n");
}

/// Filled quarter annulus from 90° to 180°; a zero inner radius closes on the centre
fn quarter_annulus(cx: f64, cy: f64, inner: f64, outer: f64) -> String {
    let mut d = format!(
        "M {} {} A {r} {r} 0 0 0 {} {}",
        fmt_num(cx),
        fmt_num(cy - outer),
        fmt_num(cx - outer),
        fmt_num(cy),
        r = fmt_num(outer)
    );
    if inner > 0.0 {
        d.push_str(&format!(
            " L {} {} A {r} {r} 0 0 1 {} {} Z",
            fmt_num(cx - inner),
            fmt_num(cy),
            fmt_num(cx),
            fmt_num(cy - inner),
            r = fmt_num(inner)
        ));
    } else {
        d.push_str(&format!(" L {} {} Z", fmt_num(cx), fmt_num(cy)));
    }
    d
}

/// Circle as two half arcs
fn circle_path(cx: f64, cy: f64, r: f64) -> String {
    format!(
        "M {} {} A {r} {r} 0 1 0 {} {} A {r} {r} 0 1 0 {} {} Z",
        fmt_num(cx),
        fmt_num(cy - r),
        fmt_num(cx),
        fmt_num(cy + r),
        fmt_num(cx),
        fmt_num(cy - r),
        r = fmt_num(r)
    )
}

fn full_annulus(cx: f64, cy: f64, inner: f64, outer: f64) -> String {
    if inner > 0.0 {
        format!("{} {}", circle_path(cx, cy, outer), circle_path(cx, cy, inner))
    } else {
        circle_path(cx, cy, outer)
    }
}

/// Compact number formatting: integers without a fraction, others to 2 places
fn fmt_num(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::ViewCoordinator;
    use crate::layout::fixtures::roster;
    use crate::types::EngagementLevel::*;

    fn frame(config: &BullseyeConfig) -> RenderFrame {
        let coordinator = ViewCoordinator::new(roster(&[Outsider, Newcomer, Pro]), config);
        coordinator.frame()
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(900.0), "900");
        assert_eq!(fmt_num(112.5), "112.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.33");
        assert_eq!(fmt_num(-20.0), "-20");
    }

    #[test]
    fn test_quarter_outline_arc() {
        let config = BullseyeConfig::default();
        let svg = SvgRenderer::new(&config).render(&frame(&config));
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="900" height="1125""#));
        // Newcomer ring: radius 675 around (900, 900)
        assert!(svg.contains("M 900 225 A 675 675 0 0 0 225 900"));
        assert_eq!(svg.matches("class=\"circle-ring\"").count(), 3);
        assert!(svg.contains(">Outsider: 1</text>"));
        assert!(svg.contains(">Practitioner: 1</text>"));
        assert!(!svg.contains("linear-line"));
    }

    #[test]
    fn test_quarter_filled_annulus() {
        assert_eq!(
            quarter_annulus(900.0, 900.0, 225.0, 450.0),
            "M 900 450 A 450 450 0 0 0 450 900 L 675 900 A 225 225 0 0 1 900 675 Z"
        );
        assert_eq!(
            quarter_annulus(900.0, 900.0, 0.0, 225.0),
            "M 900 675 A 225 225 0 0 0 675 900 L 900 900 Z"
        );
    }

    #[test]
    fn test_full_geometry_draws_circles() {
        let mut config = BullseyeConfig::default();
        config.rings.geometry = RingGeometry::Full;
        let mut f = frame(&config);
        f.ring_style = RingStyle::Filled;
        let svg = SvgRenderer::new(&config).render(&f);
        // Centre (450, 450); practitioner band has no hole
        assert_eq!(svg.matches("fill-rule=\"evenodd\"").count(), 3);
        assert!(svg.contains(&format!("d=\"{}\"", circle_path(450.0, 450.0, 450.0 / 4.2))));
    }

    #[test]
    fn test_linear_guides() {
        let config = BullseyeConfig::default();
        let mut f = frame(&config);
        f.view = crate::layout::ViewMode::Linear;
        f.decoration = Some(Decoration::LinearGuides);
        let svg = SvgRenderer::new(&config).render(&f);
        assert!(svg.contains(r#"x1="0" y1="1005" x2="900" y2="1005""#));
        assert_eq!(svg.matches("class=\"section-label\"").count(), 4);
        // Three dividers plus the baseline
        assert_eq!(svg.matches("class=\"linear-line\"").count(), 4);
        assert!(svg.contains(r#"x="337.5" y="1045""#));
        assert!(!svg.contains("circle-ring"));
    }

    #[test]
    fn test_one_element_per_line() {
        let config = BullseyeConfig::default();
        let mut f = frame(&config);
        f.decoration = None;
        let svg = SvgRenderer::new(&config).render(&f);
        assert!(svg.ends_with("</svg>\n"));
        // Root, employee group, four lines per entity, two closing tags
        assert_eq!(svg.lines().count(), 2 + 3 * 4 + 2);
        assert!(svg.lines().all(|line| line.trim_start().starts_with('<')));

        let ringed = SvgRenderer::new(&config).render(&frame(&config));
        assert!(ringed
            .lines()
            .filter(|line| line.contains("circle-ring"))
            .all(|line| line.trim_start().starts_with("<path") && line.ends_with("/>")));
    }

    #[test]
    fn test_no_decoration_draws_only_entities() {
        let config = BullseyeConfig::default();
        let mut f = frame(&config);
        f.decoration = None;
        let svg = SvgRenderer::new(&config).render(&f);
        assert!(!svg.contains("circle-ring"));
        assert!(!svg.contains("linear-line"));
        assert_eq!(svg.matches("class=\"employee\"").count(), 3);
    }

    #[test]
    fn test_photos_show_initials() {
        let config = BullseyeConfig::default();
        let mut f = frame(&config);
        f.display = DisplayMode::Photos;
        let svg = SvgRenderer::new(&config).render(&f);
        assert!(svg.contains(">M1</text>"));
        assert!(svg.contains("<title>Member 1</title>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("R&D <Ops>"), "R&amp;D &lt;Ops&gt;");
    }
}
