//! SVG generation from floor plans

use std::collections::BTreeMap;

use crate::layout::{
    BoundingBox, CanvasConfig, DisplayRoom, FloorBand, FloorPlan, RoomStatus, ViewMode,
};
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

/// Horizontal alignment of a text element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    /// Add CSS custom properties from a stylesheet
    ///
    /// Tokens the stylesheet leaves out are filled in from the default
    /// palette so every `var(--...)` used by the renderer resolves.
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let mut tokens: BTreeMap<&str, &str> = BTreeMap::new();
        let default = Stylesheet::default();
        for (token, value) in default.colors.iter().chain(stylesheet.colors.iter()) {
            tokens.insert(token, value);
        }

        let mut css = String::from(":root {\n");
        for (token, value) in &tokens {
            css.push_str(&format!("      --{}: {};\n", token, value));
        }
        css.push_str("    }");
        if tokens.contains_key("font-family") {
            let prefix = self.prefix();
            css.push_str(&format!(
                "\n    .{}label, .{}text {{ font-family: var(--font-family); }}",
                prefix, prefix
            ));
        }
        self.styles.push(css);
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn class(&self, name: &str) -> String {
        format!("{}{}", self.prefix(), name)
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle element
    pub fn add_rect(
        &mut self,
        id: Option<&str>,
        bounds: BoundingBox,
        classes: &[String],
        styles: &str,
    ) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        let class_list = std::iter::once(self.class("rect"))
            .chain(classes.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<rect{} class="{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            id_attr,
            class_list,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            styles
        ));
    }

    /// Add a line element
    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, classes: &[String], styles: &str) {
        let class_list = std::iter::once(self.class("line"))
            .chain(classes.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            self.indent_str(),
            class_list,
            x1,
            y1,
            x2,
            y2,
            styles
        ));
    }

    /// Add a text element, vertically centered on `y`
    pub fn add_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        anchor: TextAnchor,
        classes: &[String],
        styles: &str,
    ) {
        let class_list = std::iter::once(self.class("text"))
            .chain(classes.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<text class="{}" x="{}" y="{}" text-anchor="{}" dominant-baseline="middle"{}>{}</text>"#,
            self.indent_str(),
            class_list,
            x,
            y,
            anchor.as_str(),
            styles,
            escape_xml(text)
        ));
    }

    /// Start a group element
    pub fn start_group(&mut self, id: Option<&str>, classes: &[String]) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };

        self.elements
            .push(format!("{}<g{}{}>", self.indent_str(), id_attr, class_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = viewbox.x - padding;
        let vb_y = viewbox.y - padding;
        let vb_w = viewbox.width + 2.0 * padding;
        let vb_h = viewbox.height + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            vb_x, vb_y, vb_w, vb_h, vb_w, vb_h
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for element in &self.elements {
            svg.push_str(element);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

/// Render a FloorPlan to an SVG string with the default stylesheet
pub fn render_svg(plan: &FloorPlan, canvas: &CanvasConfig, config: &SvgConfig) -> String {
    render_svg_with_stylesheet(plan, canvas, config, &Stylesheet::default())
}

/// Render a FloorPlan to an SVG string with a custom stylesheet
pub fn render_svg_with_stylesheet(
    plan: &FloorPlan,
    canvas: &CanvasConfig,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_stylesheet(stylesheet);

    let canvas_bounds = BoundingBox::new(0.0, 0.0, canvas.canvas_width, plan.total_height);
    let background = builder.class("canvas");
    builder.add_rect(
        None,
        canvas_bounds,
        &[background],
        r#" fill="var(--background-1)""#,
    );

    for band in &plan.bands {
        render_band(plan, band, canvas, config, &mut builder);
    }

    builder.build(canvas_bounds)
}

/// Render one floor: header strip (stacked view only), separator and rooms
fn render_band(
    plan: &FloorPlan,
    band: &FloorBand,
    canvas: &CanvasConfig,
    config: &SvgConfig,
    builder: &mut SvgBuilder,
) {
    let floor_id = builder.class(&format!("floor-{}", band.floor));
    let floor_class = builder.class("floor");
    builder.start_group(Some(&floor_id), &[floor_class]);

    if plan.view == ViewMode::All {
        let header_class = builder.class("floor-header");
        builder.add_rect(
            None,
            BoundingBox::new(0.0, band.top, canvas.canvas_width, band.header_height),
            &[header_class],
            r#" fill="var(--background-header)""#,
        );

        let label_class = builder.class("floor-label");
        let center_y = band.top + band.header_height / 2.0;
        builder.add_text(
            &format!("Floor {}", band.floor),
            24.0,
            center_y,
            TextAnchor::Start,
            &[label_class.clone()],
            r#" fill="var(--text-1)" font-size="28" font-weight="bold""#,
        );
        let count = plan.rooms_on(band.floor).count();
        builder.add_text(
            &format!("{} room{}", count, if count == 1 { "" } else { "s" }),
            canvas.canvas_width - 24.0,
            center_y,
            TextAnchor::End,
            &[label_class],
            r#" fill="var(--text-2)" font-size="18""#,
        );

        if band.rank + 1 < plan.bands.len() {
            let bottom = band.top + canvas.floor_band_height;
            let separator = builder.class("floor-separator");
            builder.add_line(
                0.0,
                bottom,
                canvas.canvas_width,
                bottom,
                &[separator],
                r#" stroke="var(--grid)" stroke-width="2""#,
            );
        }
    }

    for room in plan.rooms_on(band.floor) {
        render_room(room, config, builder);
    }

    builder.end_group();
}

/// Render a single room card
fn render_room(display: &DisplayRoom, config: &SvgConfig, builder: &mut SvgBuilder) {
    let room = &display.room;
    let status_token = room.status.color_token();
    let room_class = builder.class("room");
    let status_class = builder.class(status_token);
    let room_id = builder.class(&format!("room-{}", room.id));
    builder.start_group(Some(&room_id), &[room_class, status_class]);

    let card_class = builder.class("card");
    builder.add_rect(
        None,
        display.display_bounds(),
        &[card_class],
        &format!(
            r#" rx="8" fill="var(--{})" stroke="var(--{}-border)" stroke-width="2""#,
            status_token, status_token
        ),
    );

    let center_x = room.x + room.width / 2.0;
    let center_y = display.display_y + room.height / 2.0;
    // occupied cards carry tenant details instead of the room type
    let show_type = config.show_status && room.status != RoomStatus::Occupied;
    let number_y = match (config.show_status, show_type) {
        (true, true) => center_y - 18.0,
        (true, false) => center_y - 12.0,
        (false, _) => center_y,
    };
    let label_class = builder.class("label");
    builder.add_text(
        &room.number,
        center_x,
        number_y,
        TextAnchor::Middle,
        &[label_class],
        r#" fill="var(--text-1)" font-size="22" font-weight="bold""#,
    );

    if config.show_status {
        let badge_class = builder.class("badge");
        let badge_token = status_token.replacen("status-", "badge-", 1);
        builder.add_text(
            room.status.label(),
            center_x,
            number_y + 26.0,
            TextAnchor::Middle,
            &[badge_class],
            &format!(r#" fill="var(--{})" font-size="14""#, badge_token),
        );
    }

    if show_type {
        let type_class = builder.class("room-type");
        builder.add_text(
            room.room_type.label(),
            center_x,
            number_y + 46.0,
            TextAnchor::Middle,
            &[type_class],
            r#" fill="var(--text-2)" font-size="12""#,
        );
    }

    builder.end_group();
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
