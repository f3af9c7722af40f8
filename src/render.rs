use std::fmt::Write;

use crate::status::ProcessRecord;

//------------------------------------------------------------------------------

/// Geometry and styling shared by every process box.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Horizontal offset of every box.
    pub x: u32,
    /// Vertical offset of the first box.
    pub y: u32,
    /// Gap between consecutive boxes.
    pub y_margin: u32,
    pub width: u32,
    pub height: u32,
    /// Horizontal offset of the label within its box.
    pub text_padding: u32,
    pub stroke: &'static str,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            x: 100,
            y: 50,
            y_margin: 20,
            width: 100,
            height: 150,
            text_padding: 10,
            stroke: "black",
        }
    }
}

impl Layout {
    /// Vertical distance between the tops of consecutive boxes.
    pub fn pitch(&self) -> u32 {
        self.height.saturating_add(self.y_margin)
    }

    /// Vertical offset of box `index`.  Saturates rather than overflowing.
    pub fn box_y(&self, index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.pitch())
            .saturating_add(self.y)
    }

    /// Canvas height needed to hold `n` boxes.
    pub fn canvas_height(&self, n: usize) -> u32 {
        self.box_y(n)
    }
}

//------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub stroke: &'static str,
    pub width: u32,
    pub height: u32,
    /// None when the record's status has no color; the attribute is omitted.
    pub fill: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: u32,
    pub y: u32,
    pub content: String,
}

/// One box+label pair, translated to its position on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub translate: (u32, u32),
    pub rect: Rect,
    pub text: Text,
}

impl Group {
    fn new(layout: &Layout, index: usize, rec: &ProcessRecord) -> Self {
        Self {
            translate: (layout.x, layout.box_y(index)),
            rect: Rect {
                stroke: layout.stroke,
                width: layout.width,
                height: layout.height,
                fill: rec.fill(),
            },
            text: Text {
                x: layout.text_padding,
                y: layout.height / 2,
                content: rec.label(),
            },
        }
    }
}

//------------------------------------------------------------------------------

/// An SVG surface holding one group per drawn process record.
#[derive(Clone, Debug)]
pub struct Canvas {
    pub width: u32,
    pub height: Option<u32>,
    pub layout: Layout,
    groups: Vec<Group>,
}

impl Canvas {
    pub fn new(width: u32) -> Self {
        Self::with_layout(width, Layout::default())
    }

    pub fn with_layout(width: u32, layout: Layout) -> Self {
        Self {
            width,
            height: None,
            layout,
            groups: Vec::new(),
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Draws process records.
    ///
    /// Records bind to groups by index.  Only records past the end of the
    /// existing groups get new groups; groups already drawn are left as they
    /// are.  The height always tracks the number of records.
    pub fn draw_ps(&mut self, records: &[ProcessRecord]) {
        self.height = Some(self.layout.canvas_height(records.len()));
        let start = self.groups.len();
        for (i, rec) in records.iter().enumerate().skip(start) {
            self.groups.push(Group::new(&self.layout, i, rec));
        }
    }

    /// Serializes the canvas as a standalone SVG element.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        // Writes to a String can't fail.
        _ = self.write_svg(&mut svg);
        svg
    }

    fn write_svg(&self, out: &mut String) -> std::fmt::Result {
        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}""#,
            self.width
        )?;
        if let Some(height) = self.height {
            write!(out, r#" height="{}""#, height)?;
        }
        out.push_str(">\n");
        for group in &self.groups {
            let (x, y) = group.translate;
            writeln!(out, r#"  <g transform="translate({}, {})">"#, x, y)?;
            let rect = &group.rect;
            write!(
                out,
                r#"    <rect stroke="{}" width="{}" height="{}""#,
                escape(rect.stroke),
                rect.width,
                rect.height
            )?;
            if let Some(fill) = rect.fill {
                write!(out, r#" fill="{}""#, escape(fill))?;
            }
            out.push_str("/>\n");
            let text = &group.text;
            writeln!(
                out,
                r#"    <text x="{}" y="{}">{}</text>"#,
                text.x,
                text.y,
                escape(&text.content)
            )?;
            out.push_str("  </g>\n");
        }
        out.push_str("</svg>\n");
        Ok(())
    }
}

/// Escapes text for use in XML content or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

//------------------------------------------------------------------------------
