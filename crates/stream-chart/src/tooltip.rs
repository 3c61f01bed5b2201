// File: crates/stream-chart/src/tooltip.rs
// Summary: Tooltip plugin: a hidden/visible state machine driving one floating overlay node
// that follows the cursor and lists each series' value.

use tracing::debug;

use crate::format::{format_age, format_tooltip_value, sample_age};
use crate::geometry::BBox;
use crate::overlay::{NodeId, OverlayContent, OverlayHost};
use crate::plugin::{CursorEvent, CursorPlugin, HoverContext};
use crate::theme::Rgba;
use crate::types::{TOOLTIP_CLASS, TOOLTIP_LABEL_CLASS, TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y};

/// Horizontal padding plus color swatch, in pixels.
const TOOLTIP_CHROME_PX: f32 = 32.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub color: Rgba,
    pub label: String,
    pub value: String,
}

/// Text shown in the tooltip: the sample age, then one row per series.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub header: String,
    pub rows: Vec<TooltipRow>,
}

impl TooltipContent {
    pub fn build(ctx: &HoverContext<'_>, idx: usize, refresh_rate: f64) -> Self {
        let header = format_age(sample_age(ctx.buffer_len(), idx, refresh_rate));
        let rows = ctx
            .datasets
            .iter()
            .enumerate()
            .map(|(i, ds)| TooltipRow {
                color: ds.color,
                label: ds.label.clone(),
                value: format_tooltip_value(&ctx.engine.value_text(i, idx)),
            })
            .collect();
        Self { header, rows }
    }

    pub fn lines(&self) -> Vec<String> {
        std::iter::once(self.header.clone())
            .chain(self.rows.iter().map(|r| format!("{}: {}", r.label, r.value)))
            .collect()
    }

    pub fn to_html(&self) -> String {
        let mut html = format!("<div class=\"{TOOLTIP_CLASS}-time\">{}</div>", escape_html(&self.header));
        for row in &self.rows {
            html.push_str(&format!(
                "<div class=\"{TOOLTIP_LABEL_CLASS}\"><span class=\"{TOOLTIP_CLASS}-swatch\" style=\"background:{}\"></span>{}: {}</div>",
                row.color.to_css(),
                escape_html(&row.label),
                escape_html(&row.value),
            ));
        }
        html
    }

    pub fn to_overlay(&self) -> OverlayContent {
        OverlayContent { html: self.to_html(), lines: self.lines(), chrome_px: TOOLTIP_CHROME_PX }
    }
}

/// Page position of a tooltip `width` pixels wide for a cursor at plot-relative
/// `(cursor_left, cursor_top)`. Returns `(left, top, flipped)`; the tooltip moves to the
/// cursor's left when it would run past the plot's right edge.
pub fn tooltip_position(plot: BBox, cursor_left: f32, cursor_top: f32, width: f32) -> (f32, f32, bool) {
    let anchor = plot.left + cursor_left;
    let top = plot.top + cursor_top - TOOLTIP_OFFSET_Y;
    if anchor + TOOLTIP_OFFSET_X + width > plot.right() {
        (anchor - TOOLTIP_OFFSET_X - width, top, true)
    } else {
        (anchor + TOOLTIP_OFFSET_X, top, false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipState {
    Hidden,
    Visible(NodeId),
}

#[derive(Debug)]
pub struct TooltipPlugin {
    state: TooltipState,
    refresh_rate: f64,
}

impl TooltipPlugin {
    pub fn new(refresh_rate: f64) -> Self {
        Self { state: TooltipState::Hidden, refresh_rate }
    }

    pub fn state(&self) -> TooltipState { self.state }

    pub fn set_refresh_rate(&mut self, refresh_rate: f64) {
        self.refresh_rate = refresh_rate;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible(_))
    }

    /// Remove the owned node if any. A node already gone is a no-op.
    pub fn hide(&mut self, host: &mut dyn OverlayHost) {
        if let TooltipState::Visible(id) = self.state {
            host.remove(id);
            debug!(plugin = self.id(), id, "tooltip hidden");
        }
        self.state = TooltipState::Hidden;
    }

    /// Our node, creating it after sweeping strays when missing.
    fn ensure_node(&mut self, host: &mut dyn OverlayHost) -> NodeId {
        if let TooltipState::Visible(id) = self.state {
            if host.contains(id) {
                return id;
            }
        }
        host.remove_by_class(TOOLTIP_CLASS);
        let id = host.create(TOOLTIP_CLASS);
        debug!(plugin = self.id(), id, "tooltip shown");
        self.state = TooltipState::Visible(id);
        id
    }
}

impl CursorPlugin for TooltipPlugin {
    fn id(&self) -> &'static str { "tooltip" }

    fn on_set_cursor(&mut self, evt: &CursorEvent, ctx: &HoverContext<'_>, host: &mut dyn OverlayHost) {
        let Some(idx) = evt.idx.filter(|_| evt.is_inside()) else {
            self.hide(host);
            return;
        };
        let id = self.ensure_node(host);
        let content = TooltipContent::build(ctx, idx, self.refresh_rate);
        host.set_content(id, content.to_overlay());
        let width = host.width(id);
        let (left, top, _) = tooltip_position(ctx.plot, evt.left, evt.top, width);
        host.set_position(id, left, top);
    }

    fn destroy(&mut self, host: &mut dyn OverlayHost) {
        self.hide(host);
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
