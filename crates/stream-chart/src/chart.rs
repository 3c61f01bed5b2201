// File: crates/stream-chart/src/chart.rs
// Summary: The streaming chart component: props in, memoized plot config, live-tail view
// window, resize handling and cursor routing to the tooltip plugin.

use tracing::{debug, warn};

use crate::engine::PlotEngine;
use crate::error::Result;
use crate::geometry::Size;
use crate::memo::MemoizedConfig;
use crate::options::{BuildInput, PlotConfig, PluginConfig};
use crate::overlay::OverlayHost;
use crate::plugin::{CursorEvent, CursorPlugin, HoverContext};
use crate::resize::ResizeObserver;
use crate::series::ChartProps;
use crate::theme::Theme;
use crate::tooltip::TooltipPlugin;
use crate::view::{apply_view_window, ViewWindow};

pub struct StreamingChart<E: PlotEngine> {
    engine: E,
    props: ChartProps,
    theme: Theme,
    resize: ResizeObserver,
    memo: MemoizedConfig,
    tooltip: TooltipPlugin,
    tooltip_enabled: bool,
    /// Page offset of the container's top-left corner.
    origin: (f32, f32),
    window: ViewWindow,
}

impl<E: PlotEngine> StreamingChart<E> {
    /// Mount the chart on `engine`: build the config, load data and pin the view window.
    pub fn mount(engine: E, props: ChartProps, theme: Theme) -> Result<Self> {
        props.validate()?;
        let refresh_rate = props.data.refresh_rate;
        let mut chart = Self {
            engine,
            window: ViewWindow::tail(props.data.buffer_len(), props.x_range),
            props,
            theme,
            resize: ResizeObserver::new(),
            memo: MemoizedConfig::new(),
            tooltip: TooltipPlugin::new(refresh_rate),
            tooltip_enabled: false,
            origin: (0.0, 0.0),
        };
        chart.sync_config()?;
        chart.data_updated()?;
        Ok(chart)
    }

    /// Replace props. Returns whether the plot config was rebuilt.
    pub fn set_props(&mut self, props: ChartProps) -> Result<bool> {
        if let Err(e) = props.validate() {
            warn!(error = %e, "rejected chart props");
            return Err(e);
        }
        self.props = props;
        let rebuilt = self.sync_config()?;
        self.data_updated()?;
        Ok(rebuilt)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<bool> {
        self.theme = theme;
        self.sync_config()
    }

    /// Append one sample per series and slide the window.
    pub fn push_samples(&mut self, values: &[f64]) -> Result<()> {
        self.props.data.push_samples(values);
        self.data_updated()
    }

    /// Container resize notification. Returns whether the config was rebuilt.
    pub fn on_resize(&mut self, width: f64, height: f64) -> Result<bool> {
        match self.resize.observe(width, height) {
            Some(size) => {
                debug!(width = size.width, height = size.height, "container resized");
                self.sync_config()
            }
            None => Ok(false),
        }
    }

    /// Page position of the container, used to place overlay nodes.
    pub fn set_origin(&mut self, left: f32, top: f32) {
        self.origin = (left, top);
    }

    /// Cursor moved to plot-relative `(left, top)`.
    pub fn on_cursor_move(&mut self, left: f32, top: f32, host: &mut dyn OverlayHost) {
        let idx = if top > 0.0 { self.engine.cursor_index(left) } else { None };
        self.dispatch_cursor(&CursorEvent::new(left, top, idx), host);
    }

    pub fn on_cursor_leave(&mut self, host: &mut dyn OverlayHost) {
        self.dispatch_cursor(&CursorEvent::left_plot(), host);
    }

    /// Draw the current state. The view window was already applied on data update.
    pub fn render(&mut self) -> Result<()> {
        self.engine.redraw()
    }

    /// Tear down: remove overlay nodes and hand the engine back.
    pub fn unmount(mut self, host: &mut dyn OverlayHost) -> E {
        self.tooltip.destroy(host);
        self.engine
    }

    pub fn engine(&self) -> &E { &self.engine }
    pub fn props(&self) -> &ChartProps { &self.props }
    pub fn size(&self) -> Size { self.resize.size() }
    pub fn view_window(&self) -> ViewWindow { self.window }
    pub fn tooltip(&self) -> &TooltipPlugin { &self.tooltip }
    pub fn config(&self) -> Option<&PlotConfig> { self.memo.current() }
    pub fn config_rebuilds(&self) -> u64 { self.memo.rebuilds() }

    fn dispatch_cursor(&mut self, evt: &CursorEvent, host: &mut dyn OverlayHost) {
        if !self.tooltip_enabled {
            self.tooltip.hide(host);
            return;
        }
        let ctx = HoverContext {
            plot: self.engine.plot_bbox().offset(self.origin.0, self.origin.1),
            datasets: &self.props.data.datasets,
            engine: &self.engine,
        };
        self.tooltip.on_set_cursor(evt, &ctx, host);
    }

    /// Rebuild the config if its key changed and push it to the engine.
    fn sync_config(&mut self) -> Result<bool> {
        let input = BuildInput {
            datasets: &self.props.data.datasets,
            refresh_rate: self.props.data.refresh_rate,
            options: self.props.options,
            theme: &self.theme,
            size: self.resize.size(),
            show_second_axis: self.props.show_second_axis,
        };
        let (config, rebuilt) = self.memo.get(&input);
        if !rebuilt {
            return Ok(false);
        }
        self.engine.configure(config)?;
        self.tooltip_enabled = config.has_tooltip();
        for plugin in &config.plugins {
            match *plugin {
                PluginConfig::Tooltip { refresh_rate } => self.tooltip.set_refresh_rate(refresh_rate),
            }
        }
        // a reconfigured engine starts from auto ranges; pin x again
        self.window = apply_view_window(&mut self.engine, self.props.data.buffer_len(), self.props.x_range)?;
        Ok(true)
    }

    /// New samples: hand them to the engine, then pin the live-tail window.
    fn data_updated(&mut self) -> Result<()> {
        self.engine.set_data(self.props.data.aligned())?;
        self.window = apply_view_window(&mut self.engine, self.props.data.buffer_len(), self.props.x_range)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MemoryEngine;
    use crate::overlay::OverlayManager;
    use crate::scale::{X, Y1};
    use crate::series::{ChartInput, DisplayOptions, SeriesDescriptor};
    use crate::theme::Rgba;
    use crate::types::TOOLTIP_CLASS;

    fn props(samples: usize, x_range: usize) -> ChartProps {
        let mut input = ChartInput::new(1.0);
        input.add_series(
            SeriesDescriptor::new("a", Rgba::rgb(200, 0, 0)).with_data((0..samples).map(|i| i as f64).collect()),
        );
        input.add_series(
            SeriesDescriptor::new("b", Rgba::rgb(0, 200, 0)).with_data((0..samples).map(|i| (i * 10) as f64).collect()),
        );
        ChartProps::new(x_range, input)
    }

    fn mounted(samples: usize, x_range: usize) -> StreamingChart<MemoryEngine> {
        StreamingChart::mount(MemoryEngine::new(), props(samples, x_range), Theme::dark()).unwrap()
    }

    #[test]
    fn mount_pins_tail_window() {
        let chart = mounted(50, 20);
        assert_eq!(chart.engine().scale_range(X), Some((30.0, 49.0)));
        assert_eq!(chart.view_window(), ViewWindow::tail(50, 20));
    }

    #[test]
    fn pushing_samples_slides_window_without_rebuild() {
        let mut chart = mounted(50, 20);
        let rebuilds = chart.config_rebuilds();
        chart.push_samples(&[50.0, 500.0]).unwrap();
        chart.push_samples(&[51.0, 510.0]).unwrap();
        assert_eq!(chart.engine().scale_range(X), Some((32.0, 51.0)));
        assert_eq!(chart.config_rebuilds(), rebuilds);
        assert_eq!(chart.engine().data().len(), 52);
    }

    #[test]
    fn resize_rebuilds_once_per_change() {
        let mut chart = mounted(10, 5);
        assert!(chart.on_resize(640.0, 200.0).unwrap());
        assert!(!chart.on_resize(640.2, 199.8).unwrap());
        assert_eq!(chart.config().unwrap().width, 640);
        assert_eq!(chart.engine().config().unwrap().height, 200);
        // x window survives the reconfigure
        assert_eq!(chart.engine().scale_range(X), Some((5.0, 9.0)));
    }

    #[test]
    fn set_props_toggles_second_axis() {
        let mut chart = mounted(10, 5);
        let mut p = chart.props().clone();
        p.show_second_axis = true;
        assert!(chart.set_props(p).unwrap());
        assert!(chart.engine().config().unwrap().scale(Y1).is_some());
        assert!(chart.engine().scale_range(Y1).is_some());
    }

    #[test]
    fn invalid_props_are_rejected_and_state_kept() {
        let mut chart = mounted(10, 5);
        let mut p = chart.props().clone();
        p.x_range = 0;
        assert!(chart.set_props(p).is_err());
        assert_eq!(chart.props().x_range, 5);
    }

    #[test]
    fn recolored_theme_reaches_engine() {
        let mut chart = mounted(10, 5);
        assert!(!chart.set_theme(Theme::dark()).unwrap());
        let custom = Theme { text: Rgba::rgb(255, 0, 0), border: Rgba::rgb(0, 255, 0), ..Theme::dark() };
        assert!(chart.set_theme(custom).unwrap());
        let cfg = chart.engine().config().unwrap();
        let y = cfg.axes.iter().find(|a| a.scale == "y").unwrap();
        assert_eq!(y.stroke, Rgba::rgb(255, 0, 0));
        assert_eq!(y.ticks.stroke, Rgba::rgb(0, 255, 0));
    }

    #[test]
    fn render_redraws_engine() {
        let mut chart = mounted(10, 5);
        chart.render().unwrap();
        chart.render().unwrap();
        assert_eq!(chart.engine().redraws(), 2);
    }

    #[test]
    fn hover_shows_and_leave_hides_tooltip() {
        let mut chart = mounted(10, 5);
        chart.set_origin(100.0, 50.0);
        let mut body = OverlayManager::new();
        chart.on_cursor_move(20.0, 30.0, &mut body);
        assert!(chart.tooltip().is_visible());
        assert_eq!(body.count_by_class(TOOLTIP_CLASS), 1);
        let (_, node) = body.nodes().next().unwrap();
        let bbox = chart.engine().plot_bbox();
        assert_eq!(node.left, 100.0 + bbox.left + 20.0 + 10.0);
        chart.on_cursor_move(20.0, -1.0, &mut body);
        assert_eq!(body.count_by_class(TOOLTIP_CLASS), 0);
        chart.on_cursor_move(20.0, 30.0, &mut body);
        chart.on_cursor_leave(&mut body);
        assert!(body.is_empty());
    }

    #[test]
    fn tooltip_disabled_by_options() {
        let mut p = props(10, 5);
        p.options = DisplayOptions { show_tooltip: Some(false), ..DisplayOptions::default() };
        let mut chart = StreamingChart::mount(MemoryEngine::new(), p, Theme::dark()).unwrap();
        let mut body = OverlayManager::new();
        chart.on_cursor_move(20.0, 30.0, &mut body);
        assert!(body.is_empty());
    }

    #[test]
    fn unmount_cleans_overlay() {
        let mut chart = mounted(10, 5);
        let mut body = OverlayManager::new();
        chart.on_cursor_move(20.0, 30.0, &mut body);
        let engine = chart.unmount(&mut body);
        assert!(body.is_empty());
        assert_eq!(engine.data().len(), 10);
    }
}
